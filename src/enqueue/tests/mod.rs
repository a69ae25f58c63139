//! Unit tests for the enqueue module.

mod config_tests;
