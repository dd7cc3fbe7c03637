//! End-to-end tests for the dirtree binary

mod cli_basic;
