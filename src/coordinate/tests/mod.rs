//! Unit tests for the coordinate module

mod test_utils;
mod truncate_tests;
mod precision_tests;
