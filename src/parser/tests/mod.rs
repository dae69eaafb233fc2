//! Unit tests for the parser module

mod parser_tests;
