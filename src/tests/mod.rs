//! Test modules for the Summenbaum crate.
//!
//! - **sizer_tests**: traversal engine behavior over mock trees
//! - **fs_tests**: filesystem adapter against real temp directories
//! - **config_tests**: configuration loading and validation

pub mod config_tests;
