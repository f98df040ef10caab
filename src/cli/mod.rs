//! Command-line front end for the `clast` binary.

pub mod args;
pub mod driver;
pub mod render;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod render_tests;
#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
