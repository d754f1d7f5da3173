//! Terminal front end of the gym operations dashboard.
//!
//! Drives the same load cycle as the browser dashboard over `reqwest` and
//! prints the result as plain text.

pub mod cli;
pub mod config;
pub mod http;
pub mod report;

#[cfg(test)]
mod test_utils;
