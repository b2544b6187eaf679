//! Entry point library for the `freq` binary.
//!
//! The runner is exposed here so the analysis pipeline can be driven from
//! other programs as well as from the command line.
pub mod cli;
pub mod logging;
pub mod runner;
