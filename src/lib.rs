//! Library entry point for the dua CLI.
//!
//! [`scanner::scan`] walks a directory tree and returns a [`model::ScanReport`]
//! plus any warnings; everything else here feeds it options or renders its output.

pub mod cancel;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod ranking;
pub mod scanner;
