//! tplr - template renderer for AWS-backed configuration
//!
//! Library side of the `tplr` binary: argument parsing, logging setup and
//! the read/render/write flow.

pub mod cli;
pub mod logging;
pub mod run;

pub use cli::Arguments;
pub use run::{read_source, render_document, run, write_output};
