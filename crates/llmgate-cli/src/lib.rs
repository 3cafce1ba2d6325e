//! # llmgate-cli
//!
//! Argument parsing and logging setup for the `llmgate` binary. The binary
//! itself (`main.rs`) is the composition root: it reads configuration once
//! and hands it to `llmgate_proxy::serve`.

pub mod logging;
pub mod parser;

pub use logging::init_tracing;
pub use parser::Cli;
