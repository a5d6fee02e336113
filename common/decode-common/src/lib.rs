//! Decode Common - Shared utilities for response decoder binaries
//!
//! This crate provides the ambient pieces every decoder front-end needs:
//!
//! - **Initialization**: [`init_tracing`] for standardized logging to stderr
//! - **Output**: Helper functions for rendering decoded values
//!
//! # Example
//!
//! ```rust,ignore
//! use decode_common::{init_tracing, json_output};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing("github_decode")?;
//!     let issue = decode_something()?;
//!     println!("{}", json_output(&issue, false)?);
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod output;

// Re-export commonly used items at crate root
pub use init::{init_tracing, LogFormat};
pub use output::{json_output, text_table};
