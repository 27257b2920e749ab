//! # wiregraph-error
//!
//! Unified error handling for wiregraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., DiscoveryFailed, InvariantViolation)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use wiregraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DiscoveryFailed, "object graph not traversable")
//!         .with_operation("walker::discover")
//!         .with_context("root", "app::Server"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, wiregraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Errors here are terminal: every core operation is a pure function of its
//!   inputs, so retrying without changed input would reproduce the failure

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using wiregraph Error
pub type Result<T> = std::result::Result<T, Error>;
