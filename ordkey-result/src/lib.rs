//! Error types and result definitions for the ordkey crates.
//!
//! This crate provides the unified error type ([`Error`]) and result type
//! alias ([`Result<T>`]) used throughout the workspace. All operations that
//! could fail return `Result<T>`, where the error variant says what went
//! wrong and where.
//!
//! # Error Philosophy
//!
//! ordkey uses a single error enum ([`Error`]) rather than crate-specific
//! error types. This approach:
//! - Simplifies error handling across crate boundaries
//! - Allows errors to propagate naturally with the `?` operator
//! - Enables structured error matching for programmatic handling
//!
//! # Error Categories
//!
//! - **Writer failures** ([`Error::Io`]): a downstream sink rejected encoded
//!   key bytes
//! - **Short reads** ([`Error::NotEnoughData`]): the input ended before a
//!   full fixed-width frame
//! - **Corrupt keys** ([`Error::CorruptKey`]): decoded bytes are not a valid
//!   key for the target type
//! - **User input errors** ([`Error::InvalidArgumentError`],
//!   [`Error::TypeMismatch`]): bad parameters handed to an encode-side API

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
