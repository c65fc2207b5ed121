//! Domain models and types for Veil.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`CommentId`])
//! - **Address classification** ([`AddressKind`])
//! - **Records** ([`CommentRecord`])
//! - **Error types** ([`VeilError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VeilError>`]:
//!
//! ```rust,no_run
//! use veil::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = veil::config::load_config("veil.toml")?;
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod comment;
pub mod errors;
pub mod ids;
pub mod result;

pub use address::AddressKind;
pub use comment::CommentRecord;
pub use errors::{StoreError, VeilError};
pub use ids::CommentId;
pub use result::Result;
