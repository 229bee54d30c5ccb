//! Download module containing the fetch data model and hash verification.
//!
//! # Overview
//!
//! The download module is organized into three components:
//!
//! - [`request`] - [`FetchRequest`], the immutable input of a fetch
//! - [`response`] - [`FetchResult`] and [`ResponseMetadata`]
//! - [`hash`] - Integrity verification through `Content-MD5` checking
//!
//! # Examples
//!
//! ## Verifying a Downloaded Body
//!
//! ```rust
//! use verifetch::download::{FetchResult, ResponseMetadata};
//!
//! let result = FetchResult {
//!     body: b"abcd".to_vec(),
//!     size: 4,
//!     status_code: 200,
//!     metadata: Some(ResponseMetadata {
//!         etag: None,
//!         content_hash: Some("4vxxTEcn7pOV8yTNLn8zHw==".to_string()),
//!     }),
//! };
//!
//! match result.verify() {
//!     Some(true) => println!("Integrity check passed"),
//!     Some(false) => println!("Integrity check failed, discarding download"),
//!     None => println!("Server sent no content hash"),
//! }
//! ```

pub mod hash;
pub mod request;
pub mod response;

pub use hash::{check_hash, content_md5, HashCheckInput};
pub use request::FetchRequest;
pub use response::{FetchResult, ResponseMetadata};
