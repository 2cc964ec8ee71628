//! Structured URI values.
//!
//! # Examples
//!
//! ```
//! use urlforge::uri::Uri;
//!
//! let uri = Uri::parse("https://example.com/docs?page=2#intro");
//! assert_eq!(uri.local(), "/docs?page=2#intro");
//! ```

#[cfg(feature = "uri")]
pub use urlforge_uri::*;
