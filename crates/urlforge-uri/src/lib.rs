//! # urlforge URI
//!
//! A structured URI value that can be parsed from a string, edited field by
//! field and recomposed from any subset of its components.
//!
//! - **Best-effort parsing**: [`Uri::parse`] never fails; malformed input
//!   yields a URI with every component unset.
//! - **Presence, not emptiness**: each component is an `Option`, and
//!   composition renders a component whenever it is set, even if empty.
//! - **Canonical query map**: the query is held as an ordered name/value map
//!   and the query string is recomputed from it on every read.
//!
//! # Examples
//!
//! ```
//! use urlforge_uri::Uri;
//!
//! let mut uri = Uri::parse("https://example.com/catalog?page=2#top");
//! uri.set_query("sort", "price");
//!
//! assert_eq!(uri.host(), "https://example.com");
//! assert_eq!(uri.local(), "/catalog?page=2&sort=price#top");
//! ```

mod parser;
pub mod query;
mod uri;

pub use query::QueryMap;
pub use uri::{Uri, UriPart};
