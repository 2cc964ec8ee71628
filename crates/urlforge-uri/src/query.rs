//! Query component codec.
//!
//! The query is modelled as an ordered map from name to value. Decoding
//! follows `application/x-www-form-urlencoded` rules; a name that occurs more
//! than once keeps its first position and takes the last value. Repeated or
//! array-style keys are not preserved.

use indexmap::IndexMap;
use url::form_urlencoded;

/// Ordered query parameters, keyed by decoded name.
pub type QueryMap = IndexMap<String, String>;

/// Decode a raw query string (without the leading `?`) into a [`QueryMap`].
///
/// # Examples
///
/// ```
/// use urlforge_uri::query::decode;
///
/// let query = decode("q=rust+lang&page=2&q=tokio");
/// assert_eq!(query.get("q").map(String::as_str), Some("tokio"));
/// assert_eq!(query.get_index(0).map(|(k, _)| k.as_str()), Some("q"));
/// assert_eq!(query.len(), 2);
/// ```
pub fn decode(raw: &str) -> QueryMap {
	let mut map = QueryMap::new();
	for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
		map.insert(name.into_owned(), value.into_owned());
	}
	map
}

/// Encode a [`QueryMap`] into a query string (without the leading `?`).
///
/// # Examples
///
/// ```
/// use urlforge_uri::QueryMap;
/// use urlforge_uri::query::encode;
///
/// let mut query = QueryMap::new();
/// query.insert("q".to_string(), "rust lang".to_string());
/// query.insert("page".to_string(), "2".to_string());
///
/// assert_eq!(encode(&query), "q=rust+lang&page=2");
/// ```
pub fn encode(map: &QueryMap) -> String {
	form_urlencoded::Serializer::new(String::new())
		.extend_pairs(map.iter())
		.finish()
}
