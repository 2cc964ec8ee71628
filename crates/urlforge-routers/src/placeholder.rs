//! Colon-prefixed placeholder tokens.
//!
//! A placeholder is `:` followed by one or more ASCII letters, digits or
//! underscores, e.g. `:controller` or `:article_id`. Any other text in a
//! route template is literal.

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in substituted values: everything but RFC 3986
/// unreserved characters.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

fn is_name_byte(b: u8) -> bool {
	b.is_ascii_alphanumeric() || b == b'_'
}

/// A single lexical piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
	Literal(&'a str),
	Placeholder(&'a str),
}

/// Split a template into literal runs and placeholder names.
fn tokenize(template: &str) -> Vec<Token<'_>> {
	let bytes = template.as_bytes();
	let mut tokens = Vec::new();
	let mut literal_start = 0;
	let mut i = 0;

	while i < bytes.len() {
		if bytes[i] == b':' {
			let name_start = i + 1;
			let mut name_end = name_start;
			while name_end < bytes.len() && is_name_byte(bytes[name_end]) {
				name_end += 1;
			}
			if name_end > name_start {
				if literal_start < i {
					tokens.push(Token::Literal(&template[literal_start..i]));
				}
				tokens.push(Token::Placeholder(&template[name_start..name_end]));
				literal_start = name_end;
				i = name_end;
				continue;
			}
		}
		i += 1;
	}

	if literal_start < bytes.len() {
		tokens.push(Token::Literal(&template[literal_start..]));
	}

	tokens
}

/// List placeholder names in order of first appearance.
///
/// # Examples
///
/// ```
/// use urlforge_routers::placeholder::placeholder_names;
///
/// let names = placeholder_names("/:controller/:action.:format/:action");
/// assert_eq!(names, vec!["controller", "action", "format"]);
/// ```
pub fn placeholder_names(template: &str) -> Vec<String> {
	let mut names: Vec<String> = Vec::new();
	for token in tokenize(template) {
		if let Token::Placeholder(name) = token {
			if !names.iter().any(|n| n == name) {
				names.push(name.to_string());
			}
		}
	}
	names
}

/// Replace every `:<name>` token whose name is in `values`.
///
/// Tokens without a value are kept verbatim. Values are inserted as-is; no
/// encoding happens here.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use urlforge_routers::placeholder::substitute;
///
/// let mut values = IndexMap::new();
/// values.insert("id".to_string(), "53".to_string());
///
/// assert_eq!(substitute("/:action/:id/product.html", &values), "/:action/53/product.html");
/// ```
pub fn substitute(template: &str, values: &IndexMap<String, String>) -> String {
	let mut out = String::with_capacity(template.len());
	for token in tokenize(template) {
		match token {
			Token::Literal(text) => out.push_str(text),
			Token::Placeholder(name) => match values.get(name) {
				Some(value) => out.push_str(value),
				None => {
					out.push(':');
					out.push_str(name);
				}
			},
		}
	}
	out
}

/// Percent-encode a parameter value for use in a path.
///
/// # Examples
///
/// ```
/// use urlforge_routers::placeholder::encode_value;
///
/// assert_eq!(encode_value("a b"), "a%20b");
/// assert_eq!(encode_value("hello-world_1.0~x"), "hello-world_1.0~x");
/// assert_eq!(encode_value("a/b?c"), "a%2Fb%3Fc");
/// ```
pub fn encode_value(raw: &str) -> String {
	utf8_percent_encode(raw, SEGMENT).to_string()
}
