//! Best-effort URI decomposition.

use crate::query;
use crate::uri::Uri;
use regex::Regex;
use std::sync::LazyLock;

/// RFC 3986 Appendix B. Matches every input, so structural validation
/// happens on the captured groups afterwards.
static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?")
		.expect("RFC 3986 reference expression is valid")
});

static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("scheme expression is valid")
});

/// Authority components, all optional.
#[derive(Debug, Default, PartialEq, Eq)]
struct Authority {
	user: Option<String>,
	password: Option<String>,
	host: Option<String>,
	port: Option<u16>,
}

/// Parse `raw` into a [`Uri`], or an empty one when the input is malformed.
pub(crate) fn parse(raw: &str) -> Uri {
	match try_parse(raw) {
		Some(uri) => uri,
		None => {
			tracing::debug!(input = raw, "malformed URI, all components left unset");
			Uri::default()
		}
	}
}

fn try_parse(raw: &str) -> Option<Uri> {
	if raw.chars().any(|c| c.is_ascii_control()) {
		return None;
	}

	let caps = URI_REFERENCE.captures(raw)?;
	let mut uri = Uri::default();

	if let Some(scheme) = caps.get(2) {
		if !SCHEME.is_match(scheme.as_str()) {
			return None;
		}
		uri.set_scheme(scheme.as_str());
	}

	if let Some(authority) = caps.get(4) {
		let authority = split_authority(authority.as_str())?;
		uri.set_credentials(authority.user, authority.password);
		if let Some(host) = authority.host {
			uri.set_host(host);
		}
		if let Some(port) = authority.port {
			uri.set_port(port);
		}
	}

	if let Some(path) = caps.get(5).filter(|p| !p.as_str().is_empty()) {
		uri.set_path(path.as_str());
	}

	if caps.get(6).is_some() {
		let raw_query = caps.get(7).map_or("", |q| q.as_str());
		uri.set_query_map(query::decode(raw_query));
	}

	if caps.get(8).is_some() {
		uri.set_fragment(caps.get(9).map_or("", |f| f.as_str()));
	}

	Some(uri)
}

/// Split `userinfo@host:port`. Returns `None` for an unparseable port.
fn split_authority(authority: &str) -> Option<Authority> {
	let mut parsed = Authority::default();

	let host_port = match authority.rsplit_once('@') {
		Some((userinfo, rest)) => {
			match userinfo.split_once(':') {
				Some((user, password)) => {
					parsed.user = Some(user.to_string());
					parsed.password = Some(password.to_string());
				}
				None => parsed.user = Some(userinfo.to_string()),
			}
			rest
		}
		None => authority,
	};

	let (host, port) = if host_port.starts_with('[') {
		// IP literal: the port separator can only follow the closing bracket
		match host_port.find(']') {
			Some(end) => {
				let (literal, rest) = host_port.split_at(end + 1);
				match rest.strip_prefix(':') {
					Some(port) => (literal, Some(port)),
					None if rest.is_empty() => (literal, None),
					None => return None,
				}
			}
			None => return None,
		}
	} else {
		match host_port.rsplit_once(':') {
			Some((host, port)) => (host, Some(port)),
			None => (host_port, None),
		}
	};

	if !host.is_empty() {
		parsed.host = Some(host.to_string());
	}

	match port {
		Some("") | None => {}
		Some(port) => {
			if !port.bytes().all(|b| b.is_ascii_digit()) {
				return None;
			}
			parsed.port = Some(port.parse().ok()?);
		}
	}

	Some(parsed)
}
