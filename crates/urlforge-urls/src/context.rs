//! Access to the current request's scheme and host.

/// What absolute URL generation needs from the current request.
pub trait RequestContext {
	/// `"http"` or `"https"`.
	fn scheme(&self) -> &str;

	/// Value of the `Host` header, port included when the client sent one.
	fn host_header(&self) -> Option<&str>;
}

/// An owned scheme/host pair, for code that has no `http` request at hand.
///
/// # Examples
///
/// ```
/// use urlforge_urls::{RequestContext, RequestInfo};
///
/// let info = RequestInfo::new("https", "example.com:8443");
/// assert_eq!(info.scheme(), "https");
/// assert_eq!(info.host_header(), Some("example.com:8443"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
	scheme: String,
	host: Option<String>,
}

impl RequestInfo {
	pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
		Self {
			scheme: scheme.into(),
			host: Some(host.into()),
		}
	}

	/// A context without a `Host` header.
	pub fn without_host(scheme: impl Into<String>) -> Self {
		Self {
			scheme: scheme.into(),
			host: None,
		}
	}
}

impl RequestContext for RequestInfo {
	fn scheme(&self) -> &str {
		&self.scheme
	}

	fn host_header(&self) -> Option<&str> {
		self.host.as_deref()
	}
}

#[cfg(feature = "http")]
mod http_impls {
	use super::RequestContext;
	use http::header::HOST;
	use http::request::Parts;
	use http::{HeaderMap, Request, Uri};

	fn scheme_of(uri: &Uri) -> &str {
		uri.scheme_str().unwrap_or("http")
	}

	fn host_of<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
		headers
			.get(HOST)
			.and_then(|h| h.to_str().ok())
			.or_else(|| uri.authority().map(|a| a.as_str()))
	}

	impl RequestContext for Parts {
		fn scheme(&self) -> &str {
			scheme_of(&self.uri)
		}

		fn host_header(&self) -> Option<&str> {
			host_of(&self.headers, &self.uri)
		}
	}

	impl<B> RequestContext for Request<B> {
		fn scheme(&self) -> &str {
			scheme_of(self.uri())
		}

		fn host_header(&self) -> Option<&str> {
			host_of(self.headers(), self.uri())
		}
	}
}
