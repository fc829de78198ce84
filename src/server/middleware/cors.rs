//! Cross-origin policy.
//!
//! Browsers may call the API from the configured base domain, any of its
//! subdomains, and a short list of exact extra origins used during development.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use url::Url;

/// Decides which browser origins may call the API.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    base_domain: String,
    extra_origins: Vec<String>,
}

impl OriginPolicy {
    /// Creates a policy for a base domain and a set of exact extra origins.
    ///
    /// Blank extra origins are skipped and trailing slashes are removed.
    pub fn new<'a, I>(base_domain: &str, extra_origins: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let extra_origins = extra_origins
            .into_iter()
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            base_domain: base_domain.trim().trim_matches('.').to_ascii_lowercase(),
            extra_origins,
        }
    }

    /// Whether a request carrying this `Origin` header value is allowed.
    ///
    /// # Returns
    /// - `true` - The origin is one of the extra origins, or an `https` origin whose
    ///   host is the base domain or one of its subdomains
    /// - `false` - Otherwise, including values that are not valid URLs
    pub fn is_allowed(&self, origin: &str) -> bool {
        if self.extra_origins.iter().any(|allowed| allowed == origin) {
            return true;
        }

        let Ok(url) = Url::parse(origin) else {
            return false;
        };
        if url.scheme() != "https" || self.base_domain.is_empty() {
            return false;
        }

        match url.host_str() {
            Some(host) => {
                let host = host.to_ascii_lowercase();
                host == self.base_domain
                    || host
                        .strip_suffix(&self.base_domain)
                        .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.'))
            }
            None => false,
        }
    }

    /// Builds the CORS layer enforcing this policy.
    pub fn layer(&self) -> CorsLayer {
        let policy = self.clone();

        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _request_parts| {
                    origin
                        .to_str()
                        .map(|origin| policy.is_allowed(origin))
                        .unwrap_or(false)
                },
            ))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    }
}
