//! Response header generation.

use axum::http::{HeaderMap, HeaderValue, header};

/// Cache directive of successful catalog responses (six hours).
pub const CACHE_CONTROL_PUBLIC: &str = "public, max-age=21600";

/// Builder for catalog response headers.
#[derive(Debug, Clone)]
pub struct CatalogHeaders {
    /// Cache-Control value.
    cache_control: &'static str,
    /// Content-Type.
    content_type: String,
}

impl Default for CatalogHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogHeaders {
    /// Creates headers for a cacheable JSON response.
    pub fn new() -> Self {
        Self {
            cache_control: CACHE_CONTROL_PUBLIC,
            content_type: mime::APPLICATION_JSON.to_string(),
        }
    }

    /// Sets the Content-Type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(self.cache_control),
        );

        if let Ok(value) = HeaderValue::from_str(&self.content_type) {
            headers.insert(header::CONTENT_TYPE, value);
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = CatalogHeaders::new().to_header_map();
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=21600"
        );
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_html_content_type() {
        let headers = CatalogHeaders::new()
            .with_content_type(mime::TEXT_HTML_UTF_8.as_ref())
            .to_header_map();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(headers.contains_key(header::CACHE_CONTROL));
    }
}
