//! Human-readable rendering of catalog responses.
//!
//! Browsers asking for `output=human` get a small HTML page showing the same
//! envelope as pretty-printed JSON. The page is an embedded template rendered
//! with HTML auto-escaping.

use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment, context};

use super::LibraryEnvelope;
use crate::error::{RestError, RestResult};

const LIBRARIES_TEMPLATE: &str = "libraries.html";

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|name| {
        if name.ends_with(".html") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    // A broken template surfaces from `get_template` at render time.
    let _ = env.add_template(
        LIBRARIES_TEMPLATE,
        include_str!("../../templates/libraries.html"),
    );
    env
});

/// Renders the envelope as an HTML page.
pub fn render_human(envelope: &LibraryEnvelope) -> RestResult<String> {
    let body = serde_json::to_string_pretty(envelope).map_err(|e| RestError::InternalError {
        message: format!("Failed to serialize response: {}", e),
    })?;

    ENV.get_template(LIBRARIES_TEMPLATE)
        .and_then(|template| {
            template.render(context! {
                total => envelope.total,
                available => envelope.available,
                body => body,
            })
        })
        .map_err(|e| RestError::InternalError {
            message: format!("Failed to render page: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_envelope() {
        let envelope = LibraryEnvelope::new(vec![json!({"name": "jquery", "latest": null})], 3);
        let html = render_human(&envelope).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("1 of 3 results"));
        assert!(html.contains("&quot;name&quot;: &quot;jquery&quot;"));
    }

    #[test]
    fn test_escapes_markup() {
        let envelope = LibraryEnvelope::new(
            vec![json!({"name": "x", "description": "<script>alert(1)</script>"})],
            1,
        );
        let html = render_human(&envelope).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
    }
}
