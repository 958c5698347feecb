//! Serving a catalog loaded from disk.

mod common;

use std::io::Write;

use cdnjs_index::backends::memory::InMemoryIndex;
use cdnjs_rest::ServerConfig;
use serde_json::Value;

use common::fixtures::{CATALOG_SIZE, catalog_json};
use common::harness::RestTestHarness;

#[tokio::test]
async fn test_serves_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", catalog_json()).unwrap();

    let index = InMemoryIndex::from_catalog_file(file.path()).await.unwrap();
    assert_eq!(index.len(), CATALOG_SIZE);

    let harness = RestTestHarness::with_provider(index, ServerConfig::for_testing());
    let body: Value = harness.get("/libraries?search=jquery&limit=1").await.json();

    assert_eq!(body["results"][0]["name"], "jquery");
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_rejects_malformed_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"name\": \"not-an-array\"}}").unwrap();

    let err = InMemoryIndex::from_catalog_file(file.path())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to parse catalog"));
}
