//! Integration tests for dataset loading

use sentiers_core::loader::{load_catalog, source_for, FileSource, HttpSource};
use sentiers_core::{SentiersError, TrailType};
use std::fs;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const DATASET: &str = r#"[
    {
        "code": "GR10",
        "name": "Tour du Port",
        "type": "Walking",
        "difficulty": 1,
        "starting_point": "Nice: Port Lympia",
        "distance": "4,5",
        "duration": "1h30"
    },
    {
        "code": "PAT2",
        "name": "Remparts",
        "type": "Cultural Heritage",
        "difficulty": 2,
        "starting_point": "Antibes: Vieille ville",
        "distance": "",
        "url": "https://example.org/pat2"
    }
]"#;

#[tokio::test]
async fn test_load_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sentiers.json");
    fs::write(&path, DATASET).unwrap();

    let catalog = load_catalog(&FileSource::new(&path)).await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.source, path.display().to_string());
    assert_eq!(catalog.records()[0].code, "GR10");
    assert_eq!(catalog.records()[1].trail_type, TrailType::CulturalHeritage);
    assert_eq!(catalog.records()[1].distance.as_deref(), Some(""));
}

#[tokio::test]
async fn test_missing_file_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let source = source_for(dir.path().join("absent.json").to_str().unwrap());

    let err = load_catalog(source.as_ref()).await.unwrap_err();

    assert!(matches!(err, SentiersError::DatasetUnavailable { .. }));
    assert!(err.is_load_failure());
}

#[tokio::test]
async fn test_malformed_file_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"code\": \"GR10\"").unwrap();

    let err = load_catalog(&FileSource::new(&path)).await.unwrap_err();

    assert!(matches!(err, SentiersError::DatasetParse { .. }));
}

#[tokio::test]
async fn test_empty_list_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let catalog = load_catalog(&FileSource::new(&path)).await.unwrap();
    assert!(catalog.is_empty());
}

/// Serve one canned HTTP response on a local port and return the dataset URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/sentiers_metadata_data.json", addr)
}

fn http_source(url: String) -> HttpSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpSource::with_client(url, client)
}

#[tokio::test]
async fn test_http_error_status_is_load_failure() {
    let url = serve_once("404 Not Found", "").await;

    let err = load_catalog(&http_source(url.clone())).await.unwrap_err();

    match &err {
        SentiersError::DatasetStatus { url: failed, status } => {
            assert_eq!(*status, 404);
            assert_eq!(failed, &url);
        }
        other => panic!("expected DatasetStatus, got {:?}", other),
    }
    assert!(err.is_load_failure());
}

#[tokio::test]
async fn test_http_empty_list_loads() {
    let url = serve_once("200 OK", "[]").await;

    let catalog = load_catalog(&http_source(url.clone())).await.unwrap();

    assert!(catalog.is_empty());
    assert_eq!(catalog.source, url);
}

#[tokio::test]
async fn test_http_dataset_loads_records() {
    let url = serve_once("200 OK", DATASET).await;

    let catalog = load_catalog(&http_source(url)).await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[1].code, "PAT2");
}

#[tokio::test]
async fn test_http_malformed_body_is_parse_failure() {
    let url = serve_once("200 OK", "{\"code\": ").await;

    let err = load_catalog(&http_source(url)).await.unwrap_err();

    assert!(matches!(err, SentiersError::DatasetParse { .. }));
    assert!(err.is_load_failure());
}
