use random_gif::clients::{HttpFetch, ReqwestFetcher};
use random_gif::errors::GifError;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one canned HTTP/1.1 response on a local port and returns its base URL.
async fn serve_once(
    status_line: &'static str,
    content_type: &'static str,
    body: &'static [u8],
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Drain the request head before answering
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(body).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_get_json_parses_body() {
    let base = serve_once("200 OK", "application/json", br#"{"data":[{"embed_url":"https://x/e"}]}"#).await;

    let value = ReqwestFetcher::default()
        .get_json(&format!("{base}/search?api_key=secret&q=cat"))
        .await
        .unwrap();

    assert_eq!(value, json!({ "data": [{ "embed_url": "https://x/e" }] }));
}

#[tokio::test]
async fn test_get_bytes_returns_raw_body() {
    let base = serve_once("200 OK", "image/gif", b"GIF89a\x00\xff").await;

    let bytes = ReqwestFetcher::default()
        .get_bytes(&format!("{base}/cat.gif"))
        .await
        .unwrap();

    assert_eq!(bytes, b"GIF89a\x00\xff".to_vec());
}

#[tokio::test]
async fn test_non_success_status_maps_to_upstream_status() {
    let base = serve_once("403 Forbidden", "application/json", br#"{"message":"Invalid key"}"#).await;

    let err = ReqwestFetcher::default()
        .get_json(&format!("{base}/search?api_key=secret&q=cat"))
        .await
        .unwrap_err();

    match err {
        GifError::UpstreamStatus { status, url } => {
            assert_eq!(status, 403);
            assert_eq!(url, format!("{base}/search"));
            assert!(!url.contains("secret"), "stored URL must not carry the API key");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_asset_not_found_maps_to_upstream_status() {
    let base = serve_once("404 Not Found", "text/plain", b"gone").await;

    let err = ReqwestFetcher::default()
        .get_bytes(&format!("{base}/missing.gif"))
        .await
        .unwrap_err();

    assert!(matches!(err, GifError::UpstreamStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_html_body_maps_to_malformed_response() {
    let base = serve_once("200 OK", "text/html", b"<html>maintenance</html>").await;

    let err = ReqwestFetcher::default()
        .get_json(&format!("{base}/search?api_key=secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, GifError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network() {
    // Bind then drop, so the port is known to have no listener
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ReqwestFetcher::default()
        .get_json(&format!("http://{addr}/search?api_key=secret&q=cat"))
        .await
        .unwrap_err();

    match err {
        GifError::Network(msg) => {
            assert!(!msg.contains("secret"), "network error must not leak the API key");
            assert!(!msg.contains("127.0.0.1"), "network error must not carry the URL");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}
