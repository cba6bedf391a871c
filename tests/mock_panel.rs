//! Integration tests for the HTTP fetcher against a local mock panel.
//!
//! Serves canned HTTP/1.1 responses from a raw `TcpListener` so the
//! fetcher's request line, headers, and body handling can be asserted
//! without a real panel.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use ptero_servers::constants::PER_PAGE;
use ptero_servers::fetch::{self, FetchError};

/// Spawn a one-shot mock panel. Returns the base URL and a handle that
/// resolves to the raw request text once a request has been served.
async fn spawn_panel(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        // A GET request ends with the blank line after its headers.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn fetches_body_with_auth_and_accept_headers() {
    let (url, handle) = spawn_panel("HTTP/1.1 200 OK", r#"{"data":[]}"#).await;

    let body = fetch::fetch_server_list(&url, "secret-token").await.unwrap();
    assert_eq!(body, br#"{"data":[]}"#);

    let request = handle.await.unwrap().to_lowercase();
    assert!(
        request.starts_with(&format!(
            "get /api/application/servers?per_page={PER_PAGE} http/1.1"
        )),
        "request line: {}",
        request.lines().next().unwrap_or(""),
    );
    assert!(request.contains("authorization: bearer secret-token"));
    assert!(request.contains("accept: application/json"));
    assert!(request.contains("content-type: application/json"));
    assert!(request.contains("user-agent: ptero-servers/"));
}

#[tokio::test]
async fn non_2xx_body_is_still_returned() {
    let (url, handle) = spawn_panel(
        "HTTP/1.1 403 Forbidden",
        r#"{"errors":[{"code":"AccessDeniedHttpException"}]}"#,
    )
    .await;

    let body = fetch::fetch_server_list(&url, "bad-token").await.unwrap();
    assert_eq!(body, br#"{"errors":[{"code":"AccessDeniedHttpException"}]}"#);
    handle.await.unwrap();
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind and immediately drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetch::fetch_server_list(&format!("http://{addr}"), "key")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }), "{err}");
}
