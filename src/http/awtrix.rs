//! Low-level Awtrix client: `AwtrixHttp`.
//!
//! The device acknowledges every accepted update with a bare `OK` body.

use super::{build_client, status_error};
use crate::domain::display::wire::AwtrixApp;
use crate::error::HttpError;

use reqwest::Client;
use serde::Serialize;

const ACK: &str = "OK";

/// Low-level HTTP client for one Awtrix device.
pub struct AwtrixHttp {
    base_url: String,
    client: Client,
}

impl AwtrixHttp {
    /// `host` is an address like `192.168.1.50`, or a full `http://` base URL.
    pub fn new(host: &str) -> Result<Self, HttpError> {
        let host = host.trim().trim_end_matches('/');
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        reqwest::Url::parse(&base_url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            base_url,
            client: build_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn custom_app_url(&self, name: &str) -> String {
        format!(
            "{}/api/custom?name={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    pub fn notify_url(&self) -> String {
        format!("{}/api/notify", self.base_url)
    }

    /// Create or replace the custom app `name`.
    pub async fn post_custom_app(&self, name: &str, app: &AwtrixApp) -> Result<(), HttpError> {
        let url = self.custom_app_url(name);
        self.post_acknowledged(&url, app).await
    }

    pub async fn post_notification(&self, app: &AwtrixApp) -> Result<(), HttpError> {
        let url = self.notify_url();
        self.post_acknowledged(&url, app).await
    }

    async fn post_acknowledged<B: Serialize>(&self, url: &str, body: &B) -> Result<(), HttpError> {
        tracing::debug!("POST {}", url);
        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), text));
        }
        check_ack(&text)
    }
}

fn check_ack(body: &str) -> Result<(), HttpError> {
    if body == ACK {
        Ok(())
    } else {
        Err(HttpError::Rejected(body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::display::wire::WireDrawCommand;
    use crate::shared::Color;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single request with `status` / `body` and hands back the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length || n == 0 {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&raw).to_string()
        });
        (format!("http://{}", addr), handle)
    }

    fn sample_app() -> AwtrixApp {
        AwtrixApp {
            draw: vec![WireDrawCommand::FilledRect(12, 3, 1, 8, Color::WHITE)],
            ..AwtrixApp::default()
        }
    }

    #[test]
    fn test_host_gets_http_scheme() {
        let http = AwtrixHttp::new("192.168.1.50").unwrap();
        assert_eq!(http.base_url(), "http://192.168.1.50");
        assert_eq!(http.notify_url(), "http://192.168.1.50/api/notify");
    }

    #[test]
    fn test_full_base_url_is_kept() {
        let http = AwtrixHttp::new("http://awtrix.local:8080/").unwrap();
        assert_eq!(http.base_url(), "http://awtrix.local:8080");
    }

    #[test]
    fn test_custom_app_name_is_encoded() {
        let http = AwtrixHttp::new("10.0.0.2").unwrap();
        assert_eq!(
            http.custom_app_url("tibberPrices"),
            "http://10.0.0.2/api/custom?name=tibberPrices"
        );
        assert_eq!(
            http.custom_app_url("my prices&more"),
            "http://10.0.0.2/api/custom?name=my%20prices%26more"
        );
    }

    #[test]
    fn test_ack() {
        assert!(check_ack("OK").is_ok());
        assert!(matches!(
            check_ack("ErrorParsingJson"),
            Err(HttpError::Rejected(b)) if b == "ErrorParsingJson"
        ));
        assert!(matches!(check_ack(""), Err(HttpError::Rejected(_))));
    }

    #[test]
    fn test_ack_must_match_exactly() {
        assert!(matches!(check_ack("OK\n"), Err(HttpError::Rejected(b)) if b == "OK\n"));
        assert!(matches!(check_ack(" OK"), Err(HttpError::Rejected(_))));
        assert!(matches!(check_ack("ok"), Err(HttpError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_post_custom_app_sends_json_and_accepts_ok() {
        let (url, server) = serve_once("200 OK", "OK").await;
        let http = AwtrixHttp::new(&url).unwrap();

        http.post_custom_app("tibberPrices", &sample_app())
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/custom?name=tibberPrices HTTP/1.1"));
        assert!(request.contains(r##"{"draw":[{"df":[12,3,1,8,"#FFFFFF"]}]}"##));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_rejected() {
        let (url, server) = serve_once("200 OK", "Unknown app").await;
        let http = AwtrixHttp::new(&url).unwrap();

        let err = http.post_notification(&sample_app()).await.unwrap_err();
        assert!(matches!(err, HttpError::Rejected(b) if b == "Unknown app"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/notify HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_server_error_status_is_mapped() {
        let (url, _server) = serve_once("500 Internal Server Error", "boom").await;
        let http = AwtrixHttp::new(&url).unwrap();

        let err = http
            .post_custom_app("tibberPrices", &sample_app())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::ServerError { status: 500, .. }));
    }
}
