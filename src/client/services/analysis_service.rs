use anyhow::{anyhow, Context};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub answer: Option<String>,
}

/// Thin client for the analysis backend. Holds the reqwest client and the
/// configured base URL for the lifetime of the app.
pub struct AnalysisService {
    client: Client,
    base_url: Option<String>,
}

impl AnalysisService {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Sends the question to `POST {base_url}/analyze` and returns the
    /// `answer` field of the JSON reply (`None` when the field is absent).
    /// Every failure mode (unset base URL, connect error, non-2xx status,
    /// malformed body) comes back as one error; the caller decides how much
    /// of it to surface.
    pub async fn analyze(&self, question: &str) -> anyhow::Result<Option<String>> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| anyhow!("API_BASE_URL is not set"))?;

        let response = self
            .client
            .post(format!("{}/analyze", base_url))
            .json(&AnalyzeRequest { question })
            .send()
            .await
            .with_context(|| format!("request to {}/analyze failed", base_url))?
            .error_for_status()
            .context("backend returned an error status")?;

        let body: AnalyzeResponse = response
            .json()
            .await
            .context("backend reply was not valid JSON")?;
        Ok(body.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP/1.1 response on an ephemeral port and
    /// returns the base URL to point the service at.
    async fn one_shot_server(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            // drain the request before replying
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn answer_field_is_optional_in_reply() {
        let with: AnalyzeResponse =
            serde_json::from_str(r#"{"answer": "Press high on the flanks."}"#).unwrap();
        assert_eq!(with.answer.as_deref(), Some("Press high on the flanks."));

        let without: AnalyzeResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(without.answer.is_none());
    }

    #[tokio::test]
    async fn returns_answer_field_on_success() {
        let base = one_shot_server(
            "HTTP/1.1 200 OK",
            json!({"answer": "Press high on the flanks."}).to_string(),
        )
        .await;
        let service = AnalysisService::new(Some(base));
        let answer = service.analyze("How do we beat their press?").await.unwrap();
        assert_eq!(answer.as_deref(), Some("Press high on the flanks."));
    }

    #[tokio::test]
    async fn missing_answer_field_is_none() {
        let base = one_shot_server("HTTP/1.1 200 OK", json!({"status": "ok"}).to_string()).await;
        let service = AnalysisService::new(Some(base));
        let answer = service.analyze("anything").await.unwrap();
        assert!(answer.is_none());
    }

    #[tokio::test]
    async fn non_2xx_status_is_an_error() {
        let base = one_shot_server(
            "HTTP/1.1 500 Internal Server Error",
            json!({"detail": "Internal server error"}).to_string(),
        )
        .await;
        let service = AnalysisService::new(Some(base));
        assert!(service.analyze("anything").await.is_err());
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let base = one_shot_server("HTTP/1.1 200 OK", "not json at all".to_string()).await;
        let service = AnalysisService::new(Some(base));
        assert!(service.analyze("anything").await.is_err());
    }

    #[tokio::test]
    async fn unconfigured_base_url_is_an_error() {
        let service = AnalysisService::new(None);
        assert!(service.analyze("anything").await.is_err());
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error() {
        // nothing listens on the reserved port 9 (discard) of localhost
        let service = AnalysisService::new(Some("http://127.0.0.1:9".to_string()));
        assert!(service.analyze("anything").await.is_err());
    }
}
