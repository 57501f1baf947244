//! phospho logging backend.
//!
//! Exchanges are uploaded from background tasks: [`PhosphoClient::log`]
//! returns immediately and a tracked task drains the answer replay, then
//! posts the finished event. [`TelemetryBackend::flush`] waits for every
//! upload still in flight.
//!
//! Endpoints (relative to the configured base URL):
//! - `POST /log/{project_id}`: `{"batched_log_events": [event]}`
//! - `POST /tasks/{task_id}/flag`: `{"flag", "notes", "source": "user"}`

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tokio_util::task::TaskTracker;
use tracing::{Instrument, debug, info_span, warn};

use northpole_core::telemetry::{LogEntry, TelemetryBackend};
use northpole_types::config::DEFAULT_TELEMETRY_BASE_URL;
use northpole_types::error::TelemetryError;
use northpole_types::telemetry::{FeedbackFlag, FeedbackRecord, LogEvent, SessionId, TaskId};

/// Connection settings for a phospho project.
pub struct PhosphoConfig {
    pub api_key: SecretString,
    pub project_id: String,
    pub base_url: String,
}

impl PhosphoConfig {
    pub fn new(api_key: SecretString, project_id: impl Into<String>) -> Self {
        Self {
            api_key,
            project_id: project_id.into(),
            base_url: DEFAULT_TELEMETRY_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct LogBatch<'a> {
    batched_log_events: &'a [LogEvent],
}

#[derive(Serialize)]
struct FlagBody<'a> {
    flag: FeedbackFlag,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    source: &'static str,
}

/// phospho API client.
///
/// Does NOT derive Debug: the config holds the API key.
pub struct PhosphoClient {
    http: reqwest::Client,
    config: Arc<PhosphoConfig>,
    uploads: TaskTracker,
}

impl PhosphoClient {
    pub fn new(config: PhosphoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            uploads: TaskTracker::new(),
        }
    }
}

fn log_url(base_url: &str, project_id: &str) -> String {
    format!("{}/log/{project_id}", base_url.trim_end_matches('/'))
}

fn flag_url(base_url: &str, task_id: &TaskId) -> String {
    format!("{}/tasks/{task_id}/flag", base_url.trim_end_matches('/'))
}

async fn check_status(response: reqwest::Response) -> Result<(), TelemetryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(TelemetryError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn post_json<T: Serialize>(
    http: &reqwest::Client,
    api_key: &SecretString,
    url: &str,
    body: &T,
) -> Result<(), TelemetryError> {
    let response = http
        .post(url)
        .bearer_auth(api_key.expose_secret())
        .json(body)
        .send()
        .await
        .map_err(|e| TelemetryError::Transport(e.to_string()))?;
    check_status(response).await
}

async fn upload(
    http: reqwest::Client,
    config: Arc<PhosphoConfig>,
    entry: LogEntry,
) -> Result<(), TelemetryError> {
    let event = entry.into_event(&config.project_id).await;
    let url = log_url(&config.base_url, &config.project_id);
    post_json(
        &http,
        &config.api_key,
        &url,
        &LogBatch {
            batched_log_events: std::slice::from_ref(&event),
        },
    )
    .await
}

impl TelemetryBackend for PhosphoClient {
    fn name(&self) -> &str {
        "phospho"
    }

    async fn new_session(&self) -> Result<SessionId, TelemetryError> {
        // phospho accepts client-minted session ids.
        Ok(SessionId::generate())
    }

    fn log(&self, entry: LogEntry) -> Result<(), TelemetryError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(TelemetryError::Unavailable(
                "no async runtime to upload from".to_string(),
            ));
        }

        let span = info_span!(
            "phospho.log",
            task_id = %entry.task_id,
            session_id = %entry.session_id,
        );
        let http = self.http.clone();
        let config = Arc::clone(&self.config);
        self.uploads.spawn(
            async move {
                match upload(http, config, entry).await {
                    Ok(()) => debug!("Exchange logged"),
                    Err(e) => warn!(error = %e, "Failed to log exchange"),
                }
            }
            .instrument(span),
        );
        Ok(())
    }

    async fn user_feedback(&self, record: &FeedbackRecord) -> Result<(), TelemetryError> {
        let url = flag_url(&self.config.base_url, &record.task_id);
        let body = FlagBody {
            flag: record.flag,
            notes: record.notes.as_deref(),
            source: "user",
        };
        post_json(&self.http, &self.config.api_key, &url, &body).await?;
        debug!(task_id = %record.task_id, flag = %record.flag, "Feedback delivered");
        Ok(())
    }

    async fn flush(&self) {
        self.uploads.close();
        self.uploads.wait().await;
        self.uploads.reopen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::{StreamExt, stream};
    use northpole_core::stream::tee::tee;
    use northpole_core::telemetry::BoxTelemetryBackend;
    use northpole_types::llm::{ChatChunk, LlmError};
    use northpole_types::telemetry::LogMetadata;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Raw HTTP request captured by [`serve_once`].
    struct Captured {
        head: String,
        body: serde_json::Value,
    }

    /// Accept one connection, capture the request, reply with `status`.
    async fn serve_once(status: u16) -> (String, tokio::task::JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let (head, body_start, content_length) = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let head = text[..end].to_string();
                    let length = head
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    break (head, end + 4, length);
                }
            };
            while buf.len() < body_start + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
            }
            let reply = format!("HTTP/1.1 {status} OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nno");
            socket.write_all(reply.as_bytes()).await.unwrap();
            Captured {
                head,
                body: serde_json::from_slice(&buf[body_start..body_start + content_length])
                    .unwrap(),
            }
        });
        (base_url, handle)
    }

    fn client(base_url: &str) -> PhosphoClient {
        PhosphoClient::new(
            PhosphoConfig::new(SecretString::from("ph-key".to_string()), "proj-1")
                .with_base_url(base_url),
        )
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        assert_eq!(
            log_url("https://api.phospho.ai/v2/", "proj-1"),
            "https://api.phospho.ai/v2/log/proj-1"
        );
        assert_eq!(
            flag_url(DEFAULT_TELEMETRY_BASE_URL, &TaskId("t-1".to_string())),
            "https://api.phospho.ai/v2/tasks/t-1/flag"
        );
    }

    #[test]
    fn test_flag_body_shape() {
        let body = FlagBody {
            flag: FeedbackFlag::Success,
            notes: Some("lovely"),
            source: "user",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"flag": "success", "notes": "lovely", "source": "user"})
        );
    }

    #[tokio::test]
    async fn test_log_uploads_drained_output() {
        let (base_url, server) = serve_once(200).await;
        let client = client(&base_url);

        let chunks: Vec<Result<ChatChunk, LlmError>> = vec![
            Ok(ChatChunk::default()),
            Ok(ChatChunk::text("Ho, ho,")),
            Ok(ChatChunk::text(" ho!")),
        ];
        let (answer, replay) = tee(stream::iter(chunks));
        client
            .log(LogEntry {
                task_id: TaskId("t-1".to_string()),
                session_id: SessionId::from("s1"),
                input: "Hello".to_string(),
                output: replay,
                metadata: LogMetadata {
                    intro: "Jingle bells!".to_string(),
                    model: "gpt-4o-mini".to_string(),
                    provider: "openai".to_string(),
                },
            })
            .unwrap();
        let _: Vec<_> = answer.collect().await;
        TelemetryBackend::flush(&client).await;

        let captured = server.await.unwrap();
        assert!(captured.head.starts_with("POST /log/proj-1 "));
        assert!(captured.head.to_lowercase().contains("authorization: bearer ph-key"));

        let event = &captured.body["batched_log_events"][0];
        assert_eq!(event["project_id"], "proj-1");
        assert_eq!(event["session_id"], "s1");
        assert_eq!(event["task_id"], "t-1");
        assert_eq!(event["input"], "Hello");
        assert_eq!(event["output"], "Ho, ho, ho!");
        assert_eq!(event["metadata"]["intro"], "Jingle bells!");
        assert!(event.get("error").is_none());
    }

    #[tokio::test]
    async fn test_feedback_posts_flag() {
        let (base_url, server) = serve_once(200).await;
        let backend = BoxTelemetryBackend::new(client(&base_url));

        backend
            .user_feedback(&FeedbackRecord {
                task_id: TaskId("t-9".to_string()),
                flag: FeedbackFlag::Failure,
                notes: None,
            })
            .await
            .unwrap();

        let captured = server.await.unwrap();
        assert!(captured.head.starts_with("POST /tasks/t-9/flag "));
        assert_eq!(
            captured.body,
            serde_json::json!({"flag": "failure", "source": "user"})
        );
    }

    #[tokio::test]
    async fn test_feedback_non_success_status_is_error() {
        let (base_url, _server) = serve_once(500).await;
        let backend = BoxTelemetryBackend::new(client(&base_url));

        let err = backend
            .user_feedback(&FeedbackRecord {
                task_id: TaskId("t-9".to_string()),
                flag: FeedbackFlag::Success,
                notes: Some("great".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TelemetryError::Status { status: 500, ref body } if body == "no"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_does_not_fail_log() {
        let client = client("http://127.0.0.1:9");
        let (answer, replay) = tee(stream::iter(vec![Ok::<_, LlmError>(ChatChunk::text("Ho!"))]));

        let result = client.log(LogEntry {
            task_id: TaskId::generate(),
            session_id: SessionId::generate(),
            input: "Hello".to_string(),
            output: replay,
            metadata: LogMetadata {
                intro: "Hi".to_string(),
                model: "gpt-4o-mini".to_string(),
                provider: "openai".to_string(),
            },
        });
        drop(answer);
        TelemetryBackend::flush(&client).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sessions_are_minted_locally() {
        let client = client("http://127.0.0.1:9");
        let a = TelemetryBackend::new_session(&client).await.unwrap();
        let b = TelemetryBackend::new_session(&client).await.unwrap();
        assert_ne!(a, b);
    }
}
