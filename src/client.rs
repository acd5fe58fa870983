/// HTTP client for the classification endpoint
///
/// One request per submission: a multipart POST with a single `file` part,
/// answered by JSON `{category, quality, filename}`. Any non-2xx status is a
/// failure; there is no retry.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;
use crate::state::data::{ClassificationResult, SelectedFile};

/// Multipart field the endpoint reads the resume from
const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ClassifierClient {
    /// Build a client; `timeout` of None means requests may wait forever
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClassifyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClassifyError> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one resume and decode the endpoint's verdict
    pub async fn classify(&self, file: &SelectedFile) -> Result<ClassificationResult, ClassifyError> {
        let content = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ClassifyError::Read {
                path: file.path.clone(),
                source,
            })?;

        tracing::info!(
            endpoint = %self.endpoint,
            filename = %file.filename,
            bytes = content.len(),
            "submitting resume"
        );

        let form = Form::new().part(
            FILE_FIELD,
            Part::bytes(content)
                .file_name(file.filename.clone())
                .mime_str(file.kind.mime())?,
        );

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        tracing::debug!(%status, "classification response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Status { status, body });
        }

        let body = response.text().await?;
        let result: ClassificationResult = serde_json::from_str(&body)?;

        tracing::info!(
            category = %result.category,
            quality = %result.quality,
            "resume classified"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::FileKind;
    use axum::extract::Multipart;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::io::Write;

    /// Serve `app` on an ephemeral port and return the /classify URL
    async fn spawn_endpoint(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/classify", addr)
    }

    fn resume_file(dir: &tempfile::TempDir, name: &str) -> SelectedFile {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"Jane Doe\nRust, Python, distributed systems").unwrap();
        SelectedFile::from_path(path).unwrap()
    }

    /// Echo back what arrived in the `file` part
    async fn echo_upload(mut multipart: Multipart) -> Json<serde_json::Value> {
        while let Some(field) = multipart.next_field().await.unwrap() {
            if field.name() == Some("file") {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.unwrap();
                assert!(!bytes.is_empty());

                return Json(serde_json::json!({
                    "category": "software_engineer",
                    "quality": "best",
                    "filename": filename,
                    "content_type": content_type,
                }));
            }
        }
        Json(serde_json::json!({}))
    }

    #[tokio::test]
    async fn test_sends_file_part_and_decodes_result() {
        let url = spawn_endpoint(Router::new().route("/classify", post(echo_upload))).await;
        let dir = tempfile::tempdir().unwrap();
        let file = resume_file(&dir, "resume.pdf");
        assert_eq!(file.kind, FileKind::Pdf);

        let client = ClassifierClient::new(url, None).unwrap();
        let result = client.classify(&file).await.unwrap();

        assert_eq!(
            result,
            ClassificationResult {
                category: "software_engineer".to_string(),
                quality: "best".to_string(),
                filename: "resume.pdf".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let app = Router::new().route(
            "/classify",
            post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "model exploded") }),
        );
        let url = spawn_endpoint(app).await;
        let dir = tempfile::tempdir().unwrap();

        let client = ClassifierClient::new(url, None).unwrap();
        let err = client.classify(&resume_file(&dir, "cv.txt")).await.unwrap_err();

        match err {
            ClassifyError::Status { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "model exploded");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_failure() {
        let app = Router::new().route("/classify", post(|| async { "<html>oops</html>" }));
        let url = spawn_endpoint(app).await;
        let dir = tempfile::tempdir().unwrap();

        let client = ClassifierClient::new(url, None).unwrap();
        let err = client.classify(&resume_file(&dir, "cv.docx")).await.unwrap_err();

        assert!(matches!(err, ClassifyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_parse_failure() {
        let app = Router::new().route(
            "/classify",
            post(|| async { Json(serde_json::json!({ "category": "data_scientist" })) }),
        );
        let url = spawn_endpoint(app).await;
        let dir = tempfile::tempdir().unwrap();

        let client = ClassifierClient::new(url, None).unwrap();
        let err = client.classify(&resume_file(&dir, "cv.pdf")).await.unwrap_err();

        assert!(matches!(err, ClassifyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_read_failure() {
        let client = ClassifierClient::new("http://127.0.0.1:9/classify", None).unwrap();
        let file = SelectedFile::from_path(PathBuf::from("/nonexistent/dir/resume.pdf")).unwrap();

        let err = client.classify(&file).await.unwrap_err();
        assert!(matches!(err, ClassifyError::Read { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dir = tempfile::tempdir().unwrap();
        let client = ClassifierClient::new(format!("http://{}/classify", addr), None).unwrap();
        let err = client.classify(&resume_file(&dir, "cv.pdf")).await.unwrap_err();

        assert!(matches!(err, ClassifyError::Transport(_)));
    }
}
