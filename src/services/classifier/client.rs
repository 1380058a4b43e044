use crate::models::classify_types::{ClassifyResponse, ImageFile};
use reqwest::multipart;

/// The three fixed display strings the image result panel can show besides a
/// prediction line.
pub const NETWORK_ERROR_RESULT: &str = "Error: Network error";
pub const SERVER_ERROR_RESULT: &str = "Error: Server error";
pub const CLASSIFY_FAILED_RESULT: &str = "Error: Failed to classify image";

/// Multipart field name the backend expects the image under.
const FILE_FIELD: &str = "file";

enum ClassifyError {
    /// The endpoint could not be reached at the transport level.
    Network(reqwest::Error),
    /// The endpoint answered with a non-success HTTP status.
    Server(reqwest::StatusCode),
    /// HTTP success, but the body signalled failure or had an unexpected shape.
    Classification,
}

/// Thin client for the remote `/classify` endpoint.
pub struct ClassifierClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(crate::services::backend::backend_url())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/classify", self.base_url)
    }

    /// Send one image and fold every failure mode into the display string the
    /// result panel shows. Errors are terminal; nothing is retried here.
    pub async fn classify_image(&self, file: ImageFile) -> String {
        match self.request(file).await {
            Ok(line) => line,
            Err(ClassifyError::Network(e)) => {
                log::warn!("classification request failed: {}", e);
                NETWORK_ERROR_RESULT.to_string()
            }
            Err(ClassifyError::Server(status)) => {
                log::warn!("classification backend returned HTTP {}", status);
                SERVER_ERROR_RESULT.to_string()
            }
            Err(ClassifyError::Classification) => {
                log::warn!("classification backend returned an unusable response");
                CLASSIFY_FAILED_RESULT.to_string()
            }
        }
    }

    async fn request(&self, file: ImageFile) -> Result<String, ClassifyError> {
        log::debug!(
            "classifying {} ({} bytes) via {}",
            file.name,
            file.bytes.len(),
            self.endpoint()
        );

        let form = multipart::Form::new().part(FILE_FIELD, file_part(file)?);

        let response = self
            .http
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(ClassifyError::Network)?;

        if !response.status().is_success() {
            return Err(ClassifyError::Server(response.status()));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|_| ClassifyError::Classification)?;

        prediction_line(&body).ok_or(ClassifyError::Classification)
    }
}

fn file_part(file: ImageFile) -> Result<multipart::Part, ClassifyError> {
    let media_type = usable_media_type(&file.media_type);
    multipart::Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(&media_type)
        .map_err(|_| ClassifyError::Classification)
}

fn usable_media_type(declared: &str) -> String {
    if declared.contains('/') && declared.is_ascii() && !declared.contains(char::is_whitespace) {
        declared.to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

/// Format the panel line for a body that signals success with a complete
/// result, `None` for everything else.
fn prediction_line(body: &ClassifyResponse) -> Option<String> {
    if body.status != "success" {
        return None;
    }
    let result = body.result.as_ref()?;
    Some(format!(
        "Prediction: {} ({})",
        result.prediction, result.confidence
    ))
}
