use serde::{Deserialize, Serialize};
use std::fmt;

/// A file handed over from the webview: the metadata the picker reports plus
/// the raw bytes encoded as base64.
#[derive(Debug, Deserialize, Clone)]
pub struct FileInput {
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub data: String,
}

/// One decoded submission file.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// One classification attempt: an image, a piece of text, or both.
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
    pub file: Option<ImageFile>,
    pub text: Option<String>,
}

impl SubmissionInput {
    /// The submit control only enables when there is something to send.
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && !self.has_text()
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Display lines for the two result panels.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ClassifyOutcome {
    pub image_results: Vec<String>,
    pub text_results: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ClassifyStatus {
    pub in_flight: bool,
}

/// Response body of `POST /classify`. Anything that does not deserialize into
/// this shape counts as a failed classification.
#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PredictionResult>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence: Confidence,
}

/// The backend reports confidence either as a pre-formatted string
/// ("97.2%") or as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(n) => write!(f, "{}", n),
            Confidence::Text(s) => write!(f, "{}", s),
        }
    }
}
