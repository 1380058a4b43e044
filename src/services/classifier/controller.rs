use crate::error::AppError;
use crate::models::classify_types::{ClassifyOutcome, SubmissionInput};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::client::ClassifierClient;

/// The text panel always shows these lines; the text path has no backend
/// endpoint yet and keeping the simulated result is deliberate.
pub const TEXT_PLACEHOLDER_RESULTS: [&str; 3] = [
    "Sentiment: Positive (92.1%)",
    "Language: English (99.8%)",
    "Category: Technology (85.4%)",
];

/// Coordinates one classification attempt at a time for one app instance.
///
/// Submissions move `Idle -> Submitting -> Idle` with the results of the last
/// attempt retained until the next one clears them. There is no cancellation;
/// an in-flight request runs to success or to a caught error.
#[derive(Clone)]
pub struct ClassificationController {
    client: Arc<ClassifierClient>,
    in_flight: Arc<AtomicBool>,
    image_results: Arc<Mutex<Vec<String>>>,
    text_results: Arc<Mutex<Vec<String>>>,
}

impl ClassificationController {
    pub fn new(client: ClassifierClient) -> Self {
        Self {
            client: Arc::new(client),
            in_flight: Arc::new(AtomicBool::new(false)),
            image_results: Arc::new(Mutex::new(Vec::new())),
            text_results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClassifierClient::from_env())
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn outcome(&self) -> ClassifyOutcome {
        ClassifyOutcome {
            image_results: self.image_results.lock().await.clone(),
            text_results: self.text_results.lock().await.clone(),
        }
    }

    /// Run one submission: at most one outbound request (image branch) plus
    /// the simulated text branch. The branches are independent; an image
    /// error never suppresses the text result.
    pub async fn submit(&self, input: SubmissionInput) -> Result<ClassifyOutcome, AppError> {
        if input.is_empty() {
            return Err("Nothing to classify: select an image or enter some text".into());
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err("A classification is already in progress".into());
        }

        self.image_results.lock().await.clear();
        self.text_results.lock().await.clear();

        let has_text = input.has_text();

        if let Some(file) = input.file {
            let line = self.client.classify_image(file).await;
            *self.image_results.lock().await = vec![line];
        }

        if has_text {
            *self.text_results.lock().await = TEXT_PLACEHOLDER_RESULTS
                .iter()
                .map(|s| s.to_string())
                .collect();
        }

        self.in_flight.store(false, Ordering::SeqCst);
        Ok(self.outcome().await)
    }
}
