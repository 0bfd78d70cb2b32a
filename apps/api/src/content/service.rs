//! Content Service — prompt → generative API → parse → format.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::content::formatter::{format_result, ContentResult};
use crate::content::prompts::build_prompt;
use crate::content::sections::parse_sections;
use crate::llm_client::{GenerationError, TextGenerator};

/// One form submission. Presence of all three fields is checked by the caller;
/// omitted fields deserialize as empty so that check sees them.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default, alias = "video_length_minutes", alias = "videoLength")]
    pub video_length: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone)]
pub struct ContentService {
    generator: Arc<dyn TextGenerator>,
}

impl ContentService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Runs the whole pipeline for one request. Exactly one upstream call;
    /// failures are logged and returned, never retried.
    pub async fn generate_content(
        &self,
        request_id: Uuid,
        request: &GenerationRequest,
    ) -> Result<ContentResult, GenerationError> {
        let span = info_span!("generate_content", %request_id);
        async {
            let prompt = build_prompt(&request.topic, &request.video_length, &request.description);

            let raw = self.generator.generate(&prompt).await.map_err(|e| {
                error!("Error generating content: {e}");
                e
            })?;

            let sections = parse_sections(&raw);
            if sections.is_empty() {
                warn!("Generated text contained no recognizable section labels");
            } else {
                let missing = sections.missing();
                if !missing.is_empty() {
                    info!("Generated text is missing sections: {missing:?}");
                }
            }
            debug!("Parsed {} sections from {} chars", sections.len(), raw.len());

            Ok::<_, GenerationError>(format_result(&sections))
        }
        .instrument(span)
        .await
    }
}
