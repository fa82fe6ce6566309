use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiDraftError {
    /// No credential was supplied; the service is unavailable.
    #[error("AI service unavailable: API key not provided")]
    MissingApiKey,

    /// The model's response could not be shaped into the three draft
    /// fields, even after fence stripping and JSON salvage.
    #[error("AI returned an unusable response: {reason}")]
    UpstreamFormat { reason: String, raw: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AiDraftError {
    /// The user-facing category: "unavailable" vs "bad response". Full
    /// diagnostic detail stays in developer logs.
    pub fn user_notice(&self) -> &'static str {
        match self {
            AiDraftError::MissingApiKey => "AI drafting is unavailable",
            AiDraftError::UpstreamFormat { .. } | AiDraftError::Http(_) => {
                "Failed to generate AI content. Please try again."
            }
        }
    }
}
