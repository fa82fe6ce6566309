//! `trackline-ai` — drafts customer notification text through an
//! OpenAI-compatible chat completions endpoint (Groq by default).
//!
//! One round trip per request, no retry policy: the caller decides whether
//! to retry. Whatever channel the caller asked for, the model is prompted
//! for (and must return) all three fields — email subject, email body,
//! timeline message — and the host boundary trims the unused ones before
//! sending.
//!
//! ```text
//! DraftRequest
//!     │
//!     ▼
//! prompt::notification_prompt   ← instructions + context + current drafts
//!     │
//!     ▼
//! DraftClient                   ← POST /chat/completions
//!     │
//!     ▼
//! extract::parse_draft          ← fence stripping, JSON salvage, validation
//!     │
//!     ▼
//! DraftResponse                 ← all three fields, always
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod types;

pub use client::DraftClient;
pub use error::AiDraftError;
pub use types::{DraftChannel, DraftRequest, DraftResponse};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, AiDraftError>;
