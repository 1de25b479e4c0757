//! French translation hook backed by the Lingva API.
//!
//! One GET per fragment; the decoded `translation` field is used only
//! when it is non-empty and actually differs from the input. Every
//! failure mode (transport, decode, useless response) degrades to the
//! static dictionary and then the raw text. Nothing here can surface as
//! a language-level error.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use snout_eval::render::static_french;
use snout_eval::RenderHook;
use tracing::warn;

const LINGVA_ENDPOINT: &str = "https://lingva.ml/api/v1/en/fr";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct Translation {
    translation: String,
}

#[derive(Debug)]
enum TranslateError {
    Transport(Box<ureq::Error>),
    Read(std::io::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Transport(error) => write!(f, "request failed: {error}"),
            TranslateError::Read(error) => write!(f, "reading response failed: {error}"),
            TranslateError::Decode(error) => write!(f, "malformed response: {error}"),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<ureq::Error> for TranslateError {
    fn from(error: ureq::Error) -> Self {
        TranslateError::Transport(Box::new(error))
    }
}

impl From<std::io::Error> for TranslateError {
    fn from(error: std::io::Error) -> Self {
        TranslateError::Read(error)
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(error: serde_json::Error) -> Self {
        TranslateError::Decode(error)
    }
}

/// Network-backed [`RenderHook`] translating rendered fragments into
/// French.
pub struct LingvaTranslator {
    agent: ureq::Agent,
    endpoint: String,
}

impl Default for LingvaTranslator {
    fn default() -> Self {
        LingvaTranslator::new()
    }
}

impl LingvaTranslator {
    pub fn new() -> Self {
        LingvaTranslator::with_endpoint(LINGVA_ENDPOINT)
    }

    /// Point the hook at a different endpoint. Tests use an unreachable
    /// one to exercise the fallback path.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        LingvaTranslator {
            agent: ureq::AgentBuilder::new().timeout(LOOKUP_TIMEOUT).build(),
            endpoint: endpoint.into(),
        }
    }

    fn lookup(&self, text: &str) -> Result<String, TranslateError> {
        let url = format!("{}/{}", self.endpoint, text);
        let body = self.agent.get(&url).call()?.into_string()?;
        let decoded: Translation = serde_json::from_str(&body)?;
        Ok(decoded.translation)
    }
}

/// Pick the final rendering from a lookup outcome. An empty or
/// unchanged translation counts as a miss.
fn resolve(outcome: Result<String, TranslateError>, text: &str) -> String {
    match outcome {
        Ok(translation)
            if !translation.is_empty() && !translation.eq_ignore_ascii_case(text) =>
        {
            translation
        }
        Ok(_) => fallback(text),
        Err(error) => {
            warn!(%error, text, "translation lookup failed, using the static dictionary");
            fallback(text)
        }
    }
}

fn fallback(text: &str) -> String {
    static_french(text).unwrap_or(text).to_owned()
}

impl RenderHook for LingvaTranslator {
    fn render(&self, text: &str) -> String {
        resolve(self.lookup(text), text)
    }

    fn error_prefix(&self) -> &str {
        "ERREUR : "
    }
}
