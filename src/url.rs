use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::messages::Text;

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+")
        .expect("YouTube URL pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("URL must not be empty")]
    Empty,
    #[error("URL is invalid")]
    Invalid,
}

impl ValidationError {
    /// Message shown in the form for this rejection.
    pub fn text(self) -> Text {
        match self {
            ValidationError::Empty => Text::UrlEmpty,
            ValidationError::Invalid => Text::UrlInvalid,
        }
    }
}

/// A trimmed URL that points at `youtube.com` or `youtu.be`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChannelUrl(String);

impl ChannelUrl {
    /// Trim `input` and check it looks like a YouTube URL.
    ///
    /// Scheme and `www.` are optional, matching ignores case, and at least
    /// one character must follow the `/` after the host.
    ///
    /// # Errors
    /// [`ValidationError::Empty`] for empty or whitespace-only input,
    /// [`ValidationError::Invalid`] for anything else that doesn't match.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !YOUTUBE_URL.is_match(trimmed) {
            return Err(ValidationError::Invalid);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
