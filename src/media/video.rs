//! Video catalog entries and the provider URL schemes derived from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MediaError {
    #[error("video title is empty")]
    EmptyTitle,

    #[error("malformed video id: {0:?}")]
    MalformedId(String),

    #[error("video catalog is empty")]
    EmptyCatalog,

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Where a video is hosted. Decides how thumbnail and embed URLs are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    YouTube,
}

impl VideoProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProvider::YouTube => "youtube",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescriptor {
    pub title: String,
    pub provider: VideoProvider,
    pub external_id: String,
}

impl VideoDescriptor {
    pub fn youtube(title: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            provider: VideoProvider::YouTube,
            external_id: external_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.title.trim().is_empty() {
            return Err(MediaError::EmptyTitle);
        }
        validate_external_id(&self.external_id)
    }

    pub fn thumbnail_url(&self) -> Result<String, MediaError> {
        thumbnail_url(self)
    }

    pub fn embed_url(&self) -> Result<String, MediaError> {
        embed_url(self)
    }
}

// Ids are dropped into URL paths unescaped, so only the URL-safe alphabet passes.
fn validate_external_id(id: &str) -> Result<(), MediaError> {
    let url_safe = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    if id.is_empty() || !id.chars().all(url_safe) {
        return Err(MediaError::MalformedId(id.to_string()));
    }
    Ok(())
}

pub fn thumbnail_url(video: &VideoDescriptor) -> Result<String, MediaError> {
    validate_external_id(&video.external_id)?;
    match video.provider {
        VideoProvider::YouTube => Ok(format!(
            "https://img.youtube.com/vi/{}/hqdefault.jpg",
            video.external_id
        )),
    }
}

/// Playback URL with autoplay on, related videos off and minimal branding.
pub fn embed_url(video: &VideoDescriptor) -> Result<String, MediaError> {
    validate_external_id(&video.external_id)?;
    match video.provider {
        VideoProvider::YouTube => Ok(format!(
            "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
            video.external_id
        )),
    }
}

/// Parses a JSON catalog, keeping entry order. Every entry must validate.
pub fn parse_catalog(json: &str) -> Result<Vec<VideoDescriptor>, MediaError> {
    let videos: Vec<VideoDescriptor> =
        serde_json::from_str(json).map_err(|e| MediaError::InvalidCatalog(e.to_string()))?;
    if videos.is_empty() {
        return Err(MediaError::EmptyCatalog);
    }
    for video in &videos {
        video.validate()?;
    }
    Ok(videos)
}
