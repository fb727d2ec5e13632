pub mod config;
pub mod error;
pub mod output;
pub mod resolver;
pub mod server;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;

pub use error::Error;

/// Length of a YouTube video ID
pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|be/|embed/|shorts/)([^&\n?#]+)").expect("valid video id regex"));

/// A single captioned segment
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// One caption track available for a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
    pub base_url: String,
}

/// Caption tracks available for a video, in the order YouTube listed them
#[derive(Debug, Clone, Default)]
pub struct TranscriptList {
    pub tracks: Vec<CaptionTrack>,
}

impl TranscriptList {
    pub fn new(tracks: Vec<CaptionTrack>) -> Self {
        Self { tracks }
    }

    /// First manually created track, in any language
    pub fn find_manually_created(&self) -> Option<&CaptionTrack> {
        self.tracks.iter().find(|t| !t.is_generated)
    }

    /// Manually created tracks first, then generated ones
    pub fn iter(&self) -> impl Iterator<Item = &CaptionTrack> {
        self.tracks
            .iter()
            .filter(|t| !t.is_generated)
            .chain(self.tracks.iter().filter(|t| t.is_generated))
    }
}

/// Flattened transcript for one video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTranscript {
    pub video_id: String,
    pub language_code: Option<String>,
    pub is_generated: Option<bool>,
    pub text: String,
}

fn is_video_id(candidate: &str) -> bool {
    candidate.chars().count() == VIDEO_ID_LEN && !candidate.contains('/')
}

/// Extract video ID from a YouTube URL or a bare ID
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // First marker followed by a well-formed ID wins
    if let Some(token) = VIDEO_ID_RE
        .captures_iter(input)
        .map(|caps| caps[1].to_string())
        .find(|token| is_video_id(token))
    {
        return Some(token);
    }

    if is_video_id(input) {
        return Some(input.to_string());
    }

    None
}
