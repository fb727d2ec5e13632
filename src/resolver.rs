use eyre::{Result, eyre};
use log::{debug, info, warn};

use crate::error::Error;
use crate::output::flatten;
use crate::youtube::TranscriptApi;
use crate::{ResolvedTranscript, Segment};

/// Language used by the best-effort fetch when nothing else is configured
pub const DEFAULT_LANG: &str = "en";

/// Resolve a video ID to its flattened transcript.
///
/// A manually created track wins over generated ones regardless of language;
/// otherwise the first listed track is used. If listing or fetching the chosen
/// track fails, a single best-effort fetch in `fallback_lang` is attempted.
pub async fn resolve(api: &dyn TranscriptApi, video_id: &str, fallback_lang: &str) -> Result<ResolvedTranscript, Error> {
    match fetch_preferred(api, video_id).await {
        Ok((track_lang, is_generated, segments)) => {
            info!(
                "Resolved {video_id} from track lang={track_lang} generated={is_generated} ({} segments)",
                segments.len()
            );
            Ok(ResolvedTranscript {
                video_id: video_id.to_string(),
                language_code: Some(track_lang),
                is_generated: Some(is_generated),
                text: flatten(&segments),
            })
        }
        Err(e) => {
            warn!("Track listing failed for {video_id}: {e:#}; falling back to best-effort fetch");
            match api.fetch_default(video_id, fallback_lang).await {
                Ok(segments) => {
                    info!("Resolved {video_id} via best-effort fetch ({} segments)", segments.len());
                    Ok(ResolvedTranscript {
                        video_id: video_id.to_string(),
                        language_code: Some(fallback_lang.to_string()),
                        is_generated: None,
                        text: flatten(&segments),
                    })
                }
                Err(e_final) => Err(Error::NoTranscript {
                    video_id: video_id.to_string(),
                    message: format!("{e_final:#}"),
                }),
            }
        }
    }
}

async fn fetch_preferred(api: &dyn TranscriptApi, video_id: &str) -> Result<(String, bool, Vec<Segment>)> {
    let list = api.list_transcripts(video_id).await?;

    let track = list
        .find_manually_created()
        .or_else(|| list.iter().next())
        .ok_or_else(|| eyre!("no caption tracks listed for video {video_id}"))?;
    debug!(
        "Selected track lang={} generated={} for {video_id}",
        track.language_code, track.is_generated
    );

    let segments = api.fetch_track(track).await?;
    Ok((track.language_code.clone(), track.is_generated, segments))
}
