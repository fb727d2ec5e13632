use crate::Segment;

/// Render segments as one line of plain text, space separated, in caption order
pub fn flatten(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
