// src/domain/version/frames.rs
//
// Frame-list formatting. Collapses runs of consecutive integers into
// `first-last` ranges and expands them back; steps are not detected.

/// Format a frame list as a compact human summary.
///
/// ex: `[1, 2, 3, 4, 5, 7, 9, 10]` -> `"1-5 7 9-10"`
pub fn format_frames(frames: &[i64], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut run: Option<(i64, i64)> = None;

    for &frame in frames {
        run = match run {
            Some((start, end)) if end + 1 == frame => Some((start, frame)),
            Some((start, end)) => {
                parts.push(format_run(start, end));
                Some((frame, frame))
            }
            None => Some((frame, frame)),
        };
    }
    if let Some((start, end)) = run {
        parts.push(format_run(start, end));
    }

    parts.join(sep)
}

fn format_run(start: i64, end: i64) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

/// Expand a summary produced by `format_frames` back into the integer
/// list. Tokens that are neither an integer nor a `first-last` range are
/// ignored.
pub fn expand_frames(text: &str) -> Vec<i64> {
    let mut frames = Vec::new();
    for token in text.split_whitespace() {
        if let Ok(frame) = token.parse::<i64>() {
            frames.push(frame);
        } else if let Some((first, last)) = token.split_once('-') {
            if let (Ok(first), Ok(last)) = (first.parse::<i64>(), last.parse::<i64>()) {
                frames.extend(first..=last);
            }
        }
    }
    frames
}
