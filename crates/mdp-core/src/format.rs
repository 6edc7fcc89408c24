//! Format negotiation: ordered yt-dlp format fallback expressions.

/// Ordered list of yt-dlp format clauses, tried left to right; the first
/// clause that resolves wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    clauses: Vec<&'static str>,
}

impl FormatSpec {
    pub fn clauses(&self) -> &[&'static str] {
        &self.clauses
    }

    /// Renders the clause list as a single `-f` argument.
    pub fn render(&self) -> String {
        self.clauses.join("/")
    }
}

/// Chooses the video download format for the generic fetch path.
///
/// With ffmpeg present, the first choice is separate best-video/best-audio
/// streams (MP4 container, M4A audio) merged after download. Without it,
/// no post-download muxing is possible, so every clause must resolve to a
/// single file: best pre-merged MP4, then best of any container.
pub fn negotiate_video(have_ffmpeg: bool) -> FormatSpec {
    let clauses = if have_ffmpeg {
        vec!["bestvideo[ext=mp4]+bestaudio[ext=m4a]", "best[ext=mp4]", "best"]
    } else {
        vec!["best[ext=mp4]", "best"]
    };
    FormatSpec { clauses }
}

/// Audio-only format for the audio download path. Single-stream, so it
/// needs no muxing and is independent of the ffmpeg probe.
pub fn negotiate_audio() -> FormatSpec {
    FormatSpec {
        clauses: vec!["bestaudio[ext=m4a]", "bestaudio", "best"],
    }
}
