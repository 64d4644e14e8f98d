// File: crates/xyplot-core/src/text.rs
// Summary: Styled title text (runs with size/weight/slant/color) and its lenient byte codec.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::Argb;

/// Point sizes used for markdown headings (`#`, `##`, `###`).
pub const HEADING_SIZES: [f32; 3] = [28.0, 22.0, 17.0];
/// Size used for body text when a run has none.
pub const BODY_SIZE: f32 = 14.0;

const UNDECODABLE: &str = "Could not decode";

/// A span of text sharing one style.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Argb>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

/// Rich text for plot and axis titles.
///
/// Editing and platform document formats live outside the core; the core only
/// stores runs, renders nothing, and round-trips them through JSON.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyledText {
    pub runs: Vec<TextRun>,
}

impl StyledText {
    pub fn new() -> Self { Self::default() }

    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self { runs: vec![TextRun::plain(text)] }
    }

    /// Concatenated text of all runs.
    pub fn as_plain(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool { self.runs.iter().all(|r| r.text.is_empty()) }

    /// Apply one size to every run (used for the "could not decode" notice and new titles).
    pub fn with_size(mut self, size: f32) -> Self {
        for r in &mut self.runs {
            r.size = Some(size);
        }
        self
    }

    /// Parse a single line of lightweight markdown.
    ///
    /// Leading `#`/`##`/`###` set the run size; `**bold**` and `*italic*` toggle
    /// weight and slant. Unmatched markers are kept literally.
    pub fn from_markdown(src: &str) -> Self {
        let trimmed = src.trim();
        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        let (size, body) = if (1..=3).contains(&hashes) && trimmed[hashes..].starts_with(' ') {
            (Some(HEADING_SIZES[hashes - 1]), trimmed[hashes..].trim_start())
        } else {
            (None, trimmed)
        };

        let mut runs: Vec<TextRun> = Vec::new();
        let mut bold = false;
        let mut italic = false;
        let mut current = String::new();
        let mut rest = body;

        let flush = |runs: &mut Vec<TextRun>, current: &mut String, bold: bool, italic: bool| {
            if !current.is_empty() {
                runs.push(TextRun { text: std::mem::take(current), size, bold, italic, color: None });
            }
        };

        while let Some(c) = rest.chars().next() {
            if rest.starts_with("**") && (bold || rest[2..].contains("**")) {
                flush(&mut runs, &mut current, bold, italic);
                bold = !bold;
                rest = &rest[2..];
            } else if c == '*' && (italic || rest[1..].contains('*')) {
                flush(&mut runs, &mut current, bold, italic);
                italic = !italic;
                rest = &rest[1..];
            } else {
                current.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
        flush(&mut runs, &mut current, bold, italic);
        Self { runs }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // Serializing plain structs of strings and numbers cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Lenient decode: no data gives empty text, undecodable data gives a visible notice.
    pub fn from_bytes(data: Option<&[u8]>) -> Self {
        let Some(data) = data else { return Self::default() };
        match serde_json::from_slice::<StyledText>(data) {
            Ok(text) => text,
            Err(e) => {
                warn!("styled text decode failed ({} bytes): {e}", data.len());
                Self::plain(UNDECODABLE).with_size(HEADING_SIZES[0])
            }
        }
    }
}

impl<'de> Deserialize<'de> for StyledText {
    /// Well-formed JSON that is not a run list decodes to the "could not decode"
    /// notice, so one bad title does not fail the enclosing plot.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match serde_json::from_value::<Vec<TextRun>>(value) {
            Ok(runs) => Ok(Self { runs }),
            Err(e) => {
                warn!("styled text has unexpected shape: {e}; substituting notice");
                Ok(Self::plain(UNDECODABLE).with_size(HEADING_SIZES[0]))
            }
        }
    }
}

impl From<&str> for StyledText {
    fn from(s: &str) -> Self { Self::plain(s) }
}
