//! Physical line splitting.

use crate::config::ScanConfig;

/// Byte-order mark stripped from the start of input.
pub const BOM: char = '\u{FEFF}';

/// A physical line, without its terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-indexed line number.
    pub number: usize,
    /// Line content.
    pub text: &'a str,
}

impl Line<'_> {
    /// Returns true if the line holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits text into lines with the default configuration.
#[must_use]
pub fn scan_lines(text: &str) -> Vec<Line<'_>> {
    scan_lines_with(text, &ScanConfig::default())
}

/// Splits text into lines.
///
/// `\r`, `\n`, and `\r\n` each end exactly one line. A final line without a
/// terminator still counts; empty input has no lines.
#[must_use]
pub fn scan_lines_with<'a>(text: &'a str, config: &ScanConfig) -> Vec<Line<'a>> {
    let text = if config.strip_bom {
        text.strip_prefix(BOM).unwrap_or(text)
    } else {
        text
    };

    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        let terminator = match bytes[pos] {
            b'\r' if bytes.get(pos + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => {
                pos += 1;
                continue;
            }
        };
        lines.push(Line {
            number: lines.len() + 1,
            text: &text[start..pos],
        });
        pos += terminator;
        start = pos;
    }
    if start < bytes.len() {
        lines.push(Line {
            number: lines.len() + 1,
            text: &text[start..],
        });
    }
    lines
}
