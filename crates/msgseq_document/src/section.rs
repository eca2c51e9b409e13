//! Grouping lines into labelled sections.

use msgseq_foundation::name;
use msgseq_foundation::{Error, ErrorContext, Result};

use crate::config::ScanConfig;
use crate::line::{self, Line};

/// A `[Name]` header and the lines up to the next header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    /// Section name, without brackets.
    pub name: &'a str,
    /// Line number of the header.
    pub header_line: usize,
    /// Body lines, verbatim, including blanks and comments.
    pub lines: Vec<Line<'a>>,
}

impl<'a> Section<'a> {
    /// Body lines that are neither blank nor comments.
    pub fn content_lines<'s>(
        &'s self,
        config: &'s ScanConfig,
    ) -> impl Iterator<Item = &'s Line<'a>> {
        self.lines
            .iter()
            .filter(move |line| !line.is_blank() && !config.is_comment(line.text))
    }
}

fn structure_error(line: &Line<'_>, message: impl Into<String>, config: &ScanConfig) -> Error {
    let mut context = ErrorContext::new().with_position(line.number, 1);
    if let Some(source) = &config.source_name {
        context = context.with_source(source.clone());
    }
    Error::structure(line.number, message).with_context(context)
}

/// Returns the header name if the line is a section header.
fn header<'a>(line: &Line<'a>, config: &ScanConfig) -> Result<Option<&'a str>> {
    let trimmed = line.text.trim();
    let Some(rest) = trimmed.strip_prefix('[') else {
        return Ok(None);
    };
    let Some(inner) = rest.strip_suffix(']') else {
        return Err(structure_error(line, "unterminated section header", config));
    };
    let inner = inner.trim();
    name::validate_identifier(inner).map_err(|err| {
        structure_error(line, format!("invalid section name: {}", err.kind), config)
    })?;
    Ok(Some(inner))
}

/// Groups lines into sections.
///
/// Lines before the first header may only be blank or comments.
///
/// # Errors
///
/// Returns a structure error for preamble content, an unterminated header,
/// or a header whose name fails the identifier grammar.
pub fn group_sections<'a>(lines: &[Line<'a>], config: &ScanConfig) -> Result<Vec<Section<'a>>> {
    let mut sections: Vec<Section<'a>> = Vec::new();
    for line in lines {
        if let Some(name) = header(line, config)? {
            tracing::debug!(name, line = line.number, "opening section");
            sections.push(Section {
                name,
                header_line: line.number,
                lines: Vec::new(),
            });
        } else if let Some(section) = sections.last_mut() {
            section.lines.push(*line);
        } else if !line.is_blank() && !config.is_comment(line.text) {
            tracing::debug!(line = line.number, text = line.text, "rejecting preamble line");
            return Err(structure_error(
                line,
                "content before the first section header",
                config,
            ));
        }
    }
    Ok(sections)
}

/// A scanned document: its sections in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> Document<'a> {
    /// Scans text with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns a structure error if the text is not a valid section layout.
    pub fn scan(text: &'a str) -> Result<Self> {
        Self::scan_with(text, &ScanConfig::default())
    }

    /// Scans text.
    ///
    /// # Errors
    ///
    /// Returns a structure error if the text is not a valid section layout.
    pub fn scan_with(text: &'a str, config: &ScanConfig) -> Result<Self> {
        let lines = line::scan_lines_with(text, config);
        Ok(Self {
            sections: group_sections(&lines, config)?,
        })
    }

    /// Returns the sections in order.
    #[must_use]
    pub fn sections(&self) -> &[Section<'a>] {
        &self.sections
    }

    /// Returns the first section with this name, case-insensitively.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section<'a>> {
        self.sections
            .iter()
            .find(|section| name::names_match(section.name, name))
    }

    /// Iterates every section with this name, case-insensitively.
    pub fn sections_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Section<'a>> {
        self.sections
            .iter()
            .filter(move |section| name::names_match(section.name, name))
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
