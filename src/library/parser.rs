//! Catalog text format parser
//!
//! One video per line: `title | id | #tag1 , #tag2`. The tag field may be
//! empty or left out entirely.

use crate::model::Video;

/// A malformed catalog line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogParseError {
    #[error("line {line}: expected `title | id | tags`, found {fields} field(s)")]
    MissingFields { line: usize, fields: usize },

    #[error("line {line}: video title is empty")]
    EmptyTitle { line: usize },

    #[error("line {line}: video id is empty")]
    EmptyId { line: usize },
}

/// Parse catalog text into videos, in file order
///
/// Blank lines are skipped. Duplicate ids are returned as-is; the
/// catalog decides which one wins.
pub fn parse_videos(text: &str) -> Result<Vec<Video>, CatalogParseError> {
    let mut videos = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        videos.push(parse_line(raw, index + 1)?);
    }

    Ok(videos)
}

fn parse_line(raw: &str, line: usize) -> Result<Video, CatalogParseError> {
    let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
    if fields.len() < 2 {
        return Err(CatalogParseError::MissingFields {
            line,
            fields: fields.len(),
        });
    }

    let title = fields[0];
    let id = fields[1];
    if title.is_empty() {
        return Err(CatalogParseError::EmptyTitle { line });
    }
    if id.is_empty() {
        return Err(CatalogParseError::EmptyId { line });
    }

    // Anything after the tag field is ignored
    let tags = fields
        .get(2)
        .map(|field| {
            field
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(title, id, tags))
}
