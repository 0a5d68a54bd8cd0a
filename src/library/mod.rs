//! Catalog loading
//!
//! Reads the pipe-separated catalog format into a `VideoCatalog`, either
//! from a file or from the catalog bundled with the binary.

mod parser;

pub use parser::{parse_videos, CatalogParseError};

use crate::model::VideoCatalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Catalog shipped with the player, used when no file is given
pub const BUNDLED_CATALOG: &str = include_str!("../../data/videos.txt");

/// Load a catalog from a file on disk
pub fn parse_catalog(path: &Path) -> Result<VideoCatalog> {
    log::info!("Loading video catalog from {:?}", path);

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;

    parse_catalog_str(&text).with_context(|| format!("Invalid video catalog: {:?}", path))
}

/// Build a catalog from catalog text
///
/// When an id appears more than once the first entry is kept.
pub fn parse_catalog_str(text: &str) -> Result<VideoCatalog> {
    let videos = parse_videos(text)?;

    let mut catalog = VideoCatalog::new();
    for video in videos {
        let id = video.id().to_string();
        if !catalog.add_video(video) {
            log::warn!("Skipping duplicate video id {:?}", id);
        }
    }

    log::info!("Loaded catalog: {} videos", catalog.len());
    Ok(catalog)
}

/// The bundled default catalog
pub fn bundled_catalog() -> Result<VideoCatalog> {
    parse_catalog_str(BUNDLED_CATALOG).context("Bundled video catalog is invalid")
}
