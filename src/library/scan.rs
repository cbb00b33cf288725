use std::path::Path;

use lofty::prelude::*;
use lofty::probe::Probe;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::quiz::FRAGMENT_SECONDS;

use super::display::display_label;
use super::model::{Track, TrackMetadata};

/// Artist used when a file carries no usable artist tag.
pub const UNKNOWN_ARTIST: &str = "Unknown";

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Read title, artist and duration from `path`.
///
/// Never fails: anything the tag reader cannot provide is left as `None`.
pub fn extract_metadata(path: &Path) -> TrackMetadata {
    let tagged = match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => tagged,
        Err(e) => {
            log::debug!("no readable tags in {}: {e}", path.display());
            return TrackMetadata::default();
        }
    };

    let mut meta = TrackMetadata {
        duration_secs: Some(tagged.properties().duration().as_secs()),
        ..TrackMetadata::default()
    };

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        meta.title = tag.title().as_deref().and_then(non_empty);
        meta.artist = tag.artist().as_deref().and_then(non_empty);
    }

    meta
}

/// Build a `Track` from whatever metadata was found, filling the gaps.
///
/// A zero duration counts as missing, so a fragment always has something to
/// start from.
pub(super) fn track_from_metadata(path: &Path, meta: TrackMetadata) -> Track {
    let title = meta.title.unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    });
    let artist = meta.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
    let duration_secs = meta
        .duration_secs
        .filter(|&d| d > 0)
        .unwrap_or(FRAGMENT_SECONDS + 1);

    let display = display_label(&artist, &title);

    Track {
        path: path.to_path_buf(),
        title,
        artist,
        duration_secs,
        display,
    }
}

/// Walk `dir` and collect every audio file as a `Track`.
///
/// Unreadable entries and files without tags are never fatal; they are
/// skipped or filled with fallbacks respectively.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry: {e}");
                None
            }
        })
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            let meta = extract_metadata(path);
            tracks.push(track_from_metadata(path, meta));
        }
    }

    tracks.sort_by(|a, b| a.display.to_lowercase().cmp(&b.display.to_lowercase()));
    log::info!("found {} tracks under {}", tracks.len(), dir.display());
    tracks
}
