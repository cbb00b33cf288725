use std::path::PathBuf;

/// One playable file from the library.
///
/// Tracks are compared by their position in the library (`TrackId`), never
/// by metadata: two files tagged identically are still different answers.
#[derive(Clone, Debug)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    /// Whole seconds, as reported by the tag reader or the scan fallback.
    pub duration_secs: u64,
    pub display: String,
}

/// Index of a track inside the session's library.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(pub usize);

/// Whatever the tag reader managed to get out of a file. Any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration_secs: Option<u64>,
}
