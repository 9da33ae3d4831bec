//! Library search for vidplayer
//!
//! Searches are two-phase. A search produces an owned `SearchResults` with
//! stable 1-based indices; a later selection token picks one of them. The
//! console sequences the read between the two phases.

use crate::catalog::{Video, VideoCatalog, VideoId};
use crate::utils::contains_ignore_case;
use log::debug;

/// Marker every tag query must start with
pub const TAG_MARKER: char = '#';

/// What the query was matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Title,
    Tag,
}

/// Matches of a search, sorted by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    kind: SearchKind,
    query: String,
    matches: Vec<Video>,
}

impl SearchResults {
    fn new(kind: SearchKind, query: &str, mut matches: Vec<Video>) -> Self {
        matches.sort_by(|a, b| a.title().cmp(b.title()));
        debug!("{:?} search for '{}' matched {} videos", kind, query, matches.len());

        Self {
            kind,
            query: query.to_string(),
            matches,
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// The query as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matched videos; position `i` is displayed as `i + 1`
    pub fn matches(&self) -> &[Video] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Resolve a follow-up answer to a video id
    ///
    /// Only a positive integer within range selects; anything else (blank,
    /// non-numeric, zero, out of range) yields `None`.
    pub fn selection(&self, token: &str) -> Option<&VideoId> {
        let index: usize = token.trim().parse().ok()?;
        let position = index.checked_sub(1)?;
        self.matches.get(position).map(Video::id)
    }
}

/// Case-insensitive substring search on titles
pub fn search_by_title(catalog: &VideoCatalog, term: &str) -> SearchResults {
    let matches = catalog
        .videos()
        .iter()
        .filter(|video| contains_ignore_case(video.title(), term))
        .cloned()
        .collect();

    SearchResults::new(SearchKind::Title, term, matches)
}

/// Tag search
///
/// A query without the leading `#` matches nothing. Otherwise a video matches
/// when any of its tags contains the whole query (marker included), ignoring
/// case, so `#ca` matches `#cat`.
pub fn search_by_tag(catalog: &VideoCatalog, tag: &str) -> SearchResults {
    let matches = if tag.starts_with(TAG_MARKER) {
        catalog
            .videos()
            .iter()
            .filter(|video| video.tags().iter().any(|t| contains_ignore_case(t, tag)))
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    SearchResults::new(SearchKind::Tag, tag, matches)
}
