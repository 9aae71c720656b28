//! Pairwise artist co-occurrence counting.
//!
//! Every playlist contributes at most one count to each unordered pair of
//! distinct artists it contains. Pairs are stored under the sorted
//! `(smaller, larger)` id order, so `(A, B)` and `(B, A)` share one counter.

use crate::foundation::utils::{create_progress_bar, extract_artist_id};
use crate::foundation::Playlist;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Co-occurrence counts keyed by canonical artist pair.
///
/// Artist ids are interned once; pairs key on their intern indices. Iteration
/// follows the order in which each pair was first counted.
#[derive(Debug, Default, Clone)]
pub struct CoOccurrence {
    artists: IndexSet<String>,
    counts: IndexMap<(usize, usize), u64>,
    playlists_recorded: usize,
}

impl CoOccurrence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one playlist to the table.
    ///
    /// Tracks without a usable artist name are skipped. A playlist with fewer
    /// than two distinct artists changes nothing but the playlist count.
    pub fn record_playlist(&mut self, playlist: &Playlist) {
        let members = self.playlist_artists(playlist);

        for (position, &first) in members.iter().enumerate() {
            for &second in members.iter().skip(position + 1) {
                let pair = self.canonical_pair(first, second);
                *self.counts.entry(pair).or_insert(0) += 1;
            }
        }

        self.playlists_recorded += 1;
    }

    /// Returns how many recorded playlists contain both artists.
    ///
    /// Symmetric in its arguments; zero for unknown artists and for `a == b`.
    pub fn weight(&self, a: &str, b: &str) -> u64 {
        let (Some(first), Some(second)) =
            (self.artists.get_index_of(a), self.artists.get_index_of(b))
        else {
            return 0;
        };
        if first == second {
            return 0;
        }

        self.counts
            .get(&self.canonical_pair(first, second))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates `(source, target, weight)` with `source < target`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u64)> + '_ {
        self.counts.iter().map(move |(&(first, second), &weight)| {
            (
                self.artists[first].as_str(),
                self.artists[second].as_str(),
                weight,
            )
        })
    }

    /// Number of distinct pairs seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct artists seen, including ones that never paired.
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    pub fn playlists_recorded(&self) -> usize {
        self.playlists_recorded
    }

    /// Unique artist indices of a playlist, in first-appearance order.
    fn playlist_artists(&mut self, playlist: &Playlist) -> IndexSet<usize> {
        playlist
            .tracks
            .iter()
            .filter_map(|track| track.artist_name.as_deref())
            .filter_map(extract_artist_id)
            .map(|artist_id| self.intern(artist_id))
            .collect()
    }

    fn intern(&mut self, artist_id: &str) -> usize {
        match self.artists.get_index_of(artist_id) {
            Some(index) => index,
            None => self.artists.insert_full(artist_id.to_string()).0,
        }
    }

    fn canonical_pair(&self, first: usize, second: usize) -> (usize, usize) {
        if self.artists[first] <= self.artists[second] {
            (first, second)
        } else {
            (second, first)
        }
    }
}

/// Builds the co-occurrence table for the selected playlists.
pub fn aggregate_playlists(playlists: &[Playlist], show_progress: bool) -> CoOccurrence {
    let progress = create_progress_bar(playlists.len() as u64, "playlists", show_progress);
    let mut table = CoOccurrence::new();

    for playlist in playlists {
        table.record_playlist(playlist);
        progress.inc(1);
    }

    progress.finish_and_clear();
    debug!(
        playlists = table.playlists_recorded(),
        artists = table.artist_count(),
        pairs = table.len(),
        "co-occurrence table built"
    );
    table
}
