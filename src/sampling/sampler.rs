//! Playlist sampling.
//!
//! Playlist files are visited in random order and their playlists are taken,
//! in file order, until the target count is reached or every file is used.

use crate::foundation::utils::create_progress_bar;
use crate::foundation::{GraphError, Playlist, PlaylistFile};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension of the playlist dump files.
const PLAYLIST_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct Sampler {
    target: usize,
    seed: Option<u64>,
    show_progress: bool,
}

impl Sampler {
    /// Creates a sampler that stops after `target` playlists.
    ///
    /// Without a seed every run visits the files in a different order.
    pub fn new(target: usize, seed: Option<u64>) -> Self {
        Self {
            target,
            seed,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Selects up to `target` playlists from the files in `dir` and reports
    /// the selected count on `out`.
    ///
    /// Returns fewer playlists only when the directory holds fewer in total.
    /// Files after the one that completes the target are never opened.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable directory or file, the first file that is
    /// not valid JSON, and the first file without a `playlists` key.
    pub fn sample<W: Write>(
        &self,
        dir: &Path,
        out: &mut W,
    ) -> Result<Vec<Playlist>, GraphError> {
        let mut files = list_playlist_files(dir)?;
        shuffle_files(&mut files, self.seed);
        info!(files = files.len(), target = self.target, "sampling playlists");

        let progress = create_progress_bar(files.len() as u64, "files", self.show_progress);
        let mut selected = Vec::new();
        let mut needed = self.target;

        for path in &files {
            if needed == 0 {
                break;
            }

            progress.set_message(file_label(path));
            let playlists = load_playlist_file(path)?;
            let available = playlists.len();
            needed -= take_needed(&mut selected, playlists, needed);
            debug!(file = %path.display(), available, needed, "playlist file consumed");
            progress.inc(1);
        }

        progress.finish_and_clear();
        if needed > 0 {
            warn!(
                selected = selected.len(),
                target = self.target,
                "input exhausted before reaching the target"
            );
        }
        writeln!(out, "Selected {} playlists.", selected.len())
            .map_err(GraphError::ConsoleError)?;
        Ok(selected)
    }
}

/// Lists the playlist files directly inside `dir`, sorted by file name.
///
/// Symlinked files count as the files they point to.
///
/// Sorting first keeps a seeded shuffle reproducible regardless of the order
/// the filesystem returns entries in.
pub fn list_playlist_files(dir: &Path) -> Result<Vec<PathBuf>, GraphError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_playlist_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Shuffles files in place, deterministically when a seed is given.
pub fn shuffle_files(files: &mut [PathBuf], seed: Option<u64>) {
    match seed {
        Some(seed) => files.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => files.shuffle(&mut rand::rng()),
    }
}

/// Reads one playlist file and returns its playlists in file order.
pub fn load_playlist_file(path: &Path) -> Result<Vec<Playlist>, GraphError> {
    let bytes = fs::read(path).map_err(|e| GraphError::io(path, e))?;
    let file: PlaylistFile =
        serde_json::from_slice(&bytes).map_err(|e| GraphError::json(path, e))?;

    file.playlists.ok_or_else(|| GraphError::MissingPlaylists {
        path: path.to_path_buf(),
    })
}

/// Moves at most `needed` playlists into `selected` and returns how many moved.
fn take_needed(selected: &mut Vec<Playlist>, mut playlists: Vec<Playlist>, needed: usize) -> usize {
    playlists.truncate(needed);
    let taken = playlists.len();
    selected.extend(playlists);
    taken
}

fn is_playlist_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(PLAYLIST_EXTENSION))
        .unwrap_or(false)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
