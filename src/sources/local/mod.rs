// src/sources/local/mod.rs
//
// Local filesystem catalogue source.
//
// Directory convention:
//   <base-dir>/<entry-name>/{cover.*, episode files or subdirectories, <any>.json}
//
// All listings are single-page. Per-entry failures during a bulk scan are
// logged and the entry skipped; operations on one explicitly requested
// entry or episode propagate their errors.

mod covers;
mod filters;
mod format;


use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::warn;
use walkdir::WalkDir;

use crate::domain::{
    EntriesPage, Entry, EntryMetadata, EntryStatus, Episode, Filter, FilterList, SortSelection,
    Video,
};
use crate::error::{SourceError, SourceResult};
use crate::util::{compare_natural, EpisodeRecognition};

use super::{CatalogueSource, Source};

pub use format::{Format, SUPPORTED_EXTENSIONS};

/// Window for the latest-updates listing.
const LATEST_THRESHOLD_DAYS: i64 = 7;

/// Sort filter option indices, in display order.
const SORT_BY_TITLE: usize = 0;
const SORT_BY_DATE: usize = 1;

/// Catalogue source over one or more library directories on disk.
pub struct LocalSource {
    name: String,
    base_dirs: Vec<PathBuf>,
    recognition: EpisodeRecognition,
}

/// A candidate entry directory collected during a scan.
struct EntryDir {
    name: String,
    modified: DateTime<Utc>,
}

impl LocalSource {
    /// Fixed id of the local source; persisted rows depend on it.
    pub const ID: i64 = 0;

    pub fn new(base_dirs: Vec<PathBuf>) -> Self {
        Self {
            name: "Local anime source".to_string(),
            base_dirs,
            recognition: EpisodeRecognition::default(),
        }
    }

    /// `<video dir or home dir>/<app-name>/localanime` for this platform.
    pub fn default_base_directories(app_name: &str) -> Vec<PathBuf> {
        [dirs::video_dir(), dirs::home_dir()]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(app_name).join("localanime"))
            .collect()
    }

    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.base_dirs
    }

    /// Resolve the on-disk format of an episode.
    ///
    /// Absolute urls are checked directly; relative ones against each base
    /// directory in order.
    pub fn episode_format(&self, episode: &Episode) -> SourceResult<Format> {
        let path = Path::new(&episode.url);
        if path.exists() {
            return Format::for_path(path);
        }
        for base in &self.base_dirs {
            let candidate = base.join(&episode.url);
            if candidate.exists() {
                return Format::for_path(&candidate);
            }
        }
        Err(SourceError::EpisodeNotFound {
            path: path.to_path_buf(),
        })
    }

    /// Persist a cover stream for `entry` in the first base directory.
    ///
    /// Returns `Ok(None)` when the source has no base directories.
    /// Idempotent: an existing cover is kept and returned.
    pub fn update_cover(
        &self,
        entry: &Entry,
        image_data: &mut dyn Read,
    ) -> SourceResult<Option<PathBuf>> {
        let Some(base) = self.base_dirs.first() else {
            return Ok(None);
        };
        covers::write_cover(&base.join(&entry.url), image_data).map(Some)
    }

    // ------------------------------------------------------------------
    // Scanning
    // ------------------------------------------------------------------

    fn search_entries(&self, query: &str, filters: &FilterList, latest: bool) -> EntriesPage {
        let cutoff = latest.then(|| Utc::now() - Duration::days(LATEST_THRESHOLD_DAYS));
        let query = query.to_lowercase();

        let mut seen: HashSet<String> = HashSet::new();
        let mut dirs: Vec<EntryDir> = Vec::new();
        for base in &self.base_dirs {
            if !base.is_dir() {
                continue;
            }
            for child in WalkDir::new(base).min_depth(1).max_depth(1) {
                let child = match child {
                    Ok(child) => child,
                    Err(err) => {
                        warn!("skipping unreadable library entry: {}", err);
                        continue;
                    }
                };
                if !child.file_type().is_dir() {
                    continue;
                }
                let name = child.file_name().to_string_lossy().into_owned();
                if name.starts_with('.') {
                    continue;
                }
                let modified =
                    modified_time(child.path()).unwrap_or(DateTime::<Utc>::MIN_UTC);
                let keep = match cutoff {
                    Some(threshold) => modified >= threshold,
                    None => name.to_lowercase().contains(&query),
                };
                if !keep || !seen.insert(name.clone()) {
                    continue;
                }
                dirs.push(EntryDir { name, modified });
            }
        }

        if let Some(selection) = active_sort(filters, latest) {
            let directed = |ordering: Ordering| {
                if selection.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            };
            // descending sorts reverse the comparator, not the sorted vec,
            // so equal keys keep their scan order
            match selection.index {
                SORT_BY_TITLE => dirs
                    .sort_by(|a, b| directed(a.name.to_lowercase().cmp(&b.name.to_lowercase()))),
                SORT_BY_DATE => dirs.sort_by(|a, b| directed(a.modified.cmp(&b.modified))),
                _ => {}
            }
        }

        let entries = dirs
            .into_iter()
            .map(|dir| self.build_entry(dir.name))
            .collect();
        EntriesPage::new(entries, false)
    }

    fn build_entry(&self, name: String) -> Entry {
        let mut entry = Entry::new(name.clone(), name);

        // a cover.* file in any base directory wins without an episode scan
        for base in &self.base_dirs {
            if let Some(cover) = covers::find_cover(&base.join(&entry.url)) {
                entry.thumbnail_url = Some(cover.to_string_lossy().into_owned());
                break;
            }
        }
        if entry.thumbnail_url.is_some() {
            return entry;
        }

        match self.list_episodes(&entry) {
            Ok(episodes) => {
                // the list is number-descending, so the last element is the
                // first episode
                if let Some(episode) = episodes.last() {
                    match self.cover_from_episode(&entry, episode) {
                        Ok(Some(cover)) => {
                            entry.thumbnail_url = Some(cover.to_string_lossy().into_owned());
                        }
                        Ok(None) => {}
                        Err(err) => {
                            warn!("failed to extract a cover for {}: {}", entry.title, err);
                        }
                    }
                }
            }
            Err(err) => {
                warn!("failed to list episodes for {}: {}", entry.title, err);
            }
        }
        entry
    }

    fn list_episodes(&self, entry: &Entry) -> SourceResult<Vec<Episode>> {
        let mut found_dir = false;
        let mut episodes = Vec::new();
        for base in &self.base_dirs {
            let dir = base.join(&entry.url);
            if !dir.is_dir() {
                continue;
            }
            found_dir = true;
            for child in WalkDir::new(&dir).min_depth(1).max_depth(1) {
                let child = match child {
                    Ok(child) => child,
                    Err(err) => {
                        warn!("skipping unreadable episode of {}: {}", entry.title, err);
                        continue;
                    }
                };
                let path = child.path();
                let is_multi_file = child.file_type().is_dir();
                if !is_multi_file && !path.extension().map_or(false, format::is_supported_extension)
                {
                    continue;
                }

                let raw_name = if is_multi_file {
                    child.file_name().to_string_lossy().into_owned()
                } else {
                    path.file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_default()
                };

                let mut episode =
                    Episode::new(path.to_string_lossy().into_owned(), String::new());
                episode.date_upload = modified_time(path);
                episode.name = clean_episode_title(&raw_name, &entry.title);
                episode.episode_number = self
                    .recognition
                    .parse_episode_number(&entry.title, &episode.name)
                    .unwrap_or(Episode::UNKNOWN_NUMBER);
                episodes.push(episode);
            }
        }
        if !found_dir {
            return Err(SourceError::EntryNotFound(entry.url.clone()));
        }

        // number descending, natural-order name descending on ties
        episodes.sort_by(|a, b| {
            b.episode_number
                .total_cmp(&a.episode_number)
                .then_with(|| compare_natural(&b.name, &a.name))
        });
        Ok(episodes)
    }

    fn read_details(&self, entry: &Entry) -> SourceResult<Entry> {
        let mut details = entry.clone();
        let mut found_dir = false;
        for base in &self.base_dirs {
            let dir = base.join(&entry.url);
            if !dir.is_dir() {
                continue;
            }
            found_dir = true;
            let Some(sidecar) = find_sidecar(&dir) else {
                continue;
            };
            let file = fs::File::open(&sidecar)?;
            let metadata: EntryMetadata = serde_json::from_reader(io::BufReader::new(file))?;
            metadata.apply_to(&mut details);
            break;
        }
        if !found_dir {
            return Err(SourceError::EntryNotFound(entry.url.clone()));
        }
        Ok(details)
    }

    /// Extract a cover from an episode and persist it next to the entry.
    fn cover_from_episode(
        &self,
        entry: &Entry,
        episode: &Episode,
    ) -> SourceResult<Option<PathBuf>> {
        let search_dir = match self.episode_format(episode)? {
            Format::Directory(dir) => dir,
            // sibling images sit next to a single-file episode
            Format::Video(file) => match file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => return Ok(None),
            },
        };
        let Some(image_path) = covers::first_image(&search_dir) else {
            return Ok(None);
        };
        let mut reader = fs::File::open(&image_path)?;
        self.update_cover(entry, &mut reader)
    }
}

#[async_trait]
impl Source for LocalSource {
    fn id(&self) -> i64 {
        Self::ID
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn lang(&self) -> &str {
        "other"
    }

    async fn get_details(&self, entry: &Entry) -> SourceResult<Entry> {
        self.read_details(entry)
    }

    async fn get_episode_list(&self, entry: &Entry) -> SourceResult<Vec<Episode>> {
        if entry.status == EntryStatus::Licensed {
            return Err(SourceError::Licensed);
        }
        self.list_episodes(entry)
    }

    async fn get_video_list(&self, episode: &Episode) -> SourceResult<Vec<Video>> {
        // resolve the format first so a missing or bogus file fails here
        self.episode_format(episode)?;
        Ok(vec![Video::new(
            episode.url.clone(),
            "local",
            Some(episode.url.clone()),
        )])
    }
}

#[async_trait]
impl CatalogueSource for LocalSource {
    fn supports_latest(&self) -> bool {
        true
    }

    async fn get_popular(&self, _page: u32) -> SourceResult<EntriesPage> {
        Ok(self.search_entries("", &filters::popular_filters(), false))
    }

    async fn get_search(
        &self,
        _page: u32,
        query: &str,
        filters: &FilterList,
    ) -> SourceResult<EntriesPage> {
        Ok(self.search_entries(query, filters, false))
    }

    async fn get_latest(&self, _page: u32) -> SourceResult<EntriesPage> {
        Ok(self.search_entries("", &filters::latest_filters(), true))
    }

    fn filter_list(&self) -> FilterList {
        filters::popular_filters()
    }
}

/// Resolve which sort to apply to a scan.
///
/// An active sort selection wins. A sort filter that is present but has no
/// active state keeps the scan order untouched; the mode default (title
/// ascending, or date descending for latest) applies only when the filter
/// list carries no sort filter at all.
fn active_sort(filters: &FilterList, latest: bool) -> Option<SortSelection> {
    if let Some(selection) = filters.sort_selection() {
        return Some(selection.clone());
    }
    let has_sort_filter = filters
        .iter()
        .any(|filter| matches!(filter, Filter::Sort { .. }));
    if has_sort_filter {
        return None;
    }
    Some(if latest {
        SortSelection::new(SORT_BY_DATE, false)
    } else {
        SortSelection::new(SORT_BY_TITLE, true)
    })
}

/// Strip the entry title from an episode name and trim whitespace and
/// delimiter characters from both ends.
fn clean_episode_title(episode_name: &str, entry_title: &str) -> String {
    let stripped = if entry_title.is_empty() {
        episode_name.to_string()
    } else {
        episode_name.replace(entry_title, "")
    };
    stripped
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '_' | ',' | ':'))
        .to_string()
}

fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
        .map(DateTime::from)
}

fn find_sidecar(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|child| child.path())
        .find(|path| {
            path.is_file()
                && path
                    .extension()
                    .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
        })
}
