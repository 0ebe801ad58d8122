//! Filtering and sorting gallery entries

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::favorites::Favorites;
use crate::manifest::GalleryEntry;

/// Sort order of a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Catalog order
    #[default]
    Default,
    /// By name, case-insensitive
    Name,
    /// By author, case-insensitive
    Author,
    /// New entries first, otherwise catalog order
    Newest,
    /// Shuffled
    Random,
}

impl SortMode {
    /// Select-box value for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Name => "name",
            SortMode::Author => "author",
            SortMode::Newest => "newest",
            SortMode::Random => "random",
        }
    }
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to catalog order
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name" => SortMode::Name,
            "author" => SortMode::Author,
            "newest" => SortMode::Newest,
            "random" => SortMode::Random,
            _ => SortMode::Default,
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which entries a category button shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every entry
    #[default]
    All,
    /// Entries in the favorites set
    Favorites,
    /// Entries in one normalized category
    Named(String),
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        match s {
            "all" => CategoryFilter::All,
            "favorites" => CategoryFilter::Favorites,
            other => CategoryFilter::Named(other.to_string()),
        }
    }
}

/// Search, category and sort settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryQuery {
    /// Search text; matched lowercased and trimmed against each entry
    #[serde(default)]
    pub search: String,
    /// Category filter
    #[serde(default)]
    pub category: CategoryFilter,
    /// Sort order
    #[serde(default)]
    pub sort: SortMode,
}

impl GalleryQuery {
    /// Query matching everything in catalog order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Set the category filter
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `entry` passes the search and category filters
    pub fn matches(&self, entry: &GalleryEntry, favorites: &Favorites) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty() || entry.search_text.contains(&needle);
        let matches_category = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Favorites => favorites.contains(&entry.id),
            CategoryFilter::Named(name) => entry.category == *name,
        };
        matches_search && matches_category
    }

    /// Filter and sort `entries`
    pub fn apply<'a>(
        &self,
        entries: &'a [GalleryEntry],
        favorites: &Favorites,
    ) -> Vec<&'a GalleryEntry> {
        self.apply_with_rng(entries, favorites, &mut rand::thread_rng())
    }

    /// [`apply`](Self::apply) with an explicit random source for `Random`
    pub fn apply_with_rng<'a, R: Rng + ?Sized>(
        &self,
        entries: &'a [GalleryEntry],
        favorites: &Favorites,
        rng: &mut R,
    ) -> Vec<&'a GalleryEntry> {
        let mut results: Vec<&GalleryEntry> = entries
            .iter()
            .filter(|e| self.matches(e, favorites))
            .collect();

        match self.sort {
            SortMode::Default => {}
            SortMode::Name => results.sort_by(|a, b| compare_text(&a.name, &b.name)),
            SortMode::Author => results.sort_by(|a, b| compare_text(&a.author, &b.author)),
            SortMode::Newest => results.sort_by_key(|e| !e.is_new),
            SortMode::Random => results.shuffle(rng),
        }
        results
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
