//! Favorite extension ids

use serde::{Deserialize, Serialize};

/// Ordered set of favorite extension ids
///
/// Serializes as a plain JSON array so it can be stored as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is a favorite
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Add `id` if absent, remove it if present
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|f| f != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Ids in the order they were added
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when there are no favorites
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut favorites = Favorites::new();
        for id in iter {
            let id = id.into();
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }
}
