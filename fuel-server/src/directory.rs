//! The in-memory station directory.
//!
//! Holds the flattened station list built once at startup. The directory is
//! immutable; the web layer re-filters the same snapshot on every request.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::{Brand, Category, StateCode, Station};

/// Immutable snapshot of the full station list plus derived lookups.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Vec<Station>,
    loaded_at: DateTime<Utc>,
}

/// Summary counts over the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub exclusive: usize,
    pub primary: usize,
    pub limited: usize,
    pub terminals: usize,
    pub states_covered: usize,
    pub loaded_at: DateTime<Utc>,
}

impl StationDirectory {
    /// Create a directory from a flattened station list.
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations,
            loaded_at: Utc::now(),
        }
    }

    /// All stations, in dataset order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// When this snapshot was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct state codes present, sorted ascending.
    ///
    /// Stations without a parseable state are not represented.
    pub fn states(&self) -> Vec<StateCode> {
        let set: BTreeSet<StateCode> = self.stations.iter().filter_map(|s| s.state).collect();
        set.into_iter().collect()
    }

    /// Distinct categories present, sorted by display name.
    pub fn categories(&self) -> Vec<Category> {
        let mut present: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| self.stations.iter().any(|s| s.category() == *c))
            .collect();
        present.sort_by_key(|c| c.as_str());
        present
    }

    /// Distinct brands present, sorted by display name.
    pub fn brands(&self) -> Vec<Brand> {
        let mut present: Vec<Brand> = Brand::ALL
            .into_iter()
            .filter(|b| self.stations.iter().any(|s| s.brand == *b))
            .collect();
        present.sort_by_key(|b| b.as_str());
        present
    }

    /// Summary counts for the loaded snapshot.
    pub fn stats(&self) -> DirectoryStats {
        let count = |category: Category| {
            self.stations
                .iter()
                .filter(|s| s.category() == category)
                .count()
        };

        DirectoryStats {
            total: self.stations.len(),
            exclusive: count(Category::Exclusive),
            primary: count(Category::Primary),
            limited: count(Category::Limited),
            terminals: count(Category::FleetTerminal),
            states_covered: self.states().len(),
            loaded_at: self.loaded_at,
        }
    }
}
