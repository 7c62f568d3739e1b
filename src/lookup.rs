//! Query facade over the built indexes.

use crate::dataset::{Dataset, DEFAULT_RECORDS_KEY};
use crate::error::{Result, ZctaError};
use crate::index::{IndexStats, ZctaIndex};
use crate::types::{CountyRef, Criteria, FindResult, Query, Triple, ZipCode};
use std::path::PathBuf;

/// Where to load the dataset from.
#[derive(Clone, Debug)]
pub struct ZctaConfig {
    /// Path to the JSON dataset.
    pub dataset_path: PathBuf,

    /// Top-level key holding the rows.
    pub records_key: String,
}

impl Default for ZctaConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("./zip_state_county.json"),
            records_key: DEFAULT_RECORDS_KEY.to_string(),
        }
    }
}

/// Read-only lookups of zip codes by state and county.
///
/// Owns an immutable [`ZctaIndex`]. All queries are plain reads, so a
/// `Zcta` can be shared across threads without locking.
#[derive(Clone, Debug, Default)]
pub struct Zcta {
    index: ZctaIndex,
}

impl Zcta {
    pub fn new(index: ZctaIndex) -> Self {
        Self { index }
    }

    /// Build straight from triples.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        Self::new(ZctaIndex::build(triples))
    }

    /// Load the configured dataset and build the indexes.
    pub fn open(config: &ZctaConfig) -> Result<Self> {
        let dataset = Dataset::from_path(&config.dataset_path, &config.records_key)?;
        let zcta = Self::from_triples(dataset);

        let stats = zcta.stats();
        tracing::info!(
            path = %config.dataset_path.display(),
            states = stats.states,
            zips = stats.zips,
            "zcta index ready"
        );

        Ok(zcta)
    }

    // --- Queries ---

    /// All state codes, in first-appearance order.
    pub fn states(&self) -> Vec<&str> {
        self.index.states().collect()
    }

    /// County names of a state, in first-appearance order.
    ///
    /// Unlike [`find`](Self::find), an unknown state is an error here.
    pub fn counties_by_state(&self, state: &str) -> Result<Vec<&str>> {
        self.index
            .counties(state)
            .map(|counties| counties.keys().map(String::as_str).collect())
            .ok_or_else(|| ZctaError::UnknownState(state.to_string()))
    }

    /// State and county owning a zip code.
    pub fn county_by_zip(&self, zip: impl Into<ZipCode>) -> Option<&CountyRef> {
        self.index.zip(zip.into().as_str())
    }

    /// Look up whatever relation the criteria describe.
    ///
    /// | fields set              | result                          |
    /// |-------------------------|---------------------------------|
    /// | state, county, zip      | `Member(bool)`                  |
    /// | state, county           | `Zips` or `NotFound`            |
    /// | state                   | `Counties` or `NotFound`        |
    /// | zip                     | `County` or `NotFound`          |
    /// | none of the above       | `NotFound`                      |
    pub fn find(&self, criteria: &Criteria) -> FindResult<'_> {
        self.execute(&Query::from(criteria))
    }

    /// Run an already resolved query.
    pub fn execute(&self, query: &Query<'_>) -> FindResult<'_> {
        match *query {
            Query::ExactMatch { state, county, zip } => {
                FindResult::Member(self.index.contains(state, county, zip))
            }
            Query::ByStateCounty { state, county } => self
                .index
                .zips(state, county)
                .map_or(FindResult::NotFound, FindResult::Zips),
            Query::ByState { state } => self
                .index
                .counties(state)
                .map_or(FindResult::NotFound, FindResult::Counties),
            Query::ByZip { zip } => self
                .index
                .zip(zip)
                .map_or(FindResult::NotFound, FindResult::County),
            Query::Invalid => FindResult::NotFound,
        }
    }

    // --- Accessors ---

    pub fn index(&self) -> &ZctaIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}

impl From<ZctaIndex> for Zcta {
    fn from(index: ZctaIndex) -> Self {
        Self::new(index)
    }
}
