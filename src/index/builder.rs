//! Single-pass construction of the state/county and zip indexes.

use super::{StateCountyIndex, ZctaIndex, ZipIndex};
use crate::types::{CountyRef, Triple, ZipCode};

/// Accumulates triples into a [`ZctaIndex`].
///
/// Every triple is appended to its county's zip list and written into the
/// zip index. Nothing is rejected or deduplicated: a repeated zip is appended
/// again, and a zip seen under a different county moves in the zip index
/// (last write wins) while staying in every list it was appended to.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    by_state: StateCountyIndex,
    by_zip: ZipIndex,
    triples: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the zip index for roughly `triples` records.
    pub fn with_capacity(triples: usize) -> Self {
        Self {
            by_state: StateCountyIndex::new(),
            by_zip: ZipIndex::with_capacity(triples),
            triples: 0,
        }
    }

    /// Add one triple.
    pub fn add(&mut self, triple: &Triple) {
        self.add_parts(triple.zip.clone(), &triple.state, &triple.county);
    }

    /// Add one triple given as its parts.
    pub fn add_parts(&mut self, zip: impl Into<ZipCode>, state: &str, county: &str) {
        let zip = zip.into();

        self.by_state
            .entry(state.to_string())
            .or_default()
            .entry(county.to_string())
            .or_default()
            .push(zip.clone());

        self.by_zip.insert(zip, CountyRef::new(state, county));
        self.triples += 1;
    }

    /// Number of triples added so far.
    pub fn len(&self) -> usize {
        self.triples
    }

    pub fn is_empty(&self) -> bool {
        self.triples == 0
    }

    /// Freeze the accumulated indexes.
    pub fn finish(self) -> ZctaIndex {
        let index = ZctaIndex {
            by_state: self.by_state,
            by_zip: self.by_zip,
            triples: self.triples,
        };

        let stats = index.stats();
        tracing::debug!(
            triples = stats.triples,
            states = stats.states,
            counties = stats.counties,
            zips = stats.zips,
            "built zcta index"
        );

        index
    }
}

impl Extend<Triple> for IndexBuilder {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.add_parts(triple.zip, &triple.state, &triple.county);
        }
    }
}
