//! Derived lookup indexes.
//!
//! Both indexes are filled from the same pass over the source triples and
//! are read-only once built:
//! - state -> county -> zip codes (first-appearance order)
//! - zip -> {state, county}

mod builder;

pub use builder::IndexBuilder;

use crate::types::{canonical, CountyMap, CountyRef, Triple, ZipCode};
use indexmap::IndexMap;
use std::collections::HashMap;

/// State code -> county name -> zip codes.
pub type StateCountyIndex = IndexMap<String, CountyMap>;

/// Zip code -> owning state and county.
pub type ZipIndex = HashMap<ZipCode, CountyRef>;

/// Index sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct state codes.
    pub states: usize,
    /// Distinct (state, county) pairs.
    pub counties: usize,
    /// Distinct zip codes.
    pub zips: usize,
    /// Triples consumed while building.
    pub triples: usize,
}

/// The built, immutable index pair.
#[derive(Clone, Debug, Default)]
pub struct ZctaIndex {
    by_state: StateCountyIndex,
    by_zip: ZipIndex,
    triples: usize,
}

impl ZctaIndex {
    /// Build from triples, consuming them.
    pub fn build<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let iter = triples.into_iter();
        let mut builder = IndexBuilder::with_capacity(iter.size_hint().0);
        builder.extend(iter);
        builder.finish()
    }

    /// State codes in first-appearance order.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_state.keys().map(String::as_str)
    }

    /// Counties of a state, or `None` if the state is unknown.
    pub fn counties(&self, state: &str) -> Option<&CountyMap> {
        self.by_state.get(state)
    }

    /// Zip codes of a (state, county) pair.
    pub fn zips(&self, state: &str, county: &str) -> Option<&[ZipCode]> {
        self.by_state
            .get(state)
            .and_then(|counties| counties.get(county))
            .map(Vec::as_slice)
    }

    /// Owning state and county of a zip code.
    pub fn zip(&self, zip: &str) -> Option<&CountyRef> {
        self.by_zip.get(&*canonical(zip))
    }

    /// Whether `zip` is listed under (state, county). Unknown state or
    /// county is treated as an empty list.
    pub fn contains(&self, state: &str, county: &str, zip: &str) -> bool {
        let zip = canonical(zip);
        self.zips(state, county)
            .unwrap_or_default()
            .iter()
            .any(|z| z.as_str() == &*zip)
    }

    pub fn by_state(&self) -> &StateCountyIndex {
        &self.by_state
    }

    pub fn by_zip(&self) -> &ZipIndex {
        &self.by_zip
    }

    pub fn state_count(&self) -> usize {
        self.by_state.len()
    }

    pub fn zip_count(&self) -> usize {
        self.by_zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_state.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            states: self.by_state.len(),
            counties: self.by_state.values().map(IndexMap::len).sum(),
            zips: self.by_zip.len(),
            triples: self.triples,
        }
    }
}

impl FromIterator<Triple> for ZctaIndex {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self::build(iter)
    }
}
