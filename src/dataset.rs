//! Loading the bundled (zip, state, county) dataset.
//!
//! The dataset is a JSON object holding one array of rows:
//!
//! ```json
//! {"zip_state_county": [["59715", "MT", "Park County"], ...]}
//! ```
//!
//! Rows are taken as-is. Zips may be JSON strings or numbers; both are
//! normalized the same way.

use crate::error::{Result, ZctaError};
use crate::types::Triple;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Top-level key of the bundled dataset.
pub const DEFAULT_RECORDS_KEY: &str = "zip_state_county";

/// Parsed source triples, ready to hand to the index builder.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    triples: Vec<Triple>,
}

impl Dataset {
    /// Parse from a reader, taking rows from `records_key`.
    pub fn from_reader<R: Read>(reader: R, records_key: &str) -> Result<Self> {
        let root: Map<String, Value> = serde_json::from_reader(reader)?;
        Self::from_object(root, records_key)
    }

    /// Parse from bytes, taking rows from `records_key`.
    pub fn from_slice(bytes: &[u8], records_key: &str) -> Result<Self> {
        let root: Map<String, Value> = serde_json::from_slice(bytes)?;
        Self::from_object(root, records_key)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>, records_key: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file), records_key)?;

        tracing::debug!(
            path = %path.display(),
            triples = dataset.len(),
            "loaded zcta dataset"
        );

        Ok(dataset)
    }

    fn from_object(mut root: Map<String, Value>, records_key: &str) -> Result<Self> {
        let rows = root.remove(records_key).ok_or_else(|| {
            ZctaError::InvalidFormat(format!("missing `{}` array", records_key))
        })?;

        if !rows.is_array() {
            return Err(ZctaError::InvalidFormat(format!(
                "`{}` is not an array",
                records_key
            )));
        }

        let triples: Vec<Triple> = serde_json::from_value(rows)?;
        Ok(Self { triples })
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Hand the rows over; the dataset is gone after this.
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl IntoIterator for Dataset {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}
