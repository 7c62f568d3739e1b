//! # ZCTA
//!
//! In-memory lookups between U.S. ZIP Code Tabulation Areas, states and
//! counties, built once from a flat list of `(zip, state, county)` rows.
//!
//! ## Core Concepts
//!
//! - **Triples**: Source rows, consumed once while building
//! - **Index**: state -> county -> zips, plus zip -> {state, county}
//! - **Queries**: States, counties of a state, owner of a zip, and `find`
//!
//! ## Example
//!
//! ```ignore
//! use zcta::{Criteria, Zcta, ZctaConfig};
//!
//! let zcta = Zcta::open(&ZctaConfig {
//!     dataset_path: "./zip_state_county.json".into(),
//!     ..Default::default()
//! })?;
//!
//! let park = zcta.county_by_zip(59715);
//! let gallatin = zcta.find(&Criteria::new().state("MT").county("Gallatin County"));
//! let member = zcta.find(&Criteria::new().state("MT").county("Park County").zip("59715"));
//! ```

pub mod dataset;
pub mod error;
pub mod index;
pub mod lookup;
pub mod shared;
pub mod types;

// Re-exports
pub use dataset::{Dataset, DEFAULT_RECORDS_KEY};
pub use error::{Result, ZctaError};
pub use index::{IndexBuilder, IndexStats, StateCountyIndex, ZctaIndex, ZipIndex};
pub use lookup::{Zcta, ZctaConfig};
pub use shared::SharedZcta;
pub use types::*;
