//! Core types for ZCTA lookups.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Width numeric zip codes are zero-padded to.
pub const ZIP_WIDTH: usize = 5;

/// A zip code (ZCTA) identifier.
///
/// Always held as a string so leading zeros survive. Numbers and all-digit
/// strings shorter than five digits are zero-padded, so `ZipCode::from(2806)`,
/// `ZipCode::from("2806")` and `ZipCode::from("02806")` are the same key.
/// Anything else is kept as given.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "Value")]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(zip: impl Into<String>) -> Self {
        let zip = zip.into();
        match canonical(&zip) {
            Cow::Owned(padded) => ZipCode(padded),
            Cow::Borrowed(_) => ZipCode(zip),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonical form of a zip string: short all-digit strings are zero-padded.
pub fn canonical(zip: &str) -> Cow<'_, str> {
    if !zip.is_empty() && zip.len() < ZIP_WIDTH && zip.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Owned(format!("{:0>width$}", zip, width = ZIP_WIDTH))
    } else {
        Cow::Borrowed(zip)
    }
}

impl fmt::Debug for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zip({})", self.0)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ZipCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ZipCode {
    fn from(s: &str) -> Self {
        ZipCode::new(s)
    }
}

impl From<String> for ZipCode {
    fn from(s: String) -> Self {
        ZipCode::new(s)
    }
}

impl From<&String> for ZipCode {
    fn from(s: &String) -> Self {
        ZipCode::new(s.as_str())
    }
}

impl From<u32> for ZipCode {
    fn from(n: u32) -> Self {
        ZipCode::new(n.to_string())
    }
}

impl From<&ZipCode> for ZipCode {
    fn from(zip: &ZipCode) -> Self {
        zip.clone()
    }
}

/// Any JSON value: integral numbers are padded like digit strings, `null`
/// is empty, other values use their JSON text.
impl From<Value> for ZipCode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ZipCode::new(s),
            Value::Number(n) => {
                ZipCode::new(integral(&n).map_or_else(|| n.to_string(), |n| n.to_string()))
            }
            Value::Null => ZipCode::new(String::new()),
            other => ZipCode::new(other.to_string()),
        }
    }
}

fn integral(n: &Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

impl PartialEq<str> for ZipCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ZipCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for ZipCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// One source record linking a zip code to a state and county.
///
/// Deserializes from a `[zip, state, county]` array. Short or oddly typed
/// rows are not rejected: missing fields become empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct Triple {
    pub zip: ZipCode,
    pub state: String,
    pub county: String,
}

impl Triple {
    pub fn new(
        zip: impl Into<ZipCode>,
        state: impl Into<String>,
        county: impl Into<String>,
    ) -> Self {
        Self {
            zip: zip.into(),
            state: state.into(),
            county: county.into(),
        }
    }
}

impl From<Vec<Value>> for Triple {
    fn from(mut row: Vec<Value>) -> Self {
        row.resize(3, Value::Null);
        let county = text(row.pop());
        let state = text(row.pop());
        let zip = ZipCode::from(row.pop().unwrap_or(Value::Null));

        Self { zip, state, county }
    }
}

fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => Ok(Some(text(Some(other)))),
    }
}

/// The state and county a zip code belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountyRef {
    pub state: String,
    pub county: String,
}

impl CountyRef {
    pub fn new(state: impl Into<String>, county: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            county: county.into(),
        }
    }
}

/// County name -> zip codes, in source order.
pub type CountyMap = IndexMap<String, Vec<ZipCode>>;

/// Partial record passed to `find`.
///
/// Any field may be omitted. Empty strings count as omitted. Unknown JSON
/// fields are ignored, and non-string values are read the same way source
/// rows are.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub county: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<ZipCode>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    pub fn zip(mut self, zip: impl Into<ZipCode>) -> Self {
        self.zip = Some(zip.into());
        self
    }
}

/// A `find` request, resolved from [`Criteria`] by which fields are set.
///
/// Richer shapes win: all three fields, then state+county, then state, then
/// zip. County alone (or with zip only) is not a recognized shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query<'a> {
    ExactMatch {
        state: &'a str,
        county: &'a str,
        zip: &'a str,
    },
    ByStateCounty {
        state: &'a str,
        county: &'a str,
    },
    ByState {
        state: &'a str,
    },
    ByZip {
        zip: &'a str,
    },
    Invalid,
}

impl<'a> From<&'a Criteria> for Query<'a> {
    fn from(criteria: &'a Criteria) -> Self {
        let state = present(criteria.state.as_deref());
        let county = present(criteria.county.as_deref());
        let zip = present(criteria.zip.as_ref().map(ZipCode::as_str));

        match (state, county, zip) {
            (Some(state), Some(county), Some(zip)) => Query::ExactMatch { state, county, zip },
            (Some(state), Some(county), None) => Query::ByStateCounty { state, county },
            (Some(state), None, _) => Query::ByState { state },
            (None, _, Some(zip)) => Query::ByZip { zip },
            (None, _, None) => Query::Invalid,
        }
    }
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

/// Result of `find`; the variant depends on the query shape.
///
/// Serializes to `true`/`false`, an array of zips, a county object, a
/// `{state, county}` object, or `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FindResult<'a> {
    Member(bool),
    Zips(&'a [ZipCode]),
    Counties(&'a CountyMap),
    County(&'a CountyRef),
    NotFound,
}

impl<'a> FindResult<'a> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FindResult::NotFound)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FindResult::Member(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_zips(&self) -> Option<&'a [ZipCode]> {
        match *self {
            FindResult::Zips(zips) => Some(zips),
            _ => None,
        }
    }

    pub fn as_counties(&self) -> Option<&'a CountyMap> {
        match *self {
            FindResult::Counties(counties) => Some(counties),
            _ => None,
        }
    }

    pub fn as_county(&self) -> Option<&'a CountyRef> {
        match *self {
            FindResult::County(county) => Some(county),
            _ => None,
        }
    }
}
