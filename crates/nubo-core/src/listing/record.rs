//! Listing records.
//!
//! The view-model only needs to read named text fields from a row. Everything
//! else a row carries is opaque and passed through to the renderer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::column::ColumnDef;
use crate::error::Result;

/// Read access to a row's text fields by name.
pub trait FieldLookup {
    /// Returns the text of `field`, or `None` when the row has no such text field.
    fn field_text(&self, field: &str) -> Option<&str>;
}

impl FieldLookup for Map<String, Value> {
    fn field_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}

/// Searchable fields of an ETF order row: ETF name, ISIN code, ticker.
pub const ETF_SEARCH_FIELDS: [&str; 3] = ["nombreEtf", "codigoIsinEtf", "nemotecnico"];

/// One row of the ETF order listings.
///
/// The three searchable fields are typed; every other field is kept verbatim
/// in `display` and serialized back in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfOrder {
    #[serde(default)]
    pub id: Value,
    #[serde(rename = "nombreEtf", default)]
    pub etf_name: String,
    #[serde(rename = "codigoIsinEtf", default)]
    pub isin: String,
    #[serde(rename = "nemotecnico", default)]
    pub ticker: String,
    #[serde(flatten)]
    pub display: Map<String, Value>,
}

impl FieldLookup for EtfOrder {
    fn field_text(&self, field: &str) -> Option<&str> {
        match field {
            "nombreEtf" => Some(&self.etf_name),
            "codigoIsinEtf" => Some(&self.isin),
            "nemotecnico" => Some(&self.ticker),
            other => self.display.get(other).and_then(Value::as_str),
        }
    }
}

/// The `{ columns, rows }` document backing the order listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EtfOrderDataset {
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub rows: Vec<EtfOrder>,
}

impl EtfOrderDataset {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
