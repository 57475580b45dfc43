//! Column definitions and visibility.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column key to visibility. Keys absent from the map are visible.
pub type VisibilityMap = HashMap<String, bool>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    Text,
    /// Rendered as a link that opens the row's detail.
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub field: String,
    #[serde(default)]
    pub header_name: String,
    #[serde(rename = "type", default)]
    pub kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Renderer-specific keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnDef {
    pub fn new(field: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: header_name.into(),
            kind: ColumnKind::Text,
            width: None,
            flex: None,
            extra: Map::new(),
        }
    }

    pub fn is_link(&self) -> bool {
        self.kind == ColumnKind::Link
    }
}

/// Columns left visible by `visibility`, in declared order.
pub fn apply_column_visibility<'a>(
    columns: &'a [ColumnDef],
    visibility: &VisibilityMap,
) -> Vec<&'a ColumnDef> {
    columns
        .iter()
        .filter(|column| visibility.get(&column.field).copied().unwrap_or(true))
        .collect()
}

/// Initial column visibility of the ETF order listings.
pub fn etf_order_default_visibility() -> VisibilityMap {
    [
        ("ordenesIngresadas", true),
        ("nemotecnico", true),
        ("NombreParticipanteRegistrador", true),
        ("CodigoParticipanteAutorizado", true),
        ("AdministradorETF", true),
        ("Fechaingresoorden", true),
        ("codigoIsinEtf", false),
        ("nombreEtf", false),
        ("fechaOperacion", false),
        ("NombredelParticipanteAutorizado", false),
        ("CodigoAdministrador", false),
        ("Fechaliquidacion", false),
        ("NombreETF", false),
    ]
    .into_iter()
    .map(|(field, visible)| (field.to_string(), visible))
    .collect()
}
