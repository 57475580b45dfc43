//! Listing view-model.
//!
//! Pure derivation of the visible rows and columns of a listing screen from
//! the raw records and the parameters the user picked. The only state kept
//! between calls is the reset epoch.

use serde::{Deserialize, Serialize};

use super::column::{ColumnDef, VisibilityMap, apply_column_visibility};
use super::record::FieldLookup;
use crate::error::NuboError;

/// Rows whose `fields` contain `term`, ignoring case, in their original order.
///
/// An empty term keeps every row.
pub fn filter<'a, R: FieldLookup>(rows: &'a [R], term: &str, fields: &[&str]) -> Vec<&'a R> {
    if term.is_empty() {
        return rows.iter().collect();
    }

    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            fields.iter().any(|field| {
                row.field_text(field)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Page sizes offered by the listing screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Four,
    Eight,
    #[default]
    Twelve,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Four, PageSize::Eight, PageSize::Twelve];

    pub fn get(self) -> usize {
        match self {
            PageSize::Four => 4,
            PageSize::Eight => 8,
            PageSize::Twelve => 12,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = NuboError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| {
                NuboError::invalid_argument(format!(
                    "page size {} is not one of 4, 8, 12",
                    value
                ))
            })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One page of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    /// Index actually shown, after clamping.
    pub page_index: usize,
    /// Number of pages; zero when there are no rows.
    pub page_count: usize,
}

/// Slices out page `page_index` of `rows`.
///
/// An index past the end is clamped to the last page, so a shrinking result
/// set never leaves the user on a blank page.
pub fn paginate<T>(rows: &[T], page_size: PageSize, page_index: usize) -> Page<'_, T> {
    let size = page_size.get();
    let page_count = rows.len().div_ceil(size);
    if page_count == 0 {
        return Page {
            rows: &rows[..0],
            page_index: 0,
            page_count: 0,
        };
    }

    let page_index = page_index.min(page_count - 1);
    let start = page_index * size;
    let end = (start + size).min(rows.len());

    Page {
        rows: &rows[start..end],
        page_index,
        page_count,
    }
}

/// Parameters chosen on a listing screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub visible_columns: VisibilityMap,
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default)]
    pub page_index: usize,
}

/// Everything the table renderer needs for one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a, R> {
    pub rows: Vec<&'a R>,
    pub columns: Vec<&'a ColumnDef>,
    pub page_index: usize,
    pub page_count: usize,
    /// Rows matching the search before pagination.
    pub total_rows: usize,
    pub reset_epoch: u64,
}

/// Per-screen view-model. Holds only the reset epoch.
#[derive(Debug, Clone, Default)]
pub struct ListingViewModel {
    reset_epoch: u64,
}

impl ListingViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_epoch(&self) -> u64 {
        self.reset_epoch
    }

    /// Signals the renderer to drop cached column layout (widths, order).
    ///
    /// Returns the new epoch.
    pub fn reset_view_state(&mut self) -> u64 {
        self.reset_epoch += 1;
        self.reset_epoch
    }

    pub fn view<'a, R: FieldLookup>(
        &self,
        rows: &'a [R],
        columns: &'a [ColumnDef],
        params: &ViewParams,
        search_fields: &[&str],
    ) -> ListingView<'a, R> {
        let matching = filter(rows, &params.search_term, search_fields);
        let page = paginate(&matching, params.page_size, params.page_index);

        ListingView {
            rows: page.rows.to_vec(),
            columns: apply_column_visibility(columns, &params.visible_columns),
            page_index: page.page_index,
            page_count: page.page_count,
            total_rows: matching.len(),
            reset_epoch: self.reset_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn row(name: &str) -> Map<String, Value> {
        serde_json::from_value(json!({ "name": name })).unwrap()
    }

    #[test]
    fn test_empty_term_returns_all_rows_in_order() {
        let rows = vec![row("A"), row("B"), row("C")];
        let result = filter(&rows, "", &["name"]);
        assert_eq!(result, rows.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![row("Alpha ETF")];
        assert_eq!(filter(&rows, "alpha", &["name"]).len(), 1);
        assert_eq!(filter(&rows, "ETF", &["name"]).len(), 1);
        assert_eq!(filter(&rows, "beta", &["name"]).len(), 0);
    }

    #[test]
    fn test_filter_preserves_order() {
        let rows = vec![row("Alpha one"), row("Beta"), row("Alpha two")];
        let result = filter(&rows, "alpha", &["name"]);
        let names: Vec<_> = result.iter().filter_map(|r| r.field_text("name")).collect();
        assert_eq!(names, ["Alpha one", "Alpha two"]);
    }

    #[test]
    fn test_filter_matches_any_named_field() {
        let rows: Vec<Map<String, Value>> = vec![
            serde_json::from_value(json!({"a": "x", "b": "needle"})).unwrap(),
            serde_json::from_value(json!({"a": "x", "c": "needle"})).unwrap(),
        ];
        assert_eq!(filter(&rows, "NEEDLE", &["a", "b"]).len(), 1);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let rows: Vec<u32> = (0..10).collect();
        let page = paginate(&rows, PageSize::Four, 2);
        assert_eq!(page.rows, &[8, 9]);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_paginate_clamps_out_of_range_index() {
        let rows: Vec<u32> = (0..10).collect();
        let page = paginate(&rows, PageSize::Four, 7);
        assert_eq!(page.rows, &[8, 9]);
        assert_eq!(page.page_index, 2);
    }

    #[test]
    fn test_paginate_empty_rows() {
        let rows: Vec<u32> = Vec::new();
        let page = paginate(&rows, PageSize::Twelve, 3);
        assert!(page.rows.is_empty());
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_count, 0);
    }

    #[test]
    fn test_page_size_rejects_unknown_value() {
        assert_eq!(PageSize::try_from(8).unwrap(), PageSize::Eight);
        assert!(PageSize::try_from(10).is_err());
        assert_eq!(serde_json::to_value(PageSize::default()).unwrap(), json!(12));
        assert!(serde_json::from_value::<PageSize>(json!(5)).is_err());
    }

    #[test]
    fn test_reset_view_state_increments() {
        let mut vm = ListingViewModel::new();
        assert_eq!(vm.reset_epoch(), 0);
        assert_eq!(vm.reset_view_state(), 1);
        assert_eq!(vm.reset_view_state(), 2);
        assert_eq!(vm.reset_epoch(), 2);
    }

    #[test]
    fn test_view_filters_then_paginates() {
        let rows: Vec<Map<String, Value>> = (0..6)
            .map(|i| row(if i % 2 == 0 { "Alpha" } else { "Beta" }))
            .collect();
        let columns = vec![ColumnDef::new("name", "Name"), ColumnDef::new("hidden", "Hidden")];
        let params = ViewParams {
            search_term: "alpha".to_string(),
            visible_columns: VisibilityMap::from([("hidden".to_string(), false)]),
            page_size: PageSize::Four,
            page_index: 5,
        };
        let mut vm = ListingViewModel::new();
        vm.reset_view_state();

        let view = vm.view(&rows, &columns, &params, &["name"]);

        assert_eq!(view.total_rows, 3);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.columns.len(), 1);
        assert_eq!(view.reset_epoch, 1);
    }
}
