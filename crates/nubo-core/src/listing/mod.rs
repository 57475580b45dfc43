//! Listing domain module.
//!
//! Search filtering, column visibility and pagination shared by every
//! listing screen, plus the ETF order record types.

mod column;
mod record;
mod view_model;

pub use column::{
    ColumnDef, ColumnKind, VisibilityMap, apply_column_visibility, etf_order_default_visibility,
};
pub use record::{ETF_SEARCH_FIELDS, EtfOrder, EtfOrderDataset, FieldLookup};
pub use view_model::{
    ListingView, ListingViewModel, Page, PageSize, ViewParams, filter, paginate,
};
