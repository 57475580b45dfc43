//! ETF order listing command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use nubo_core::listing::{
    ETF_SEARCH_FIELDS, EtfOrder, EtfOrderDataset, FieldLookup, ListingView, ListingViewModel,
    PageSize, ViewParams, etf_order_default_visibility,
};
use nubo_core::session::{GuardDecision, RouteGuard};

use crate::context::AppContext;

const BUNDLED_DATASET: &str = include_str!("../../data/etf_orders.json");

/// Screen whose access rules apply to this listing.
const LISTING_PATH: &str = "/etf/consulta-ordenes";

#[derive(Args, Debug)]
pub struct OrdersArgs {
    /// Case-insensitive match on ETF name, ISIN code or ticker
    #[arg(long, default_value = "")]
    pub search: String,

    /// Rows per page (4, 8 or 12)
    #[arg(long, default_value_t = 12)]
    pub page_size: usize,

    /// Zero-based page index; clamped to the last page
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Show a column hidden by default
    #[arg(long)]
    pub show: Vec<String>,

    /// Hide a column
    #[arg(long)]
    pub hide: Vec<String>,

    /// Restore the default column layout, ignoring --show/--hide
    #[arg(long)]
    pub reset_columns: bool,

    /// Dataset file with `columns` and `rows` (defaults to the bundled one)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl OrdersArgs {
    fn view_params(&self) -> Result<ViewParams> {
        let mut visible_columns = etf_order_default_visibility();
        if !self.reset_columns {
            for field in &self.show {
                visible_columns.insert(field.clone(), true);
            }
            for field in &self.hide {
                visible_columns.insert(field.clone(), false);
            }
        }

        Ok(ViewParams {
            search_term: self.search.clone(),
            visible_columns,
            page_size: PageSize::try_from(self.page_size)?,
            page_index: self.page,
        })
    }
}

fn load_dataset(path: Option<&PathBuf>) -> Result<EtfOrderDataset> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(EtfOrderDataset::from_json(&content)?)
        }
        None => Ok(EtfOrderDataset::from_json(BUNDLED_DATASET)?),
    }
}

pub async fn list(ctx: &AppContext, args: &OrdersArgs) -> Result<()> {
    match RouteGuard::new().check(&ctx.store, LISTING_PATH).await {
        GuardDecision::Allow => {}
        GuardDecision::Pending => bail!("A login is in progress, try again"),
        GuardDecision::Redirect { .. } => bail!("Not logged in. Run `nubo login` first"),
    }

    let dataset = load_dataset(args.dataset.as_ref())?;
    let params = args.view_params()?;
    let mut view_model = ListingViewModel::new();
    if args.reset_columns {
        let epoch = view_model.reset_view_state();
        tracing::info!(epoch, "Column layout reset");
    }

    let view = view_model.view(&dataset.rows, &dataset.columns, &params, &ETF_SEARCH_FIELDS);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.rows)?);
    } else {
        print_table(&view);
    }
    Ok(())
}

fn print_table(view: &ListingView<'_, EtfOrder>) {
    let headers: Vec<_> = view
        .columns
        .iter()
        .map(|c| if c.header_name.is_empty() { c.field.as_str() } else { c.header_name.as_str() })
        .collect();
    println!("{}", headers.join(" | "));

    for row in &view.rows {
        let cells: Vec<_> = view.columns.iter().map(|c| cell_text(row, &c.field)).collect();
        println!("{}", cells.join(" | "));
    }

    let page_count = view.page_count.max(1);
    println!(
        "-- page {}/{} ({} matching rows)",
        view.page_index + 1,
        page_count,
        view.total_rows
    );
}

fn cell_text(order: &EtfOrder, field: &str) -> String {
    if let Some(text) = order.field_text(field) {
        return text.to_string();
    }
    match order.display.get(field) {
        Some(serde_json::Value::Null) | None => String::new(),
        Some(value) => value.to_string(),
    }
}
