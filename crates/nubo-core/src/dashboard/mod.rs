//! Dashboard domain module.

mod card;

pub use card::{ChartKind, MetricCard, Trend, default_cards, reorder};
