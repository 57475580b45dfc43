//! Metric cards shown on the dashboard and their drag-to-reorder behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub id: String,
    pub title: String,
    pub value: String,
    pub change: String,
    #[serde(rename = "changeType")]
    pub trend: Trend,
    #[serde(rename = "chartType")]
    pub chart: ChartKind,
}

impl MetricCard {
    fn new(id: &str, title: &str, value: &str, change: &str, trend: Trend, chart: ChartKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            trend,
            chart,
        }
    }
}

pub fn default_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new(
            "card-1",
            "Monto de cumplimiento diarios",
            "$50K",
            "+10%",
            Trend::Positive,
            ChartKind::Bar,
        ),
        MetricCard::new(
            "card-2",
            "Monto de garantías constituidas",
            "$50K",
            "+10%",
            Trend::Positive,
            ChartKind::Bar,
        ),
        MetricCard::new(
            "card-3",
            "Tiempo de cierre de operaciones",
            "3 días",
            "-2%",
            Trend::Negative,
            ChartKind::Line,
        ),
    ]
}

/// Moves the card `active_id` to the position currently held by `over_id`.
///
/// Returns `false` (and leaves `cards` alone) when the ids are equal or
/// either is unknown.
pub fn reorder(cards: &mut Vec<MetricCard>, active_id: &str, over_id: &str) -> bool {
    if active_id == over_id {
        return false;
    }
    let Some(from) = cards.iter().position(|c| c.id == active_id) else {
        return false;
    };
    let Some(to) = cards.iter().position(|c| c.id == over_id) else {
        return false;
    };

    let card = cards.remove(from);
    cards.insert(to, card);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[MetricCard]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_move_forward() {
        let mut cards = default_cards();
        assert!(reorder(&mut cards, "card-1", "card-3"));
        assert_eq!(ids(&cards), ["card-2", "card-3", "card-1"]);
    }

    #[test]
    fn test_move_backward() {
        let mut cards = default_cards();
        assert!(reorder(&mut cards, "card-3", "card-1"));
        assert_eq!(ids(&cards), ["card-3", "card-1", "card-2"]);
    }

    #[test]
    fn test_noop_cases() {
        let mut cards = default_cards();
        assert!(!reorder(&mut cards, "card-2", "card-2"));
        assert!(!reorder(&mut cards, "card-9", "card-1"));
        assert!(!reorder(&mut cards, "card-1", "card-9"));
        assert_eq!(ids(&cards), ["card-1", "card-2", "card-3"]);
    }
}
