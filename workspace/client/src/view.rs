//! Display-ready view models shared by the browser and terminal dashboards.

use common::format::{
    PLACEHOLDER, format_currency, format_hour, format_integer, format_minutes,
};
use common::{KpiSnapshot, RankedRow};

use crate::state::DashboardData;

/// Content of one KPI card.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub sub: String,
    pub hint: &'static str,
}

/// The four headline cards. `None` renders every value as a placeholder.
pub fn kpi_cards(kpis: Option<&KpiSnapshot>) -> Vec<KpiCard> {
    let empty = KpiSnapshot::default();
    let kpis = kpis.unwrap_or(&empty);

    vec![
        KpiCard {
            title: "Total Visits",
            value: format_integer(kpis.total_visits),
            sub: "Member visits in range".to_string(),
            hint: "Tracks foot traffic volume",
        },
        KpiCard {
            title: "Unique Members",
            value: format_integer(kpis.unique_members),
            sub: "Distinct members".to_string(),
            hint: "Useful for retention signals",
        },
        KpiCard {
            title: "Avg Duration",
            value: format_minutes(kpis.avg_duration_min),
            sub: "Average visit length".to_string(),
            hint: "Longer can mean higher engagement",
        },
        KpiCard {
            title: "Total Spend",
            value: format_currency(kpis.total_spend_cad),
            sub: format!("Busiest hour: {}", format_hour(kpis.busiest_hour)),
            hint: "Revenue from add-ons, passes, etc.",
        },
    ]
}

/// One-line observations about the latest batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub usage: String,
    pub classes: String,
    pub traffic: String,
}

impl Insights {
    pub fn from_data(data: Option<&DashboardData>) -> Self {
        let leader = |rows: Option<&Vec<RankedRow>>| {
            rows.and_then(|rows| rows.first())
                .map(|row| row.name.clone())
                .filter(|name| !name.is_empty())
        };

        let usage = leader(data.map(|d| &d.top_equipment))
            .map(|name| format!("{} is the most used equipment.", name))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let classes = leader(data.map(|d| &d.top_classes))
            .map(|name| format!("{} is the most popular class.", name))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let traffic = data
            .and_then(|d| d.kpis.busiest_hour)
            .map(|hour| format!("Busiest hour is around {}:00.", hour))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Self { usage, classes, traffic }
    }

    /// `(badge, text)` pairs in display order.
    pub fn lines(&self) -> [(&'static str, &str); 3] {
        [
            ("Usage", self.usage.as_str()),
            ("Classes", self.classes.as_str()),
            ("Traffic", self.traffic.as_str()),
        ]
    }
}

/// Label of the API status chip.
pub fn api_status_label(has_error: bool) -> &'static str {
    if has_error { "API issue" } else { "API connected" }
}

/// Empty text of the top-classes table.
pub const NO_CLASSES_TEXT: &str = "No class activity for this range.";
/// Empty text of the top-equipment table.
pub const NO_EQUIPMENT_TEXT: &str = "No equipment usage for this range.";

/// Title of the error panel.
pub const ERROR_TITLE: &str = "Couldn't load data";
/// Backend start-up hint shown under a load error.
pub const BACKEND_HINT: &str = "Make sure your API is running: uvicorn main:app --reload";
pub const BACKEND_DOCS_URL: &str = "http://127.0.0.1:8000/docs";

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_cards_format_snapshot() {
        let kpis = KpiSnapshot {
            total_visits: Some(1234),
            unique_members: Some(310),
            avg_duration_min: Some(47.26),
            total_spend_cad: Some(Decimal::new(12_000, 0)),
            busiest_hour: Some(18),
        };

        let cards = kpi_cards(Some(&kpis));
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();

        assert_eq!(values[0], "1,234");
        assert_eq!(values[1], "310");
        assert_eq!(values[2], "47.3 min");
        assert!(values[3].contains("12,000"));
        assert_eq!(cards[3].sub, "Busiest hour: 18:00");
    }

    #[test]
    fn test_cards_without_snapshot_show_placeholders() {
        let cards = kpi_cards(None);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "—");
        assert_eq!(cards[2].value, "— min");
        assert_eq!(cards[3].value, "—");
        assert_eq!(cards[3].sub, "Busiest hour: —:00");
    }

    #[test]
    fn test_insights_from_leaders() {
        let data = DashboardData {
            kpis: KpiSnapshot {
                busiest_hour: Some(7),
                ..Default::default()
            },
            top_classes: vec![RankedRow { name: "Spin".to_string(), count: 42 }],
            top_equipment: vec![
                RankedRow { name: "Treadmill".to_string(), count: 97 },
                RankedRow { name: "Rower".to_string(), count: 12 },
            ],
            ..Default::default()
        };

        let insights = Insights::from_data(Some(&data));
        assert_eq!(insights.usage, "Treadmill is the most used equipment.");
        assert_eq!(insights.classes, "Spin is the most popular class.");
        assert_eq!(insights.traffic, "Busiest hour is around 7:00.");
    }

    #[test]
    fn test_insights_without_data() {
        let insights = Insights::from_data(None);
        assert!(insights.lines().iter().all(|(_, text)| *text == "—"));

        let empty = Insights::from_data(Some(&DashboardData::default()));
        assert_eq!(empty.classes, "—");
        assert_eq!(empty.traffic, "—");
    }

    #[test]
    fn test_api_status_label() {
        assert_eq!(api_status_label(false), "API connected");
        assert_eq!(api_status_label(true), "API issue");
    }
}
