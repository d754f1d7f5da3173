//! Common transport-layer types shared between the browser dashboard and the CLI.
//! These structs mirror the gym analytics API payloads so every consumer can
//! deserialize responses without duplicating shapes.

pub mod chart;
pub mod format;
pub mod range;
pub mod table;

pub use chart::ChartPoint;
pub use range::{DEFAULT_RANGE_DAYS, DateRange};
pub use table::{CellFormatter, CellValue, TableColumn, TableRow};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Endpoint paths, relative to the configured base address and prefix.
pub mod endpoints {
    pub const KPIS: &str = "/kpis";
    pub const CHECKIN_TREND: &str = "/trend/checkins";
    pub const TOP_CLASSES: &str = "/top/classes";
    pub const TOP_EQUIPMENT: &str = "/top/equipment";
    pub const HEALTH: &str = "/health";
}

/// Number of rows requested from the ranking endpoints.
pub const DEFAULT_RANK_LIMIT: u32 = 8;

/// List-response wrapper used by the trend and ranking endpoints.
///
/// A missing or `null` `data` field decodes as an empty list; every other
/// shape mismatch is a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ===================== KPIs =====================

/// Headline metrics for a date range. Every field may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KpiSnapshot {
    #[serde(default)]
    pub total_visits: Option<i64>,
    #[serde(default)]
    pub unique_members: Option<i64>,
    #[serde(default)]
    pub avg_duration_min: Option<f64>,
    #[serde(default)]
    pub total_spend_cad: Option<Decimal>,
    /// Hour of day (0-23) with the most check-ins.
    #[serde(default)]
    pub busiest_hour: Option<u8>,
}

// ===================== Trend =====================

/// Trend bucket granularity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Day,
    Week,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Day => "day",
            Frequency::Week => "week",
        }
    }

    /// Label used by selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Day => "Daily",
            Frequency::Week => "Weekly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Frequency::Day),
            "week" => Ok(Frequency::Week),
            other => Err(format!("Unknown trend frequency: {}", other)),
        }
    }
}

/// Check-in count for one day or week bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub bucket: String,
    pub checkins: i64,
}

// ===================== Rankings =====================

/// Row of the `/top/classes` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassSessions {
    pub class_name: String,
    pub sessions: i64,
}

/// Row of the `/top/equipment` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentUses {
    pub equipment: String,
    pub uses: i64,
}

/// Ranked name/count pair shared by both ranking tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedRow {
    pub name: String,
    pub count: i64,
}

impl From<ClassSessions> for RankedRow {
    fn from(row: ClassSessions) -> Self {
        Self {
            name: row.class_name,
            count: row.sessions,
        }
    }
}

impl From<EquipmentUses> for RankedRow {
    fn from(row: EquipmentUses) -> Self {
        Self {
            name: row.equipment,
            count: row.uses,
        }
    }
}

impl TableRow for RankedRow {
    fn cell(&self, key: &str) -> Option<CellValue> {
        match key {
            "name" => Some(CellValue::Text(self.name.clone())),
            "count" => Some(CellValue::Integer(self.count)),
            _ => None,
        }
    }
}

// ===================== Health =====================

/// Response of the `/health` probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
