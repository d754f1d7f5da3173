use serde::{Deserialize, Serialize};

use crate::TrendPoint;

/// One point of a line chart. Order is preserved as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
}

impl From<&TrendPoint> for ChartPoint {
    fn from(point: &TrendPoint) -> Self {
        Self {
            x: point.bucket.clone(),
            y: point.checkins as f64,
        }
    }
}

/// Maps the trend series into chart points without reordering.
pub fn trend_points(trend: &[TrendPoint]) -> Vec<ChartPoint> {
    trend.iter().map(ChartPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_points_keep_backend_order() {
        let trend = vec![
            TrendPoint { bucket: "2024-W23".to_string(), checkins: 40 },
            TrendPoint { bucket: "2024-W21".to_string(), checkins: 12 },
        ];

        let points = trend_points(&trend);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, "2024-W23");
        assert_eq!(points[1].y, 12.0);
    }
}
