//! Plain-text rendering of the dashboard for the terminal.

use std::fmt::{self, Write};

use client::view::{
    BACKEND_DOCS_URL, BACKEND_HINT, ERROR_TITLE, NO_CLASSES_TEXT, NO_EQUIPMENT_TEXT, api_status_label,
};
use client::{DashboardState, Insights, kpi_cards};
use common::table::{class_columns, equipment_columns};
use common::chart::trend_points;
use common::{ChartPoint, TableColumn, TableRow};

/// Widest bar drawn for the largest trend bucket.
const BAR_WIDTH: usize = 40;

pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_dashboard(&mut out, state);
    out
}

pub fn write_dashboard<W: Write>(out: &mut W, state: &DashboardState) -> fmt::Result {
    write_header(out, state)?;

    if let Some(error) = state.error() {
        writeln!(out)?;
        return write_error_panel(out, error);
    }

    let data = state.data();

    writeln!(out)?;
    for card in kpi_cards(data.map(|d| &d.kpis)) {
        writeln!(out, "{:<16}{:>14}  {}", card.title, card.value, card.sub)?;
    }

    writeln!(out)?;
    let frequency = state.filters().frequency;
    let points = data.map(|d| trend_points(&d.trend)).unwrap_or_default();
    writeln!(out, "Check-ins ({})", frequency.label())?;
    write_trend(out, &points)?;

    let (classes, equipment) = match data {
        Some(d) => (d.top_classes.as_slice(), d.top_equipment.as_slice()),
        None => (&[][..], &[][..]),
    };
    writeln!(out)?;
    write_table(out, "Top Classes", classes, &class_columns(), NO_CLASSES_TEXT)?;
    writeln!(out)?;
    write_table(out, "Top Equipment", equipment, &equipment_columns(), NO_EQUIPMENT_TEXT)?;

    writeln!(out)?;
    writeln!(out, "Insights")?;
    for (badge, text) in Insights::from_data(data).lines() {
        writeln!(out, "  [{}] {}", badge, text)?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, state: &DashboardState) -> fmt::Result {
    writeln!(out, "Gym Ops Dashboard")?;
    write!(
        out,
        "[{}] [{}]",
        api_status_label(state.error().is_some()),
        state.filters().range
    )?;
    if let Some(updated) = state.last_updated() {
        write!(out, " [Updated {}]", updated.format("%H:%M:%S"))?;
    }
    writeln!(out)
}

fn write_error_panel<W: Write>(out: &mut W, error: &str) -> fmt::Result {
    writeln!(out, "{}", ERROR_TITLE)?;
    writeln!(out, "  {}", error)?;
    writeln!(out, "  {}", BACKEND_HINT)?;
    writeln!(out, "  Docs: {}", BACKEND_DOCS_URL)
}

fn write_trend<W: Write>(out: &mut W, points: &[ChartPoint]) -> fmt::Result {
    if points.is_empty() {
        return writeln!(out, "  No data for this range.");
    }

    let max = points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    for point in points {
        let width = if max > 0.0 {
            ((point.y / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(out, "  {:<12}{:>8}  {}", point.x, point.y, "#".repeat(width))?;
    }
    Ok(())
}

fn write_table<W: Write, R: TableRow>(
    out: &mut W,
    title: &str,
    rows: &[R],
    columns: &[TableColumn],
    empty_text: &str,
) -> fmt::Result {
    writeln!(out, "{}", title)?;
    if rows.is_empty() {
        return writeln!(out, "  {}", empty_text);
    }

    let rendered: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| c.render_cell(row)).collect())
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rendered
                .iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(column.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, columns.iter().map(|c| c.label.as_str()), &widths)?;
    for cells in &rendered {
        write_row(out, cells.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn write_row<'a, W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    write!(out, " ")?;
    for (cell, width) in cells.zip(widths) {
        write!(out, " {:<width$}", cell, width = width)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeZone};
    use client::{ApiError, DashboardData};
    use common::{KpiSnapshot, RankedRow, TrendPoint};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(today());
        let request = state.begin_load();
        let data = DashboardData {
            kpis: KpiSnapshot {
                total_visits: Some(1234),
                busiest_hour: Some(18),
                ..Default::default()
            },
            trend: vec![
                TrendPoint { bucket: "2024-06-01".to_string(), checkins: 10 },
                TrendPoint { bucket: "2024-06-02".to_string(), checkins: 5 },
            ],
            top_classes: vec![RankedRow { name: "Spin".to_string(), count: 42 }],
            top_equipment: vec![],
        };
        let at = Local.with_ymd_and_hms(2024, 6, 30, 9, 15, 0).unwrap();
        state.complete(request.seq, Ok(data), at);
        state
    }

    #[test]
    fn test_render_loaded_dashboard() {
        let text = render_dashboard(&loaded_state());

        assert!(text.contains("[API connected] [2024-05-31 → 2024-06-30] [Updated 09:15:00]"));
        assert!(text.contains("1,234"));
        assert!(text.contains("Busiest hour: 18:00"));
        assert!(text.contains("Check-ins (Daily)"));
        assert!(text.contains("Spin"));
        assert!(text.contains("[Classes] Spin is the most popular class."));
        assert!(text.contains("[Usage] —"));
    }

    #[test]
    fn test_trend_bars_scale_to_largest_bucket() {
        let text = render_dashboard(&loaded_state());
        let bar = |bucket: &str| {
            let line = text.lines().find(|l| l.contains(bucket)).unwrap();
            line.matches('#').count()
        };

        assert_eq!(bar("2024-06-01"), BAR_WIDTH);
        assert_eq!(bar("2024-06-02"), BAR_WIDTH / 2);
    }

    #[test]
    fn test_empty_ranking_shows_empty_text() {
        let text = render_dashboard(&loaded_state());
        let equipment = text.split("Top Equipment").nth(1).unwrap();
        assert!(equipment.starts_with("\n  No equipment usage for this range.\n"));
    }

    #[test]
    fn test_failed_batch_renders_error_panel_only() {
        let mut state = DashboardState::new(today());
        let request = state.begin_load();
        state.complete(
            request.seq,
            Err(ApiError::Status {
                status: 502,
                message: "Bad Gateway".to_string(),
            }),
            Local::now(),
        );

        let text = render_dashboard(&state);
        assert!(text.contains("[API issue]"));
        assert!(text.contains("Couldn't load data"));
        assert!(text.contains("API error 502: Bad Gateway"));
        assert!(text.contains("uvicorn main:app --reload"));
        assert!(!text.contains("Total Visits"));
        assert!(!text.contains("Insights"));
    }

    #[test]
    fn test_unloaded_dashboard_shows_placeholders() {
        let text = render_dashboard(&DashboardState::new(today()));
        assert!(text.contains("No data for this range."));
        assert!(text.contains("— min"));
        assert!(!text.contains("Updated"));
    }
}
