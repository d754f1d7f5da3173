pub mod dashboard;
pub mod stat_card;
pub mod top_table;
pub mod trend_chart;
