//! Load-cycle state for the dashboard container.
//!
//! The state is framework independent: the browser container keeps it behind a
//! `RefCell` and the CLI drives it directly. Each load is tagged with a batch
//! sequence number and only the newest batch may complete.

use chrono::{DateTime, Local, NaiveDate};
use common::format::parse_iso_date;
use common::{DEFAULT_RANK_LIMIT, DateRange, Frequency, KpiSnapshot, RankedRow, TrendPoint};
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// API fetch state enum
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// User-selected inputs of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub range: DateRange,
    pub frequency: Frequency,
}

impl Filters {
    /// Trailing 30-day range ending `today`, daily buckets.
    pub fn defaults_for(today: NaiveDate) -> Self {
        Self {
            range: DateRange::trailing(today),
            frequency: Frequency::Day,
        }
    }
}

/// Everything one batch needs, frozen at the moment the batch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    pub seq: u64,
    pub range: DateRange,
    pub frequency: Frequency,
    pub limit: u32,
}

/// The four payloads of one successful batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub kpis: KpiSnapshot,
    pub trend: Vec<TrendPoint>,
    pub top_classes: Vec<RankedRow>,
    pub top_equipment: Vec<RankedRow>,
}

/// Outcome of [`DashboardState::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer batch was started after this one; its result was dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    defaults: Filters,
    filters: Filters,
    rank_limit: u32,
    fetch: FetchState<DashboardData>,
    last_updated: Option<DateTime<Local>>,
    last_seq: u64,
    pending_seq: Option<u64>,
}

impl DashboardState {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_rank_limit(today, DEFAULT_RANK_LIMIT)
    }

    pub fn with_rank_limit(today: NaiveDate, rank_limit: u32) -> Self {
        let defaults = Filters::defaults_for(today);
        Self {
            defaults,
            filters: defaults,
            rank_limit,
            fetch: FetchState::NotStarted,
            last_updated: None,
            last_seq: 0,
            pending_seq: None,
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn defaults(&self) -> &Filters {
        &self.defaults
    }

    pub fn fetch(&self) -> &FetchState<DashboardData> {
        &self.fetch
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn error(&self) -> Option<&String> {
        self.fetch.error()
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.fetch.data()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn set_start(&mut self, start: NaiveDate) {
        self.filters.range.start = start;
    }

    pub fn set_end(&mut self, end: NaiveDate) {
        self.filters.range.end = end;
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.filters.frequency = frequency;
    }

    /// Applies a date-input value to the start date. Unparsable input leaves
    /// the current value untouched.
    pub fn set_start_input(&mut self, value: &str) -> bool {
        match parse_iso_date(value) {
            Ok(date) => {
                self.set_start(date);
                true
            }
            Err(e) => {
                warn!("Ignoring start date input {:?}: {}", value, e);
                false
            }
        }
    }

    /// Applies a date-input value to the end date. Unparsable input leaves
    /// the current value untouched.
    pub fn set_end_input(&mut self, value: &str) -> bool {
        match parse_iso_date(value) {
            Ok(date) => {
                self.set_end(date);
                true
            }
            Err(e) => {
                warn!("Ignoring end date input {:?}: {}", value, e);
                false
            }
        }
    }

    /// Starts a new batch: clears any error, enters Loading and supersedes
    /// every batch still in flight.
    pub fn begin_load(&mut self) -> BatchRequest {
        self.last_seq += 1;
        self.pending_seq = Some(self.last_seq);
        self.fetch = FetchState::Loading;

        let request = BatchRequest {
            seq: self.last_seq,
            range: self.filters.range,
            frequency: self.filters.frequency,
            limit: self.rank_limit,
        };
        debug!(?request, "Dashboard batch started");
        request
    }

    /// Restores the default range and frequency, then starts a new batch.
    pub fn reset(&mut self) -> BatchRequest {
        info!("Resetting dashboard filters to defaults");
        self.filters = self.defaults;
        self.begin_load()
    }

    /// Records the outcome of batch `seq`.
    ///
    /// Results of anything but the pending batch are discarded. A failed batch
    /// discards every payload and keeps only the error message.
    pub fn complete(
        &mut self,
        seq: u64,
        result: Result<DashboardData, ApiError>,
        completed_at: DateTime<Local>,
    ) -> Completion {
        if self.pending_seq != Some(seq) {
            debug!(seq, pending = ?self.pending_seq, "Discarding result of superseded batch");
            return Completion::Superseded;
        }
        self.pending_seq = None;

        match result {
            Ok(data) => {
                info!(seq, "Dashboard batch loaded");
                self.fetch = FetchState::Success(data);
                self.last_updated = Some(completed_at);
            }
            Err(err) => {
                warn!(seq, "Dashboard batch failed: {}", err);
                self.fetch = FetchState::Error(err.to_string());
            }
        }
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn sample_data() -> DashboardData {
        DashboardData {
            kpis: KpiSnapshot {
                total_visits: Some(1234),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_are_thirty_day_daily() {
        let state = DashboardState::new(today());
        let filters = state.filters();
        assert_eq!(filters.range.start_iso(), "2024-05-31");
        assert_eq!(filters.range.end_iso(), "2024-06-30");
        assert_eq!(filters.frequency, Frequency::Day);
        assert_eq!(state.fetch(), &FetchState::NotStarted);
    }

    #[test]
    fn test_begin_load_freezes_filters() {
        let mut state = DashboardState::new(today());
        state.set_frequency(Frequency::Week);

        let request = state.begin_load();
        state.set_frequency(Frequency::Day);

        assert_eq!(request.seq, 1);
        assert_eq!(request.frequency, Frequency::Week);
        assert_eq!(request.limit, DEFAULT_RANK_LIMIT);
        assert!(state.is_loading());
    }

    #[test]
    fn test_success_records_timestamp() {
        let mut state = DashboardState::new(today());
        let request = state.begin_load();
        let now = Local::now();

        let completion = state.complete(request.seq, Ok(sample_data()), now);

        assert_eq!(completion, Completion::Applied);
        assert!(!state.is_loading());
        assert_eq!(state.data().and_then(|d| d.kpis.total_visits), Some(1234));
        assert_eq!(state.last_updated(), Some(now));
    }

    #[test]
    fn test_failure_discards_payloads() {
        let mut state = DashboardState::new(today());
        let first = state.begin_load();
        state.complete(first.seq, Ok(sample_data()), Local::now());

        let second = state.begin_load();
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        state.complete(second.seq, Err(err), Local::now());

        assert_eq!(state.error().map(String::as_str), Some("API error 500: boom"));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_new_batch_clears_previous_error() {
        let mut state = DashboardState::new(today());
        let first = state.begin_load();
        state.complete(first.seq, Err(ApiError::Network("down".to_string())), Local::now());
        assert!(state.fetch().is_error());

        state.begin_load();
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_superseded_batch_is_discarded() {
        let mut state = DashboardState::new(today());
        let stale = state.begin_load();
        let fresh = state.begin_load();

        let fresh_data = sample_data();
        assert_eq!(state.complete(fresh.seq, Ok(fresh_data.clone()), Local::now()), Completion::Applied);
        assert_eq!(
            state.complete(stale.seq, Err(ApiError::Network("late".to_string())), Local::now()),
            Completion::Superseded
        );

        assert_eq!(state.data(), Some(&fresh_data));
    }

    #[test]
    fn test_stale_success_does_not_end_newer_loading() {
        let mut state = DashboardState::new(today());
        let stale = state.begin_load();
        let _fresh = state.begin_load();

        assert_eq!(state.complete(stale.seq, Ok(sample_data()), Local::now()), Completion::Superseded);
        assert!(state.is_loading());
        assert!(state.last_updated().is_none());
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let mut state = DashboardState::new(today());
        let request = state.begin_load();
        state.complete(request.seq, Ok(sample_data()), Local::now());

        let again = state.complete(request.seq, Err(ApiError::Network("late".to_string())), Local::now());
        assert_eq!(again, Completion::Superseded);
        assert!(state.fetch().is_success());
    }

    #[test]
    fn test_reset_restores_defaults_and_reloads() {
        let mut state = DashboardState::new(today());
        state.set_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        state.set_end(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        state.set_frequency(Frequency::Week);

        let request = state.reset();

        assert_eq!(state.filters(), state.defaults());
        assert_eq!(request.range, DateRange::trailing(today()));
        assert_eq!(request.frequency, Frequency::Day);
        assert!(state.is_loading());
    }

    #[test]
    fn test_date_inputs_reject_garbage() {
        let mut state = DashboardState::new(today());
        assert!(state.set_start_input("2024-06-01"));
        assert!(!state.set_end_input(""));

        assert_eq!(state.filters().range.start_iso(), "2024-06-01");
        assert_eq!(state.filters().range.end_iso(), "2024-06-30");
    }

    #[test]
    fn test_start_after_end_is_allowed() {
        let mut state = DashboardState::new(today());
        assert!(state.set_start_input("2024-07-15"));
        let request = state.begin_load();
        assert!(request.range.start > request.range.end);
    }
}
