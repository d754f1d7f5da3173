use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use client::{ApiClient, DashboardState, load_dashboard};
use tracing::{debug, info, trace};

use crate::cli::SnapshotArgs;
use crate::config::CliSettings;
use crate::http::ReqwestTransport;
use crate::report::render_dashboard;

/// Runs one load cycle and prints the dashboard.
pub async fn snapshot(settings: &CliSettings, args: &SnapshotArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let state = run_snapshot(settings, args, today).await?;

    print!("{}", render_dashboard(&state));

    if let Some(error) = state.error() {
        bail!("Dashboard load failed: {}", error);
    }
    Ok(())
}

/// Loads the dashboard the way the browser does on mount, with the flags
/// applied on top of the defaults for `today`.
pub async fn run_snapshot(
    settings: &CliSettings,
    args: &SnapshotArgs,
    today: NaiveDate,
) -> Result<DashboardState> {
    trace!("Entering run_snapshot");
    let rank_limit = args.limit.unwrap_or(settings.rank_limit);
    let mut state = DashboardState::with_rank_limit(today, rank_limit);

    if let Some(start) = args.start {
        state.set_start(start);
    }
    if let Some(end) = args.end {
        state.set_end(end);
    }
    state.set_frequency(args.freq);

    let transport = ReqwestTransport::new(settings.request_timeout())?;
    let client = ApiClient::new(settings.api_config(), transport);
    debug!(config = ?client.config(), "API client ready");

    let request = state.begin_load();
    info!(
        "Loading dashboard for {} ({})",
        request.range,
        request.frequency.label()
    );
    let result = load_dashboard(&client, &request).await;
    state.complete(request.seq, result, Local::now());

    Ok(state)
}
