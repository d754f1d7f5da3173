use futures::try_join;
use tracing::{debug, instrument};

use crate::api::ApiClient;
use crate::error::Result;
use crate::state::{BatchRequest, DashboardData};
use crate::transport::Transport;

/// Issues the four dashboard requests concurrently and joins them.
///
/// All-or-nothing: the first failing request fails the batch and the other
/// payloads are dropped.
#[instrument(skip(client), fields(seq = request.seq))]
pub async fn load_dashboard<T: Transport>(
    client: &ApiClient<T>,
    request: &BatchRequest,
) -> Result<DashboardData> {
    debug!("Fetching KPIs, trend and rankings");

    let (kpis, trend, top_classes, top_equipment) = try_join!(
        client.kpis(&request.range),
        client.checkin_trend(&request.range, request.frequency),
        client.top_classes(&request.range, request.limit),
        client.top_equipment(&request.range, request.limit),
    )?;

    Ok(DashboardData {
        kpis,
        trend,
        top_classes,
        top_equipment,
    })
}
