use common::{
    ClassSessions, DataEnvelope, DateRange, EquipmentUses, Frequency, HealthStatus, KpiSnapshot,
    RankedRow, TrendPoint, endpoints,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, trace};

use crate::error::{ApiError, Result};
use crate::query::{QueryParams, build_url};
use crate::transport::Transport;

/// Where the analytics API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme and host, e.g. `http://127.0.0.1:8000`. Empty for same-origin requests.
    pub base_url: String,
    /// Path prefix placed before every endpoint, e.g. `/api` behind a dev proxy.
    pub path_prefix: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, path_prefix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path_prefix: path_prefix.into(),
        }
    }

    /// Same-origin requests under `/api`.
    pub fn same_origin() -> Self {
        Self::new("", "/api")
    }

    pub fn url(&self, path: &str, params: &QueryParams) -> String {
        build_url(&self.base_url, &self.path_prefix, path, params)
    }
}

/// JSON client for the analytics API.
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Non-2xx responses become [`ApiError::Status`]; no retry is attempted.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> Result<R> {
        let url = self.config.url(path, params);
        debug!("GET request to: {}", url);

        let response = self.transport.get(&url).await.inspect_err(|e| {
            error!("GET {} - {}", path, e);
        })?;

        if !response.is_success() {
            let err = ApiError::from_response(&response);
            error!("GET {} - {}", path, err);
            return Err(err);
        }

        trace!("GET {} - Response received, parsing JSON", path);
        serde_json::from_str(&response.body).map_err(|e| {
            let err = ApiError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            };
            error!("GET {} - {}", path, err);
            err
        })
    }

    /// Decodes a `{ data: [...] }` response. A `null` body or `null` data is an empty list.
    async fn get_list<R: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> Result<Vec<R>> {
        let envelope: Option<DataEnvelope<R>> = self.get_json(path, params).await?;
        Ok(envelope.map(|e| e.data).unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn kpis(&self, range: &DateRange) -> Result<KpiSnapshot> {
        let kpis: Option<KpiSnapshot> = self.get_json(endpoints::KPIS, &range_params(range)).await?;
        info!("Fetched KPI snapshot");
        Ok(kpis.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn checkin_trend(&self, range: &DateRange, frequency: Frequency) -> Result<Vec<TrendPoint>> {
        let params = range_params(range).with("freq", frequency);
        let trend: Vec<TrendPoint> = self.get_list(endpoints::CHECKIN_TREND, &params).await?;
        info!("Fetched {} trend buckets", trend.len());
        Ok(trend)
    }

    #[instrument(skip(self))]
    pub async fn top_classes(&self, range: &DateRange, limit: u32) -> Result<Vec<RankedRow>> {
        let params = range_params(range).with("limit", limit);
        let classes: Vec<ClassSessions> = self.get_list(endpoints::TOP_CLASSES, &params).await?;
        info!("Fetched {} top classes", classes.len());
        Ok(classes.into_iter().map(RankedRow::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn top_equipment(&self, range: &DateRange, limit: u32) -> Result<Vec<RankedRow>> {
        let params = range_params(range).with("limit", limit);
        let equipment: Vec<EquipmentUses> = self.get_list(endpoints::TOP_EQUIPMENT, &params).await?;
        info!("Fetched {} top equipment rows", equipment.len());
        Ok(equipment.into_iter().map(RankedRow::from).collect())
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json(endpoints::HEALTH, &QueryParams::new()).await
    }
}

fn range_params(range: &DateRange) -> QueryParams {
    QueryParams::new()
        .with("start", range.start_iso())
        .with("end", range.end_iso())
}
