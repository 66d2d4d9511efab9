use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::tier::DecorationTier;

pub const UNITS_RENDERED: &str = "feed_units_rendered_total";
pub const ITEMS_LOADED: &str = "feed_items_loaded";

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Clone)]
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder once per process; later calls reuse it.
    pub fn init() -> Result<Self> {
        let handle = HANDLE.get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| anyhow!("prometheus: install recorder: {e}"))?;
            describe_counter!(UNITS_RENDERED, "Display units rendered, by decoration tier.");
            describe_gauge!(ITEMS_LOADED, "Items in the most recently loaded feed.");
            Ok::<_, anyhow::Error>(handle)
        })?;
        Ok(Self {
            handle: handle.clone(),
        })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub(crate) fn record_unit_rendered(tier: DecorationTier) {
    counter!(UNITS_RENDERED, "tier" => tier.as_str()).increment(1);
}

pub(crate) fn record_feed_loaded(items: usize) {
    gauge!(ITEMS_LOADED).set(items as f64);
}
