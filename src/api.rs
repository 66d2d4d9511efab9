use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::config::FeedConfig;
use crate::feed::FeedList;
use crate::item::ContentItem;
use crate::metrics::Metrics;
use crate::render::{render_fragment, render_page, FeedRenderer, RenderedUnit};

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedList>,
    pub renderer: FeedRenderer,
}

impl AppState {
    pub fn new(feed: FeedList, renderer: FeedRenderer) -> Self {
        Self {
            feed: Arc::new(feed),
            renderer,
        }
    }

    /// Resolve config and feed from the environment (see `FeedConfig::load`).
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = FeedConfig::load()?;
        let feed = FeedList::load(cfg.feed_path.as_deref())?;
        Ok(Self::new(feed, FeedRenderer::new(cfg.tiers)))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/", get(page))
        .route("/feed", get(feed_tree))
        .route("/render", post(render_posted))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Full app as the binary serves it: feed routes plus `/metrics`.
pub fn app() -> anyhow::Result<Router> {
    let metrics = Metrics::init()?;
    let state = AppState::from_env()?;
    Ok(router(state).merge(metrics.router()))
}

async fn page(State(state): State<AppState>) -> Html<String> {
    let units = state.renderer.render_list(&state.feed);
    Html(render_page(&units))
}

async fn feed_tree(State(state): State<AppState>) -> Json<Vec<RenderedUnit>> {
    Json(state.renderer.render_list(&state.feed))
}

async fn render_posted(
    State(state): State<AppState>,
    Json(items): Json<Vec<ContentItem>>,
) -> Html<String> {
    let feed = FeedList::new(items);
    let units = state.renderer.render_list(&feed);
    Html(render_fragment(&units))
}
