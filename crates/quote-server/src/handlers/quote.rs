//! Random quote handler

use crate::config::ServiceVariant;
use crate::state::AppState;
use axum::{extract::State, Json};
use quote_types::RandomQuote;
use tracing::debug;

pub async fn random(State(state): State<AppState>) -> Json<RandomQuote> {
    let resolved = state.resolver.resolve().await;
    let picked = state.selector.pick(&resolved.quotes);
    debug!("Serving quote {} from {}", picked.id, resolved.source);

    let author = match state.config.variant {
        ServiceVariant::Persistent => Some(picked.author.clone()),
        ServiceVariant::Static => None,
    };

    Json(RandomQuote {
        quote: picked.text.clone(),
        author,
    })
}
