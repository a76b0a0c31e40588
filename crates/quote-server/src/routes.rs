use crate::config::ServiceVariant;
use crate::handlers;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue},
    routing::{any, get, MethodRouter},
    Router,
};
use std::convert::Infallible;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const QUOTE_METHODS: &str = "GET, OPTIONS";
const QUOTES_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

pub fn create_router(state: AppState) -> Result<Router> {
    let origin = HeaderValue::from_str(&state.config.cors_origin)
        .context("Invalid CORS_ALLOW_ORIGIN header value")?;

    // Every method except OPTIONS serves a quote
    let quote_route = any(handlers::quote::random).options(handlers::preflight);

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/quote", with_cors(quote_route, &origin, QUOTE_METHODS));

    if state.config.variant == ServiceVariant::Persistent {
        let quotes_route = get(handlers::quotes::list)
            .head(handlers::quotes::method_not_allowed)
            .post(handlers::quotes::create)
            .options(handlers::preflight)
            .fallback(handlers::quotes::method_not_allowed);
        app = app.route("/api/quotes", with_cors(quotes_route, &origin, QUOTES_METHODS));
    }

    Ok(app.layer(TraceLayer::new_for_http()).with_state(state))
}

/// Applies to every method of the route, including the 405 fallback
fn with_cors(
    route: MethodRouter<AppState>,
    origin: &HeaderValue,
    methods: &'static str,
) -> MethodRouter<AppState> {
    route
        .layer::<_, Infallible>(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            origin.clone(),
        ))
        .layer::<_, Infallible>(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(methods),
        ))
        .layer::<_, Infallible>(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::resolver::tests::{remote_rows, FakeStore, ListBehavior};
    use crate::services::{fallback_quotes, RandomSelector};
    use crate::storage::QuoteStore;
    use axum::body::{Body, Bytes};
    use axum::http::{HeaderMap, Method, Request, StatusCode};
    use quote_types::{NewQuote, Quote, RandomQuote};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned()).unwrap()
    }

    fn app(config: Config, store: Option<Arc<FakeStore>>) -> Router {
        let store = store.map(|s| s as Arc<dyn QuoteStore>);
        let state = AppState::with_store(config, store, RandomSelector::seeded(1));
        create_router(state).unwrap()
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: &str,
    ) -> (StatusCode, HeaderMap, Bytes) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body)
    }

    fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
        headers.get(name).unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn test_random_quote_from_fallback() {
        let app = app(config(&[]), None);
        let fallback = fallback_quotes(ServiceVariant::Persistent);

        for _ in 0..20 {
            let (status, headers, body) = send(&app, Method::GET, "/api/quote", "").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(header_str(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

            let quote: RandomQuote = serde_json::from_slice(&body).unwrap();
            assert!(fallback.contains_text(&quote.quote));
            assert!(quote.author.is_some_and(|a| !a.is_empty()));
        }
    }

    #[tokio::test]
    async fn test_random_quote_from_remote() {
        let store = Arc::new(FakeStore::new(ListBehavior::Rows(remote_rows())));
        let app = app(config(&[]), Some(store));

        let (status, _, body) = send(&app, Method::GET, "/api/quote", "").await;
        assert_eq!(status, StatusCode::OK);
        let quote: RandomQuote = serde_json::from_slice(&body).unwrap();
        assert_eq!(quote.quote, "remote one");
        assert_eq!(quote.author.as_deref(), Some("r"));
    }

    #[tokio::test]
    async fn test_remote_without_data_matches_unconfigured() {
        for behavior in [ListBehavior::NoData, ListBehavior::Rows(vec![])] {
            let app = app(config(&[]), Some(Arc::new(FakeStore::new(behavior))));
            let (status, _, body) = send(&app, Method::GET, "/api/quotes", "").await;
            assert_eq!(status, StatusCode::OK);

            let quotes: Vec<Quote> = serde_json::from_slice(&body).unwrap();
            assert_eq!(
                quotes.as_slice(),
                fallback_quotes(ServiceVariant::Persistent).as_slice()
            );
        }
    }

    #[tokio::test]
    async fn test_preflight() {
        let app = app(config(&[]), None);

        let (status, headers, body) = send(&app, Method::OPTIONS, "/api/quote", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
            "GET, OPTIONS"
        );
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
            "Content-Type"
        );

        let (status, headers, body) = send(&app, Method::OPTIONS, "/api/quotes", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
            "GET, POST, PATCH, DELETE, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_create_without_remote_echoes() {
        let app = app(config(&[]), None);

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/api/quotes",
            r#"{"text":"hi","author":"me"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let echoed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed["text"], "hi");
        assert_eq!(echoed["author"], "me");

        // Fallback list is untouched
        let (_, _, body) = send(&app, Method::GET, "/api/quotes", "").await;
        let quotes: Vec<Quote> = serde_json::from_slice(&body).unwrap();
        assert_eq!(quotes.len(), 10);
        assert!(quotes.iter().all(|q| q.text != "hi"));
    }

    #[tokio::test]
    async fn test_create_forwards_to_remote() {
        let store = Arc::new(FakeStore::new(ListBehavior::NoData));
        let app = app(config(&[]), Some(store.clone()));

        let (status, _, _) = send(
            &app,
            Method::POST,
            "/api/quotes",
            r#"{"id":99,"text":"Mindset is everything.","author":"GenZ Wisdom"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            store.created.lock().unwrap().as_slice(),
            &[NewQuote {
                text: "Mindset is everything.".to_string(),
                author: "GenZ Wisdom".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_create_store_failure_is_server_error() {
        let store = Arc::new(FakeStore::new(ListBehavior::NoData).failing_create());
        let app = app(config(&[]), Some(store));

        let (status, _, _) = send(&app, Method::POST, "/api/quotes", r#"{"text":"hi"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_accepts_nulls_and_trailing_data() {
        let app = app(config(&[]), None);

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/api/quotes",
            r#"{"text":"hi","author":null}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let echoed: Quote = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed, Quote::new(0, "hi", ""));

        let (status, _, body) = send(&app, Method::POST, "/api/quotes", "null").await;
        assert_eq!(status, StatusCode::OK);
        let echoed: Quote = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed, Quote::default());

        let (status, _, body) =
            send(&app, Method::POST, "/api/quotes", "{\"text\":\"hi\"}\n{}").await;
        assert_eq!(status, StatusCode::OK);
        let echoed: Quote = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed.text, "hi");
    }

    #[tokio::test]
    async fn test_random_quote_any_method() {
        let app = app(config(&[]), None);
        let fallback = fallback_quotes(ServiceVariant::Persistent);

        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let (status, headers, body) = send(&app, method, "/api/quote", "").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                header_str(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
                "GET, OPTIONS"
            );
            let quote: RandomQuote = serde_json::from_slice(&body).unwrap();
            assert!(fallback.contains_text(&quote.quote));
        }
    }

    #[tokio::test]
    async fn test_create_invalid_json() {
        let app = app(config(&[]), None);

        let (status, headers, body) = send(&app, Method::POST, "/api/quotes", r#"{"text":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(&body[..], b"Invalid JSON");
        assert_eq!(header_str(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }

    #[tokio::test]
    async fn test_other_methods_not_allowed() {
        let app = app(config(&[]), None);

        for method in [Method::DELETE, Method::PATCH, Method::PUT, Method::HEAD] {
            let (status, headers, _) = send(&app, method, "/api/quotes", "").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                header_str(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
                "GET, POST, PATCH, DELETE, OPTIONS"
            );
        }
    }

    #[tokio::test]
    async fn test_static_variant() {
        let app = app(config(&[("QUOTE_VARIANT", "static")]), None);
        let fallback = fallback_quotes(ServiceVariant::Static);

        let (status, _, body) = send(&app, Method::GET, "/api/quote", "").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(value.get("author").is_none());
        assert!(fallback.contains_text(value["quote"].as_str().unwrap()));

        let (status, _, _) = send(&app, Method::GET, "/api/quotes", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_custom_cors_origin() {
        let app = app(config(&[("CORS_ALLOW_ORIGIN", "https://quotes.example")]), None);

        let (_, headers, _) = send(&app, Method::GET, "/api/quote", "").await;
        assert_eq!(
            header_str(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            "https://quotes.example"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(config(&[]), None);

        let (status, _, body) = send(&app, Method::GET, "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["variant"], "persistent");
        assert_eq!(value["remote_configured"], false);
    }
}
