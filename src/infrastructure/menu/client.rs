//! Menu API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{MenuItemResponse, MenuTypeResponse};
use crate::domain::entities::{MenuCategory, MenuItem};
use crate::domain::errors::CatalogLoadError;
use crate::domain::ports::MenuSourcePort;
use crate::infrastructure::config::MenuConfig;

/// Default menu API host.
pub const DEFAULT_MENU_HOST: &str = "http://localhost:5080";
/// Default path of the items endpoint.
pub const DEFAULT_ITEMS_PATH: &str = "/menuitems";
/// Default path of the categories endpoint.
pub const DEFAULT_CATEGORIES_PATH: &str = "/menutypes";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("orderpad/", env!("CARGO_PKG_VERSION"));

/// Reads the menu from the two menu API endpoints.
pub struct HttpMenuClient {
    client: Client,
    base_url: String,
    items_path: String,
    categories_path: String,
}

impl HttpMenuClient {
    /// Creates new client against the default host.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, CatalogLoadError> {
        Self::with_base_url(DEFAULT_MENU_HOST, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogLoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                CatalogLoadError::unexpected(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates client from the `[menu]` configuration section.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn from_config(config: &MenuConfig) -> Result<Self, CatalogLoadError> {
        Ok(
            Self::with_base_url(&config.host, Duration::from_secs(config.timeout_secs))?
                .with_paths(&config.items_path, &config.categories_path),
        )
    }

    /// Wraps an already configured HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            items_path: DEFAULT_ITEMS_PATH.to_string(),
            categories_path: DEFAULT_CATEGORIES_PATH.to_string(),
        }
    }

    /// Overrides the endpoint paths.
    #[must_use]
    pub fn with_paths(mut self, items_path: &str, categories_path: &str) -> Self {
        self.items_path = items_path.to_string();
        self.categories_path = categories_path.to_string();
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogLoadError> {
        let url = format!("{}{path}", self.base_url);

        debug!(url = %url, "Fetching menu records");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, url = %url, "Failed to reach menu API");
            if e.is_timeout() {
                CatalogLoadError::network(path, "request timed out")
            } else if e.is_connect() {
                CatalogLoadError::network(path, "failed to connect to menu API")
            } else {
                CatalogLoadError::network(path, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url = %url, "Menu API returned an error status");
            return Err(CatalogLoadError::status(path, status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, url = %url, "Failed to parse menu response");
            CatalogLoadError::parse(path, e.to_string())
        })
    }
}

#[async_trait]
impl MenuSourcePort for HttpMenuClient {
    async fn fetch_items(&self) -> Result<Vec<MenuItem>, CatalogLoadError> {
        let items: Vec<MenuItemResponse> = self.get_json(&self.items_path).await?;
        Ok(items.into_iter().map(MenuItem::from).collect())
    }

    async fn fetch_categories(&self) -> Result<Vec<MenuCategory>, CatalogLoadError> {
        let categories: Vec<MenuTypeResponse> = self.get_json(&self.categories_path).await?;
        Ok(categories.into_iter().map(MenuCategory::from).collect())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::LoadMenuUseCase;
    use crate::domain::errors::LookupError;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    async fn spawn_menu_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}")
    }

    fn local_client(base_url: &str) -> HttpMenuClient {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpMenuClient::with_client(client, base_url)
    }

    async fn items() -> Json<Value> {
        Json(json!([
            {"id": 0, "name": "Hamburger", "type_id": 0, "price": 425, "options": [1, 2]},
            {"id": 1, "name": "Lettuce", "type_id": 1, "price": 0},
            {"id": 2, "name": "Pickles", "type_id": 1, "price": 0}
        ]))
    }

    async fn categories() -> Json<Value> {
        Json(json!([
            {"id": 0, "name": "Burgers"},
            {"id": 1, "name": "Condiments"}
        ]))
    }

    #[test]
    fn test_client_creation() {
        let client = HttpMenuClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = local_client("http://localhost:5080/");
        assert_eq!(client.base_url(), "http://localhost:5080");
    }

    #[test]
    fn test_from_config() {
        let config = MenuConfig {
            host: "http://pos-server:8080/".to_string(),
            items_path: "/api/items".to_string(),
            ..MenuConfig::default()
        };

        let client = HttpMenuClient::from_config(&config).unwrap();

        assert_eq!(client.base_url(), "http://pos-server:8080");
        assert_eq!(client.items_path, "/api/items");
        assert_eq!(client.categories_path, DEFAULT_CATEGORIES_PATH);
    }

    #[tokio::test]
    async fn test_loads_menu_from_both_endpoints() {
        let router = Router::new()
            .route("/menuitems", get(items))
            .route("/menutypes", get(categories));
        let base_url = spawn_menu_server(router).await;
        let use_case = LoadMenuUseCase::new(Arc::new(local_client(&base_url)));

        let menu = use_case.execute().await.unwrap();

        assert_eq!(menu.items().len(), 3);
        assert_eq!(menu.categories()[1].name(), "Condiments");
        assert_eq!(menu.items()[0].option_ids().len(), 2);
    }

    #[tokio::test]
    async fn test_custom_paths() {
        let router = Router::new()
            .route("/api/items", get(items))
            .route("/api/types", get(categories));
        let base_url = spawn_menu_server(router).await;
        let client = local_client(&base_url).with_paths("/api/items", "/api/types");

        assert_eq!(client.fetch_items().await.unwrap().len(), 3);
        assert_eq!(client.fetch_categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_endpoint_fails_whole_load() {
        let router = Router::new().route("/menuitems", get(items));
        let base_url = spawn_menu_server(router).await;
        let use_case = LoadMenuUseCase::new(Arc::new(local_client(&base_url)));

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(CatalogLoadError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_repeated_option_rejects_load() {
        let router = Router::new()
            .route(
                "/menuitems",
                get(|| async {
                    Json(json!([
                        {"id": 0, "name": "Hamburger", "type_id": 0, "price": 425, "options": [1, 1]},
                        {"id": 1, "name": "Bacon", "type_id": 1, "price": 100}
                    ]))
                }),
            )
            .route("/menutypes", get(categories));
        let base_url = spawn_menu_server(router).await;
        let use_case = LoadMenuUseCase::new(Arc::new(local_client(&base_url)));

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(CatalogLoadError::Invalid(LookupError::DuplicateOption { .. }))
        ));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let router = Router::new().route(
            "/menutypes",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base_url = spawn_menu_server(router).await;

        let result = local_client(&base_url).fetch_categories().await;

        assert!(matches!(
            result,
            Err(CatalogLoadError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let router = Router::new().route("/menuitems", get(|| async { "not json" }));
        let base_url = spawn_menu_server(router).await;

        let result = local_client(&base_url).fetch_items().await;

        assert!(matches!(result, Err(CatalogLoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = local_client(&format!("http://{addr}")).fetch_items().await;

        assert!(result.is_err_and(|e| e.is_network_error()));
    }
}
