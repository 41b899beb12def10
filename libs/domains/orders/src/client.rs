//! Upstream order-management API client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::error::{OrderError, OrderResult, UpstreamConfigError};
use crate::models::{Item, Order, PackageItemRecord};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const TENANT_ID_HEADER: &str = "x-tenant-id";

/// The two reads the aggregator needs from upstream.
///
/// Implementations must be safe to call concurrently from many tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Package identifiers of an order, in upstream order.
    ///
    /// A 404 is [`OrderError::OrderNotFound`]; every other failure is
    /// [`OrderError::CommunicationFailed`].
    async fn fetch_order(&self, order_id: Uuid) -> OrderResult<Vec<Uuid>>;

    /// Items of one package. Any failure, 404 included, is
    /// [`OrderError::CommunicationFailed`].
    async fn fetch_package_items(&self, order_id: Uuid, package_id: Uuid)
    -> OrderResult<Vec<Item>>;
}

/// [`OrderClient`] over HTTP, one attempt per call.
///
/// Credentials are installed as default headers on a single shared
/// `reqwest::Client`, so every request carries them.
#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    client: Client,
    base_url: String,
}

impl HttpOrderClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamConfigError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|_| UpstreamConfigError::InvalidBaseUrl(config.base_url.clone()))?;

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| UpstreamConfigError::InvalidHeader(API_KEY_HEADER))?;
        api_key.set_sensitive(true);
        let tenant_id = HeaderValue::from_str(&config.tenant_id)
            .map_err(|_| UpstreamConfigError::InvalidHeader(TENANT_ID_HEADER))?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(HeaderName::from_static(TENANT_ID_HEADER), tenant_id);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn order_url(&self, order_id: Uuid) -> String {
        format!("{}/orders/{}", self.base_url, order_id)
    }

    fn package_items_url(&self, order_id: Uuid, package_id: Uuid) -> String {
        format!(
            "{}/orders/{}/packages/{}/items",
            self.base_url, order_id, package_id
        )
    }

    async fn get(&self, url: &str) -> OrderResult<Response> {
        debug!(%url, "GET upstream");
        self.client.get(url).send().await.map_err(|e| {
            warn!(%url, error = %e, timeout = e.is_timeout(), "Upstream request failed");
            OrderError::CommunicationFailed
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> OrderResult<T> {
    let url = response.url().clone();
    response.json::<T>().await.map_err(|e| {
        warn!(%url, error = %e, "Malformed upstream response");
        OrderError::CommunicationFailed
    })
}

#[async_trait]
impl OrderClient for HttpOrderClient {
    #[instrument(skip(self), fields(order_id = %order_id))]
    async fn fetch_order(&self, order_id: Uuid) -> OrderResult<Vec<Uuid>> {
        let response = self.get(&self.order_url(order_id)).await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                info!("Order not found upstream");
                Err(OrderError::OrderNotFound)
            }
            status if !status.is_success() => {
                warn!(%status, "Order request returned non-success status");
                Err(OrderError::CommunicationFailed)
            }
            _ => {
                let order: Order = decode(response).await?;
                Ok(order.package_ids())
            }
        }
    }

    #[instrument(skip(self), fields(order_id = %order_id, package_id = %package_id))]
    async fn fetch_package_items(
        &self,
        order_id: Uuid,
        package_id: Uuid,
    ) -> OrderResult<Vec<Item>> {
        let response = self
            .get(&self.package_items_url(order_id, package_id))
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Package items request returned non-success status");
            return Err(OrderError::CommunicationFailed);
        }

        let records: Vec<PackageItemRecord> = decode(response).await?;
        Ok(records.into_iter().map(Item::from).collect())
    }
}
