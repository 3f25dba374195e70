//! The exchange API client
//!
//! `ExchangeClient` speaks to the gateway's two synchronous trees: admin
//! calls (`syncAdminApi/v1`) for users, assets, symbols, and funding, and
//! trade calls (`syncTradeApi/v1`) for orders and queries. Each method
//! issues exactly one request; a non-2xx reply becomes [`Error::Api`] with
//! the raw body attached.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use common::error::{Error, Result};
use common::model::admin::{Asset, CreateUserRequest, DepositRequest, SymbolSpec};
use common::model::trade::{
    CancelOrderRequest, MoveOrderRequest, OrderAction, OrderType, PlaceOrderRequest,
};

use crate::config::ClientConfig;
use crate::txid::TxIdSource;

/// Order book depth requested when the caller has no opinion
pub const DEFAULT_DEPTH: u32 = 10;

/// Reply to a single API call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status (always 2xx; failures become errors instead)
    pub status: StatusCode,
    /// Response body as opaque JSON
    pub body: Value,
}

/// Client for the exchange admin and trade APIs
#[derive(Debug)]
pub struct ExchangeClient {
    http: reqwest::Client,
    base_url: String,
    txids: TxIdSource,
}

impl ExchangeClient {
    /// Create a client against the configured gateway
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::ConfigurationError(format!("invalid base URL {:?}: {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            txids: TxIdSource::new(),
        })
    }

    /// Create a user
    pub async fn create_user(&self, uid: i64) -> Result<ApiResponse> {
        info!("Creating user {}", uid);
        self.post("syncAdminApi/v1/users", &CreateUserRequest { uid })
            .await
    }

    /// Register an asset
    pub async fn register_asset(&self, asset: &Asset) -> Result<ApiResponse> {
        info!(
            "Registering asset {} (id {}, scale {})",
            asset.asset_code, asset.asset_id, asset.scale
        );
        self.post("syncAdminApi/v1/assets", asset).await
    }

    /// Register a tradable symbol
    pub async fn register_symbol(&self, spec: &SymbolSpec) -> Result<ApiResponse> {
        info!("Registering symbol {}", spec.symbol_code);
        self.post("syncAdminApi/v1/symbols", spec).await
    }

    /// Credit a user's account with a logical amount of `currency`, scaled
    /// by the asset's decimal scale; the transaction id is drawn fresh so
    /// the gateway never mistakes the deposit for a replay
    pub async fn deposit(
        &self,
        uid: i64,
        currency: &str,
        amount: i64,
        scale: u32,
    ) -> Result<ApiResponse> {
        let request = DepositRequest::new(self.txids.next(), currency, amount, scale)?;
        info!(
            "Depositing {} {} to user {} (txid {})",
            amount, currency, uid, request.transaction_id
        );
        self.post(&format!("syncAdminApi/v1/users/{}/accounts", uid), &request)
            .await
    }

    /// Fetch a user's balances and open orders as the service reports them
    pub async fn user_state(&self, uid: i64) -> Result<ApiResponse> {
        self.get(&format!("syncTradeApi/v1/users/{}/state", uid))
            .await
    }

    /// Fetch service metadata
    pub async fn info(&self) -> Result<ApiResponse> {
        self.get("syncTradeApi/v1/info").await
    }

    /// Fetch the order book for a symbol at the given depth
    pub async fn order_book(&self, symbol: &str, depth: u32) -> Result<ApiResponse> {
        self.get(&format!(
            "syncTradeApi/v1/symbols/{}/orderbook?depth={}",
            symbol, depth
        ))
        .await
    }

    /// Place a limit order; the user cookie always carries the uid
    pub async fn place_order(
        &self,
        uid: i64,
        symbol: &str,
        price: i64,
        size: i64,
        action: OrderAction,
        order_type: OrderType,
    ) -> Result<ApiResponse> {
        let request = PlaceOrderRequest {
            price,
            size,
            user_cookie: uid,
            action,
            order_type,
        };
        info!(
            "Placing {} order for user {} on {}: {} @ {}",
            action, uid, symbol, size, price
        );
        self.post(
            &format!("syncTradeApi/v1/symbols/{}/trade/{}/orders", symbol, uid),
            &request,
        )
        .await
    }

    /// Cancel an open order
    pub async fn cancel_order(
        &self,
        uid: i64,
        symbol: &str,
        order_id: i64,
    ) -> Result<ApiResponse> {
        let request = CancelOrderRequest {
            order_id,
            symbol: symbol.to_string(),
            uid,
        };
        info!("Cancelling order {} for user {} on {}", order_id, uid, symbol);
        self.delete(
            &format!(
                "syncTradeApi/v1/symbols/{}/trade/{}/orders/{}",
                symbol, uid, order_id
            ),
            &request,
        )
        .await
    }

    /// Move an open order to a new price
    pub async fn move_order(
        &self,
        uid: i64,
        symbol: &str,
        order_id: i64,
        price: i64,
    ) -> Result<ApiResponse> {
        let request = MoveOrderRequest {
            order_id,
            symbol: symbol.to_string(),
            uid,
            price,
        };
        info!(
            "Moving order {} for user {} on {} to price {}",
            order_id, uid, symbol, price
        );
        self.put(
            &format!(
                "syncTradeApi/v1/symbols/{}/trade/{}/orders/{}",
                symbol, uid, order_id
            ),
            &request,
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        Self::read_response(response).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::read_response(response).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self.http.put(&url).json(body).send().await?;
        Self::read_response(response).await
    }

    async fn delete<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self.http.delete(&url).json(body).send().await?;
        Self::read_response(response).await
    }

    async fn read_response(response: Response) -> Result<ApiResponse> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api { status, body: text });
        }
        let body: Value = serde_json::from_str(&text)?;
        Ok(ApiResponse { status, body })
    }
}
