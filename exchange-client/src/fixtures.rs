//! Bootstrap fixtures for a fresh exchange
//!
//! A newly started exchange knows no users, assets, or symbols, so nothing
//! can trade until an ordered seeding pass has run. `Bootstrap` captures
//! that plan: users first, then assets, then the symbol, then one funding
//! per (user, asset) pair. The first failed step aborts the run and the
//! partially applied state is left for the operator to inspect.

use tracing::info;

use common::error::Result;
use common::model::admin::{Asset, SymbolSpec};

use crate::client::{ApiResponse, ExchangeClient};

/// Ordered seeding plan for a fresh exchange
#[derive(Debug, Clone)]
pub struct Bootstrap {
    /// Users to create
    pub users: Vec<i64>,
    /// Assets to register, in order
    pub assets: Vec<Asset>,
    /// The symbol to register
    pub symbol: SymbolSpec,
    /// Logical amount of each asset credited to each user
    pub funding_amount: i64,
}

impl Default for Bootstrap {
    /// Two users, BTC and USDT at scale 6, the BTC/USDT pair, and 100000
    /// logical units of each asset per user
    fn default() -> Self {
        Self {
            users: vec![1, 2],
            assets: vec![
                Asset {
                    asset_code: "BTC".to_string(),
                    asset_id: 1,
                    scale: 6,
                },
                Asset {
                    asset_code: "USDT".to_string(),
                    asset_id: 2,
                    scale: 6,
                },
            ],
            symbol: SymbolSpec::default(),
            funding_amount: 100_000,
        }
    }
}

impl Bootstrap {
    /// Apply the plan step by step, stopping at the first failure; returns
    /// the raw reply of every applied step in order
    pub async fn apply(&self, client: &ExchangeClient) -> Result<Vec<ApiResponse>> {
        info!(
            "Bootstrapping exchange: {} users, {} assets, symbol {}",
            self.users.len(),
            self.assets.len(),
            self.symbol.symbol_code
        );
        let mut replies = Vec::new();

        for uid in &self.users {
            replies.push(client.create_user(*uid).await?);
        }
        for asset in &self.assets {
            replies.push(client.register_asset(asset).await?);
        }
        replies.push(client.register_symbol(&self.symbol).await?);
        for uid in &self.users {
            for asset in &self.assets {
                replies.push(
                    client
                        .deposit(*uid, &asset.asset_code, self.funding_amount, asset.scale)
                        .await?,
                );
            }
        }

        info!("Bootstrap complete: {} calls applied", replies.len());
        Ok(replies)
    }
}
