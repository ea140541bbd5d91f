//! Chain Client
//!
//! Typed wrapper over the fullnode REST API. Constructed from the app
//! config and handed around explicitly; there is no global client.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{
    ResourceEnvelope, TableItemRequest, TodoListResource, TransactionStatus, TransactionView,
};

const CONFIRM_POLL_INTERVAL_MS: u32 = 500;
const CONFIRM_MAX_POLLS: u32 = 60;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("transaction aborted on chain: {vm_status}")]
    TransactionFailed { vm_status: String },
    #[error("transaction not confirmed after {0} ms")]
    ConfirmationTimeout(u32),
}

/// Outcome of a resource read. Absence is part of the contract ("no list
/// yet"), not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceLookup {
    Found(TodoListResource),
    NotFound,
}

#[derive(Clone)]
pub struct ChainClient {
    base_url: String,
}

impl ChainClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.network.fullnode_url().to_string(),
        }
    }

    /// Read the account's list resource. A 404 means the account has no
    /// list yet.
    pub async fn account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> Result<ResourceLookup, ChainError> {
        let url = format!(
            "{}/v1/accounts/{}/resource/{}",
            self.base_url, address, resource_type
        );
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        match response.status() {
            200 => {
                let envelope: ResourceEnvelope<TodoListResource> = response
                    .json()
                    .await
                    .map_err(|e| ChainError::Decode(e.to_string()))?;
                Ok(ResourceLookup::Found(envelope.data))
            }
            404 => Ok(ResourceLookup::NotFound),
            status => Err(ChainError::Status { status, url }),
        }
    }

    /// Fetch one table item by handle and key.
    pub async fn table_item<T: DeserializeOwned>(
        &self,
        handle: &str,
        request: &TableItemRequest,
    ) -> Result<T, ChainError> {
        let url = format!("{}/v1/tables/{}/item", self.base_url, handle);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ChainError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        if response.status() != 200 {
            return Err(ChainError::Status {
                status: response.status(),
                url,
            });
        }
        response
            .json()
            .await
            .map_err(|e| ChainError::Decode(e.to_string()))
    }

    /// Status of a submitted transaction. `None` while the node has not
    /// indexed the hash yet.
    async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionStatus>, ChainError> {
        let url = format!("{}/v1/transactions/by_hash/{}", self.base_url, hash);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        match response.status() {
            404 => Ok(None),
            200 => {
                let view: TransactionView = response
                    .json()
                    .await
                    .map_err(|e| ChainError::Decode(e.to_string()))?;
                Ok(Some(view.status()))
            }
            status => Err(ChainError::Status { status, url }),
        }
    }

    /// Poll until the transaction leaves the pending state. Ok only for a
    /// committed, successful execution.
    pub async fn wait_for_transaction(&self, hash: &str) -> Result<(), ChainError> {
        for _ in 0..CONFIRM_MAX_POLLS {
            match self.transaction_by_hash(hash).await? {
                Some(TransactionStatus::Committed { success: true, .. }) => return Ok(()),
                Some(TransactionStatus::Committed {
                    success: false,
                    vm_status,
                }) => return Err(ChainError::TransactionFailed { vm_status }),
                Some(TransactionStatus::Pending) | None => {
                    TimeoutFuture::new(CONFIRM_POLL_INTERVAL_MS).await;
                }
            }
        }
        Err(ChainError::ConfirmationTimeout(
            CONFIRM_MAX_POLLS * CONFIRM_POLL_INTERVAL_MS,
        ))
    }
}
