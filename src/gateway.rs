//! HTTP gateway to the wallet backend
//!
//! Three stateless calls, each a single request awaiting a single response. There is
//! no retry, queuing or timeout beyond the transport's defaults; the caller decides what
//! a failure means for the UI.

use crate::types::{BalanceRecord, SendTransactionRequest, TransactionResult, WalletRecord};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with status code {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("worker failed: {0}")]
    Worker(String),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

/// A gateway call that passed local validation and is ready to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GenerateWallet,
    FetchBalance { address: String },
    SendTransaction(SendTransactionRequest),
}

/// Result of one dispatched [`Command`].
#[derive(Debug)]
pub enum Outcome {
    WalletGenerated(Result<WalletRecord, GatewayError>),
    BalanceFetched(Result<BalanceRecord, GatewayError>),
    TransactionSent(Result<TransactionResult, GatewayError>),
}

impl Command {
    /// Short label for logs and the in-flight indicator
    pub fn label(&self) -> &'static str {
        match self {
            Command::GenerateWallet => "generate-wallet",
            Command::FetchBalance { .. } => "get-balance",
            Command::SendTransaction(_) => "send-transaction",
        }
    }

    /// The outcome this command produces when it could not run at all
    pub fn failed(&self, error: GatewayError) -> Outcome {
        match self {
            Command::GenerateWallet => Outcome::WalletGenerated(Err(error)),
            Command::FetchBalance { .. } => Outcome::BalanceFetched(Err(error)),
            Command::SendTransaction(_) => Outcome::TransactionSent(Err(error)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: Url,
    client: Client,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let mut base_url = crate::config::validate_backend_url(base_url)
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))?;
        // Url::join replaces the last path segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().build()?;
        tracing::debug!("Gateway client initialized for {}", base_url);
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// `GET /generate-wallet`
    pub async fn generate_wallet(&self) -> Result<WalletRecord, GatewayError> {
        let url = self.endpoint("generate-wallet")?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let wallet: WalletRecord = Self::read_json(response).await?;
        tracing::info!("Wallet generated: {}", wallet.address);
        Ok(wallet)
    }

    /// `GET /get-balance?address=<addr>`
    pub async fn get_balance(&self, address: &str) -> Result<BalanceRecord, GatewayError> {
        let url = self.endpoint("get-balance")?;
        tracing::debug!("GET {} (address: {})", url, address);
        let response = self
            .client
            .get(url)
            .query(&[("address", address)])
            .send()
            .await?;
        let balance: BalanceRecord = Self::read_json(response).await?;
        tracing::info!("Balance retrieved: {} = {} ETH", balance.address, balance.balance);
        Ok(balance)
    }

    /// `POST /send-transaction`
    pub async fn send_transaction(
        &self,
        request: &SendTransactionRequest,
    ) -> Result<TransactionResult, GatewayError> {
        let url = self.endpoint("send-transaction")?;
        tracing::debug!("POST {} (receiver: {})", url, request.receiver_address);
        let response = self.client.post(url).json(request).send().await?;
        let result: TransactionResult = Self::read_json(response).await?;
        tracing::info!("Transaction submitted: {}", result.tx_hash);
        Ok(result)
    }

    /// Run exactly the one call the command names
    pub async fn execute(&self, command: Command) -> Outcome {
        let outcome = match command {
            Command::GenerateWallet => Outcome::WalletGenerated(self.generate_wallet().await),
            Command::FetchBalance { address } => Outcome::BalanceFetched(self.get_balance(&address).await),
            Command::SendTransaction(request) => {
                Outcome::TransactionSent(self.send_transaction(&request).await)
            }
        };
        if let Some(error) = outcome.error() {
            tracing::error!("Gateway call failed: {}", error);
        }
        outcome
    }
}

impl Outcome {
    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            Outcome::WalletGenerated(Err(e))
            | Outcome::BalanceFetched(Err(e))
            | Outcome::TransactionSent(Err(e)) => Some(e),
            _ => None,
        }
    }
}

/// Build a client for `base_url` and run one command against it.
///
/// Each background job owns its runtime, so the client is created inside the job
/// rather than shared across runtimes.
pub async fn dispatch(base_url: &str, command: Command) -> Outcome {
    match GatewayClient::new(base_url) {
        Ok(client) => client.execute(command).await,
        Err(e) => {
            tracing::error!("Cannot reach backend for {}: {}", command.label(), e);
            command.failed(e)
        }
    }
}
