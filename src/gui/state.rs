//! View state for the three panels
//!
//! All UI-visible state lives in [`ViewState`]. User intents are validated here and turned
//! into gateway [`Command`]s; completed calls come back as [`Outcome`]s and are applied with
//! exactly one state update and one notification each.

use super::notifications::Notifications;
use crate::gateway::{Command, Outcome};
use crate::types::{BalanceRecord, SendTransactionRequest, TransactionResult, WalletRecord};
use std::collections::VecDeque;
use std::time::Duration;

/// Panel selector for navigation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    GenerateWallet,
    GetBalance,
    SendTransaction,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::GenerateWallet, Panel::GetBalance, Panel::SendTransaction];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::GenerateWallet => "Generate Wallet",
            Panel::GetBalance => "Get Balance",
            Panel::SendTransaction => "Send Transaction",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Panel::GenerateWallet => "[+]",
            Panel::GetBalance => "[?]",
            Panel::SendTransaction => "[>]",
        }
    }
}

/// A user action that may turn into a gateway call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    GenerateWallet,
    FetchBalance,
    SendTransaction,
}

pub struct ViewState {
    panel: Panel,
    wallets: Vec<WalletRecord>,
    balances: Vec<BalanceRecord>,
    transaction: Option<TransactionResult>,
    pub balance_address: String,
    pub sender_private_key: String,
    pub receiver_address: String,
    overlay_visible: bool,
    alerts: VecDeque<String>,
    pub notifications: Notifications,
}

impl ViewState {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            panel: Panel::default(),
            wallets: Vec::new(),
            balances: Vec::new(),
            transaction: None,
            balance_address: String::new(),
            sender_private_key: String::new(),
            receiver_address: String::new(),
            overlay_visible: false,
            alerts: VecDeque::new(),
            notifications: Notifications::new(toast_duration),
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Change the visible panel. Lists, inputs and the last transaction are kept.
    pub fn switch_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn wallets(&self) -> &[WalletRecord] {
        &self.wallets
    }

    pub fn balances(&self) -> &[BalanceRecord] {
        &self.balances
    }

    pub fn transaction(&self) -> Option<&TransactionResult> {
        self.transaction.as_ref()
    }

    /// Whether the confirmation overlay should be drawn
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible && self.transaction.is_some()
    }

    pub fn close_overlay(&mut self) {
        self.overlay_visible = false;
    }

    /// Oldest blocking alert still waiting to be acknowledged
    pub fn alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Number of alerts queued, including the one on screen
    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Acknowledge the alert on screen; the next queued one (if any) takes its place
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Validate an intent against the current inputs.
    ///
    /// Returns the command to dispatch, or `None` after raising a warning when a required
    /// field is missing. A `None` here means no request is ever sent.
    pub fn request(&mut self, intent: Intent) -> Option<Command> {
        match intent {
            Intent::GenerateWallet => Some(Command::GenerateWallet),
            Intent::FetchBalance => {
                if self.balance_address.is_empty() {
                    self.notifications.warning("Please Enter an Address");
                    return None;
                }
                let address = self.balance_address.trim();
                if address.is_empty() {
                    self.notifications.warning("Please enter a valid address");
                    return None;
                }
                Some(Command::FetchBalance {
                    address: address.to_string(),
                })
            }
            Intent::SendTransaction => {
                if self.sender_private_key.is_empty() || self.receiver_address.is_empty() {
                    self.notifications
                        .warning("Please enter both sender private key and receiver address");
                    return None;
                }
                Some(Command::SendTransaction(SendTransactionRequest {
                    sender_private_key: self.sender_private_key.clone(),
                    receiver_address: self.receiver_address.clone(),
                }))
            }
        }
    }

    /// Apply a completed gateway call
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WalletGenerated(Ok(wallet)) => {
                self.wallets.push(wallet);
                self.notifications.success("Wallet generated successfully!");
            }
            Outcome::WalletGenerated(Err(e)) => {
                tracing::error!("Error generating wallet: {}", e);
                self.alerts.push_back(format!("Failed to generate wallet: {}", e));
            }
            Outcome::BalanceFetched(Ok(balance)) => {
                self.balances.push(balance);
                self.notifications.success("Balance fetched successfully!");
            }
            Outcome::BalanceFetched(Err(e)) => {
                tracing::error!("Error fetching balance: {}", e);
                self.notifications
                    .error(format!("Failed to fetch balance: {}", e));
            }
            Outcome::TransactionSent(Ok(result)) => {
                self.transaction = Some(result);
                self.overlay_visible = true;
            }
            Outcome::TransactionSent(Err(e)) => {
                tracing::error!("Error sending transaction: {}", e);
                self.notifications.warning("Failed to send transaction");
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_TOAST_DURATION_MS))
    }
}
