//! GUI module for the ETH-TX wallet client
//!
//! This module provides the graphical user interface built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - Main GuiApp struct, frame loop, dialogs and gateway dispatch
//! - `async_job` - Generic async job polling for background gateway calls
//! - `state` - View state container (panel, lists, inputs, overlay, alert)
//! - `theme` - Centralized theme and styling system (AppTheme)
//! - `helpers` - Formatting helpers for addresses, amounts and secrets
//! - `notifications` - Auto-dismissing toast queue
//! - `views` - Panel rendering functions (generate wallet, get balance, send transaction)
//! - `widgets` - Reusable UI widgets (ReceiptView)
//!
//! ## Usage
//!
//! ```no_run
//! use ethtx::config::Config;
//! use ethtx::gui;
//! use ethtx::user_settings::UserSettings;
//!
//! let settings = UserSettings::load();
//! let config = Config::from_settings(&settings);
//! gui::launch(config, settings).expect("Failed to launch GUI");
//! ```

mod app;
pub mod async_job;
pub mod helpers;
pub mod notifications;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;

// Re-export main public API
pub use app::{launch, GuiApp};
pub use notifications::{Notifications, Severity};
pub use state::{Intent, Panel, ViewState};
