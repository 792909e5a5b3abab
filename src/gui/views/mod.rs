//! View modules for the GUI
//!
//! One render function per panel, each taking `&mut GuiApp` and `&mut egui::Ui`.
//! They are called from `App::update` in `app.rs` according to the active [`Panel`].
//!
//! - `wallets` - Generate wallets and list every wallet generated this session
//! - `balances` - Look up an address balance and list every lookup made this session
//! - `transaction` - Submit a transaction and show its receipt
//!
//! [`Panel`]: super::state::Panel

pub mod balances;
pub mod transaction;
pub mod wallets;

pub use balances::view_get_balance;
pub use transaction::view_send_transaction;
pub use wallets::view_generate_wallet;
