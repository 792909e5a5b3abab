//! Widget components for the GUI
//!
//! - `ReceiptView` - Transaction hash, receipt fields and the print button

mod receipt_view;

pub use receipt_view::{ReceiptResponse, ReceiptView};
