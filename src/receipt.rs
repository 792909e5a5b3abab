//! Printable transaction receipts
//!
//! A receipt is written as a standalone HTML document and handed to the default browser,
//! which opens the print dialog as soon as the page loads.

use crate::types::{Receipt, TransactionResult};
use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The seven receipt fields in print order
pub fn receipt_fields(receipt: &Receipt) -> [(&'static str, String); 7] {
    [
        ("Transaction Index", receipt.transaction_index.to_string()),
        ("Transaction Hash", receipt.transaction_hash.clone()),
        ("Block Number", receipt.block_number.to_string()),
        ("From", receipt.from.clone()),
        ("To", receipt.to.clone()),
        ("Gas Used", receipt.gas_used.clone()),
        ("Status", receipt.status.clone()),
    ]
}

/// Render the fixed-format receipt document
pub fn render_document(receipt: &Receipt) -> String {
    let mut body = String::new();
    for (label, value) in receipt_fields(receipt) {
        body.push_str(&format!("    <p>{}: {}</p>\n", label, escape_html(&value)));
    }
    format!(
        "<html>\n  <head>\n    <title>Transaction Receipt</title>\n    <script>window.onload = function () {{ window.print(); }};</script>\n  </head>\n  <body>\n    <h1>Transaction Receipt</h1>\n{}  </body>\n</html>\n",
        body
    )
}

/// Write the receipt document for `result` into `dir`.
///
/// Returns `Ok(None)` without touching the filesystem when there is no receipt to print.
pub fn write_receipt(dir: &Path, result: Option<&TransactionResult>) -> Result<Option<PathBuf>> {
    let Some(receipt) = result.and_then(|r| r.receipt.as_ref()) else {
        return Ok(None);
    };

    fs::create_dir_all(dir)
        .map_err(|e| anyhow!("Failed to create receipt directory {:?}: {}", dir, e))?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S%3f");
    let path = dir.join(format!("receipt_{}.html", timestamp));
    fs::write(&path, render_document(receipt))
        .map_err(|e| anyhow!("Failed to write receipt {:?}: {}", path, e))?;

    tracing::info!("Receipt for {} written to {:?}", receipt.transaction_hash, path);
    Ok(Some(path))
}

/// Write the receipt and open it in the default browser, which prints it on load
pub fn print_receipt(dir: &Path, result: Option<&TransactionResult>) -> Result<Option<PathBuf>> {
    let Some(path) = write_receipt(dir, result)? else {
        return Ok(None);
    };
    open::that(&path).map_err(|e| anyhow!("Failed to open receipt {:?}: {}", path, e))?;
    Ok(Some(path))
}
