//! Small formatting helpers shared by the views

/// Shorten a long hex string to `0x1234...abcd` for toasts and overlays.
///
/// Strings too short to benefit are returned unchanged.
pub fn abbreviate(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 14 {
        return value.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Balance text with its unit, e.g. `1.5 ETH`
pub fn format_eth(amount: &crate::types::EthAmount) -> String {
    format!("{} ETH", amount)
}

/// Mask a secret for display, keeping only the last four characters
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(8), tail)
}
