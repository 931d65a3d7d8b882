//! Text shaping for anything that ends up on the page.

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a bot reply, then turns its newlines into line breaks.
pub fn format_chat_reply(reply: &str) -> String {
    escape_html(reply).replace('\n', "<br>")
}

/// Splits a comma-separated feature list into trimmed, non-empty entries.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Lenient price parse: reads the longest numeric prefix, so `"29.99 USD"`
/// is 29.99 and `"-3"` stays -3. No number at all counts as zero.
pub fn parse_price(raw: &str) -> f64 {
    let text = raw.trim_start();
    (1..=text.len())
        .rev()
        .filter(|end| text.is_char_boundary(*end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Formats a `[0, 1]` fraction as a percentage with one decimal, e.g. `"80.0"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}", fraction * 100.0)
}

/// `$`-prefixed price, or `None` when there is nothing worth showing.
pub fn format_price(price: Option<f64>) -> Option<String> {
    match price {
        Some(value) if value.is_finite() && value != 0.0 => Some(format!("${value}")),
        _ => None,
    }
}
