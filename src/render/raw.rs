use serde_json::Value;

use super::rule;

/// A 60-column framed title.
pub fn render_banner(title: &str) -> String {
    format!("{}\n  {title}\n{}", rule(), rule())
}

/// A framed title followed by `body` pretty-printed with two-space indentation.
pub fn render_raw_section(title: &str, body: &Value) -> String {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    format!("\n{}\n{pretty}", render_banner(title))
}

/// Keep only the first `limit` entries of an envelope's `data` array.
///
/// Bodies that did not report success, or whose `data` is missing, empty or
/// not an array, are left alone.
pub fn truncate_envelope_data(body: &mut Value, limit: usize) {
    let success = body.get("success").is_some_and(is_truthy);
    if !success {
        return;
    }
    if let Some(Value::Array(items)) = body.get_mut("data") {
        items.truncate(limit);
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
