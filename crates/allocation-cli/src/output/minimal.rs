use serde_json::Value;

use super::cell;

/// Print just the headline figure.
///
/// Recommendation envelopes print the blended return; row lists print the
/// last row's value (final projected value, or the last asset).
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["portfolio_return", "portfolio_risk", "value", "percentage"];

    let target = match result_obj {
        Value::Array(rows) => rows.last().unwrap_or(result_obj),
        other => other,
    };

    if let Value::Object(map) = target {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", cell(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, cell(val));
            return;
        }
    }

    println!("{}", cell(target));
}
