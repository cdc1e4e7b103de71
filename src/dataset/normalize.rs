// src/dataset/normalize.rs

use anyhow::{anyhow, Result};
use serde_json::Value;

/// Per-record field that upstream sometimes ships as `""` instead of a number.
pub const NOTIFICATION_RATE_FIELD: &str = "notification_rate_per_100000_population_14-days";

/// Replace every empty-string 14-day notification rate with `null`, in place.
///
/// Records without the field, or that aren't objects, are left as they are.
/// Returns how many fields were replaced.
pub fn normalize_notification_rate(doc: &mut Value) -> Result<usize> {
    let records = doc
        .get_mut("records")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| anyhow!("document has no `records` array"))?;

    let mut replaced = 0;
    for record in records.iter_mut().filter_map(Value::as_object_mut) {
        if let Some(rate) = record.get_mut(NOTIFICATION_RATE_FIELD) {
            if rate.as_str() == Some("") {
                *rate = Value::Null;
                replaced += 1;
            }
        }
    }
    Ok(replaced)
}
