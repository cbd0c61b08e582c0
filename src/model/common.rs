use serde_json::Value;

pub type Id = String;

/// Read a cell the way a spreadsheet presents it: text verbatim, numbers in
/// their JSON form, blanks as the empty string.
///
/// Returns `None` for booleans, arrays and objects.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => Some(String::new()),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}
