use serde_json::{Value, json};

pub mod highlight_svg;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// JSON number for a pixel value: integral values serialize without a
/// fractional part so they read the same as in the SVG attributes.
pub fn json_number(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        json!(value as i64)
    } else {
        json!(value)
    }
}

/// Successful tool result carrying one text block plus structured data.
pub fn text_result(text: String, structured: Value) -> Value {
    json!({
        "content": [{"type": "text", "text": text}],
        "structuredContent": structured,
        "isError": false
    })
}

/// Tool-level failure. `tool` names the tool the failure belongs to, when
/// one was resolved from the request.
pub fn error_result(kind: &'static str, message: impl Into<String>, tool: Option<&str>) -> Value {
    let message = message.into();
    let text = format!("{kind}: {message}");
    let mut error = json!({"kind": kind, "message": message});
    if let (Some(tool), Some(fields)) = (tool, error.as_object_mut()) {
        fields.insert("tool".to_string(), json!(tool));
    }

    json!({
        "content": [{"type": "text", "text": text}],
        "structuredContent": {"error": error},
        "isError": true
    })
}
