use serde_json::json;

pub mod contracts;
pub mod errors;

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![json!({
        "name": contracts::TOOL_HIGHLIGHT_SVG,
        "description": "Render highlighted code as a self-contained SVG.",
        "inputSchema": contracts::highlight_svg_schema()
    })]
}
