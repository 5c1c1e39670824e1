use crate::tools::json_number;
use serde_json::json;

pub const TOOL_HIGHLIGHT_SVG: &str = "highlight_svg";

pub const PROTOCOL_VERSION: &str = "2025-11-25";

pub const DEFAULT_LANGUAGE: &str = "javascript";
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_PADDING: f64 = 16.0;
pub const DEFAULT_BACKGROUND: &str = "#1e1e1e";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_FONT_FAMILY: &str = "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', 'Courier New', monospace";
pub const DEFAULT_COLOR_SCHEME: &str = "light dark";

pub const DEFAULT_FOREGROUND: &str = "#d4d4d4";
pub const DEFAULT_COMMENT: &str = "#6a9955";
pub const DEFAULT_STRING: &str = "#ce9178";
pub const DEFAULT_KEYWORD: &str = "#569cd6";
pub const DEFAULT_FUNCTION: &str = "#dcdcaa";
pub const DEFAULT_NUMBER: &str = "#b5cea8";
pub const DEFAULT_OPERATOR: &str = "#d4d4d4";

pub fn highlight_svg_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "code": {
                "type": "string",
                "description": "Source code to highlight"
            },
            "language": {
                "type": "string",
                "default": DEFAULT_LANGUAGE,
                "description": "Language id or file extension (e.g., javascript, python, rust, js, py)"
            },
            "width": {
                "type": "number",
                "default": json_number(DEFAULT_WIDTH),
                "description": "SVG width in px"
            },
            "padding": {
                "type": "number",
                "default": json_number(DEFAULT_PADDING),
                "description": "Padding around content in px"
            },
            "background": {
                "type": "string",
                "default": DEFAULT_BACKGROUND,
                "description": "Background color"
            },
            "fontSize": {
                "type": "number",
                "default": json_number(DEFAULT_FONT_SIZE),
                "description": "Font size in px"
            },
            "fontFamily": {
                "type": "string",
                "default": DEFAULT_FONT_FAMILY,
                "description": "Font family stack"
            },
            "palette": {
                "type": "object",
                "description": "Per-category color overrides",
                "properties": {
                    "background": { "type": "string" },
                    "foreground": { "type": "string" },
                    "comment": { "type": "string" },
                    "string": { "type": "string" },
                    "keyword": { "type": "string" },
                    "function": { "type": "string" },
                    "number": { "type": "string" },
                    "operator": { "type": "string" }
                }
            },
            "colorSchema": {
                "type": "string",
                "default": DEFAULT_COLOR_SCHEME,
                "description": "CSS color-scheme value"
            },
            "colorScheme": {
                "type": "string",
                "description": "Alias of colorSchema; wins when both are set"
            }
        },
        "required": ["code"]
    })
}
