use crate::mcp::contracts::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LANGUAGE, DEFAULT_PADDING, DEFAULT_WIDTH,
};
use crate::mcp::errors;
use crate::theme::{Palette, ResolvedTheme};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw `highlight_svg` arguments as they arrive on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HighlightArgs {
    code: String,
    #[serde(default, deserialize_with = "present")]
    language: Option<String>,
    #[serde(default, deserialize_with = "present")]
    width: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    padding: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    background: Option<String>,
    #[serde(default, deserialize_with = "present")]
    font_size: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    font_family: Option<String>,
    #[serde(default, deserialize_with = "present")]
    palette: Option<Palette>,
    #[serde(default, deserialize_with = "present")]
    color_schema: Option<String>,
    #[serde(default, deserialize_with = "present")]
    color_scheme: Option<String>,
}

/// An optional field may be omitted, but a present field must hold a value
/// of its type; explicit `null` is rejected.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Fully defaulted render configuration. Downstream steps read it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub code: String,
    pub language: String,
    pub width: f64,
    pub padding: f64,
    pub font_size: f64,
    pub font_family: String,
    pub theme: ResolvedTheme,
}

#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("arguments must be an object")]
    NotAnObject,
    #[error("invalid arguments: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ParamError {
    pub fn kind(&self) -> &'static str {
        errors::INVALID_INPUT
    }
}

impl RenderRequest {
    /// Resolve tool arguments into a render request, applying every default.
    /// Unknown fields are ignored; numeric values are taken verbatim; `null`
    /// is not accepted in place of an omitted field.
    pub fn from_args(args: &Value) -> Result<Self, ParamError> {
        if !args.is_object() {
            return Err(ParamError::NotAnObject);
        }
        let args = HighlightArgs::deserialize(args)?;

        let theme = ResolvedTheme::resolve(
            args.background.as_deref(),
            args.palette.as_ref(),
            args.color_scheme.as_deref(),
            args.color_schema.as_deref(),
        );

        Ok(Self {
            code: args.code,
            language: args.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            width: args.width.unwrap_or(DEFAULT_WIDTH),
            padding: args.padding.unwrap_or(DEFAULT_PADDING),
            font_size: args.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            font_family: args
                .font_family
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            theme,
        })
    }
}
