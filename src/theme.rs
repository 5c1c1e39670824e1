use crate::mcp::contracts::{
    DEFAULT_BACKGROUND, DEFAULT_COLOR_SCHEME, DEFAULT_COMMENT, DEFAULT_FOREGROUND,
    DEFAULT_FUNCTION, DEFAULT_KEYWORD, DEFAULT_NUMBER, DEFAULT_OPERATOR, DEFAULT_STRING,
};
use crate::params::present;
use serde::Deserialize;

/// Per-category color overrides supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Palette {
    #[serde(default, deserialize_with = "present")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub foreground: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub string: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub function: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub operator: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxCategory {
    Comment,
    String,
    Keyword,
    Function,
    Number,
    Operator,
}

impl SyntaxCategory {
    /// Emission order of the color rules. `Operator` comes last so
    /// `keyword operator` spans take the operator color.
    pub const ALL: [SyntaxCategory; 6] = [
        SyntaxCategory::Comment,
        SyntaxCategory::String,
        SyntaxCategory::Keyword,
        SyntaxCategory::Function,
        SyntaxCategory::Number,
        SyntaxCategory::Operator,
    ];

    /// CSS selector matching the tokenizer's scope classes for this category.
    ///
    /// Declarations such as `const` and `function` are `storage` scopes and
    /// take the keyword color. Only names of functions are matched for
    /// `Function`, not parameters or whole declarations.
    pub fn selector(self) -> &'static str {
        match self {
            SyntaxCategory::Comment => ".comment",
            SyntaxCategory::String => ".string",
            SyntaxCategory::Keyword => ".keyword, .storage",
            SyntaxCategory::Function => {
                ".entity.name.function, .variable.function:not(.parameter), .support.function"
            }
            SyntaxCategory::Number => ".constant.numeric",
            SyntaxCategory::Operator => ".keyword.operator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub background: String,
    pub foreground: String,
    pub comment: String,
    pub string: String,
    pub keyword: String,
    pub function: String,
    pub number: String,
    pub operator: String,
    pub color_scheme: String,
}

impl ResolvedTheme {
    pub fn resolve(
        background: Option<&str>,
        palette: Option<&Palette>,
        color_scheme: Option<&str>,
        color_schema: Option<&str>,
    ) -> Self {
        let palette = palette.cloned().unwrap_or_default();
        let background = palette
            .background
            .or_else(|| background.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());

        Self {
            background,
            foreground: palette.foreground.unwrap_or_else(|| DEFAULT_FOREGROUND.to_string()),
            comment: palette.comment.unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
            string: palette.string.unwrap_or_else(|| DEFAULT_STRING.to_string()),
            keyword: palette.keyword.unwrap_or_else(|| DEFAULT_KEYWORD.to_string()),
            function: palette.function.unwrap_or_else(|| DEFAULT_FUNCTION.to_string()),
            number: palette.number.unwrap_or_else(|| DEFAULT_NUMBER.to_string()),
            operator: palette.operator.unwrap_or_else(|| DEFAULT_OPERATOR.to_string()),
            color_scheme: resolve_color_scheme(color_scheme, color_schema).to_string(),
        }
    }

    pub fn color(&self, category: SyntaxCategory) -> &str {
        match category {
            SyntaxCategory::Comment => &self.comment,
            SyntaxCategory::String => &self.string,
            SyntaxCategory::Keyword => &self.keyword,
            SyntaxCategory::Function => &self.function,
            SyntaxCategory::Number => &self.number,
            SyntaxCategory::Operator => &self.operator,
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

/// `colorScheme` wins over its alias `colorSchema`; with neither set the
/// default `light dark` applies.
pub fn resolve_color_scheme<'a>(
    color_scheme: Option<&'a str>,
    color_schema: Option<&'a str>,
) -> &'a str {
    color_scheme.or(color_schema).unwrap_or(DEFAULT_COLOR_SCHEME)
}
