//! SVG document composition around a tokenized HTML fragment.

use crate::escape::{encode_entities, escape_xml};
use crate::params::RenderRequest;
use crate::theme::{ResolvedTheme, SyntaxCategory};

/// Fixed line-height approximation used for the height estimate and the CSS.
pub const LINE_HEIGHT: f64 = 1.4;

/// Number of lines in `code`; empty text still counts as one line.
pub fn line_count(code: &str) -> usize {
    code.matches('\n').count() + 1
}

pub fn document_height(code: &str, font_size: f64, padding: f64) -> f64 {
    let estimated = line_count(code) as f64 * font_size * LINE_HEIGHT + padding * 2.0;
    estimated.floor().max(1.0)
}

/// Compose the complete SVG document. Pure: identical inputs give identical
/// bytes.
pub fn compose(request: &RenderRequest, markup: &str) -> String {
    let width = request.width;
    let padding = request.padding;
    let height = document_height(&request.code, request.font_size, padding);
    let html = foreign_object_html(request, markup);

    [
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ),
        format!(
            r#"  <rect x="0" y="0" width="100%" height="100%" rx="8" ry="8" fill="{}" />"#,
            escape_xml(&request.theme.background)
        ),
        format!(
            r#"  <foreignObject x="{padding}" y="{padding}" width="{}" height="{}">"#,
            width - padding * 2.0,
            height - padding * 2.0
        ),
        format!("    {html}"),
        "  </foreignObject>".to_string(),
        "</svg>".to_string(),
    ]
    .join("\n")
}

fn foreign_object_html(request: &RenderRequest, markup: &str) -> String {
    let style = style_block(request.font_size, &request.font_family, &request.theme);
    format!(
        r#"<div xmlns="http://www.w3.org/1999/xhtml">{style}<pre class="code language-{}">{markup}</pre></div>"#,
        encode_entities(&request.language)
    )
}

fn style_block(font_size: f64, font_family: &str, theme: &ResolvedTheme) -> String {
    let mut lines = vec![
        "<style>".to_string(),
        format!(
            ":root {{ color-scheme: {}; }}",
            encode_entities(&theme.color_scheme)
        ),
        format!(
            ".code {{ font: {font_size}px/{LINE_HEIGHT} {}; white-space: pre; }}",
            encode_entities(font_family)
        ),
    ];
    for category in SyntaxCategory::ALL {
        lines.push(format!(
            "{}{{ color:{} }}",
            category.selector(),
            encode_entities(theme.color(category))
        ));
    }
    lines.push(format!(
        "body{{ margin:0; background:transparent; color:{} }}",
        encode_entities(&theme.foreground)
    ));
    lines.push("</style>".to_string());
    lines.join("\n")
}
