use crate::escape::escape_html_text;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Tokenize `code` into HTML spans tagged with space-separated scope classes
/// (`keyword operator`, `string quoted double`, ...).
///
/// Always produces markup: if the tokenizer fails midway the whole fragment
/// degrades to escaped plain text.
pub fn tokenize(code: &str, syntax: &SyntaxReference, syntax_set: &SyntaxSet) -> String {
    match try_tokenize(code, syntax, syntax_set) {
        Ok(html) => html,
        Err(err) => {
            tracing::warn!(syntax = %syntax.name, error = %err, "tokenizer failed; emitting plain text");
            escape_html_text(code)
        }
    }
}

fn try_tokenize(
    code: &str,
    syntax: &SyntaxReference,
    syntax_set: &SyntaxSet,
) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}
