use crate::grammar::{self, GrammarRegistry};
use crate::highlight;
use crate::params::RenderRequest;
use crate::svg;
use crate::mcp::contracts::TOOL_HIGHLIGHT_SVG;
use crate::tools::{error_result, json_number, text_result};
use serde_json::{Value, json};

pub fn call<R: GrammarRegistry + ?Sized>(args: &Value, registry: &mut R) -> Value {
    let request = match RenderRequest::from_args(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind(), err.to_string(), Some(TOOL_HIGHLIGHT_SVG)),
    };

    grammar::ensure_loaded(registry, &request.language);
    let selected = grammar::select(&*registry, &request.language);
    let markup = highlight::tokenize(&request.code, selected.syntax, registry.syntax_set());
    let document = svg::compose(&request, &markup);
    let height = svg::document_height(&request.code, request.font_size, request.padding);

    tracing::debug!(
        language = %request.language,
        grammar = %selected.syntax.name,
        fallback = selected.fallback,
        bytes = document.len(),
        "rendered highlight svg"
    );

    let structured = json!({
        "width": json_number(request.width),
        "height": json_number(height),
        "language": request.language,
        "grammar": selected.syntax.name,
        "fallback": selected.fallback
    });
    text_result(document, structured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::SyntaxRegistry;
    use crate::grammar::tests::FakeRegistry;
    use crate::mcp::errors;

    fn svg_text(result: &Value) -> &str {
        result["content"][0]["text"].as_str().expect("svg text")
    }

    #[test]
    fn only_code_uses_defaults() {
        let mut registry = SyntaxRegistry::new();
        let result = call(&json!({"code": "const a = 1;"}), &mut registry);
        assert_eq!(result["isError"], json!(false));
        assert_eq!(result["content"].as_array().map(Vec::len), Some(1));
        assert_eq!(result["content"][0]["type"], "text");

        let svg = svg_text(&result);
        assert!(svg.contains(r#"width="800" height="51""#));
        assert!(svg.contains(r##"fill="#1e1e1e""##));
        assert!(svg.contains("color-scheme: light dark;"));
        assert!(svg.contains("font: 14px/1.4 ui-monospace"));
        assert!(svg.contains(r#"<foreignObject x="16" y="16" width="768" height="19">"#));
        assert!(svg.contains(r#"language-javascript"#));

        assert_eq!(result["structuredContent"]["grammar"], "JavaScript");
        assert_eq!(result["structuredContent"]["fallback"], json!(false));
        assert_eq!(result["structuredContent"]["height"], json!(51));
    }

    #[test]
    fn structured_dimensions_match_svg_attributes() {
        let mut registry = SyntaxRegistry::new();
        let result = call(&json!({"code": "a\nb"}), &mut registry);
        assert_eq!(result["structuredContent"]["width"].to_string(), "800");
        assert_eq!(result["structuredContent"]["height"].to_string(), "71");
        assert!(svg_text(&result).contains(r#"width="800" height="71""#));

        let result = call(&json!({"code": "a", "width": 640.5}), &mut registry);
        assert_eq!(result["structuredContent"]["width"], json!(640.5));
    }

    #[test]
    fn identical_requests_render_identical_bytes() {
        let mut registry = SyntaxRegistry::new();
        let args = json!({"code": "def f(x):\n    return x * 2\n", "language": "python"});
        let first = call(&args, &mut registry);
        let second = call(&args, &mut registry);
        assert_eq!(svg_text(&first), svg_text(&second));
        assert_eq!(first["structuredContent"]["grammar"], "Python");
    }

    #[test]
    fn unknown_language_renders_with_fallback() {
        let mut registry = SyntaxRegistry::new();
        let args = json!({"code": "var x = \"s\"; // note", "language": "not-a-real-language"});
        let first = call(&args, &mut registry);
        assert_eq!(first["isError"], json!(false));
        assert_eq!(first["structuredContent"]["fallback"], json!(true));
        assert_eq!(first["structuredContent"]["grammar"], "JavaScript");
        assert!(svg_text(&first).contains("comment"));

        let second = call(&args, &mut registry);
        assert_eq!(svg_text(&first), svg_text(&second));
    }

    #[test]
    fn fake_registry_controls_grammar_choice() {
        let mut registry = FakeRegistry::new(&["javascript"], &[]);
        let result = call(&json!({"code": "x = 1", "language": "python"}), &mut registry);
        assert_eq!(registry.load_attempts, 1);
        assert_eq!(result["structuredContent"]["fallback"], json!(true));

        let mut registry = FakeRegistry::new(&["javascript"], &["python"]);
        let result = call(&json!({"code": "x = 1", "language": "python"}), &mut registry);
        assert_eq!(result["structuredContent"]["grammar"], "Python");
        assert_eq!(result["structuredContent"]["fallback"], json!(false));
    }

    #[test]
    fn palette_scheme_and_background_precedence() {
        let mut registry = SyntaxRegistry::new();
        let result = call(
            &json!({
                "code": "let a = 1;",
                "background": "#000000",
                "palette": {"keyword": "#ff0000", "background": "#111111"},
                "colorScheme": "dark",
                "colorSchema": "light"
            }),
            &mut registry,
        );
        let svg = svg_text(&result);
        assert!(svg.contains(r##"fill="#111111""##));
        assert!(svg.contains("color-scheme: dark;"));
        assert!(svg.contains(".keyword, .storage{ color:#ff0000 }"));
        assert!(svg.contains(".comment{ color:#6a9955 }"));
        assert!(svg.contains(".string{ color:#ce9178 }"));
        assert!(svg.contains(".entity.name.function, .variable.function:not(.parameter), .support.function{ color:#dcdcaa }"));
        assert!(svg.contains(".constant.numeric{ color:#b5cea8 }"));
        assert!(svg.contains(".keyword.operator{ color:#d4d4d4 }"));
        assert!(svg.contains("color:#d4d4d4 }"));
    }

    #[test]
    fn schema_violation_is_an_error_result() {
        let mut registry = SyntaxRegistry::new();
        let result = call(&json!({"language": "rust"}), &mut registry);
        assert_eq!(result["isError"], json!(true));
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            errors::INVALID_INPUT
        );
        assert_eq!(result["structuredContent"]["error"]["tool"], "highlight_svg");

        let result = call(&json!({"code": "x", "fontSize": "big"}), &mut registry);
        assert_eq!(result["isError"], json!(true));
    }
}
