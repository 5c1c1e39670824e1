use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::fs;
use std::io::{self, Read};
use std::process;

mod escape;
mod grammar;
mod highlight;
mod logging;
mod mcp;
mod params;
mod server;
mod svg;
mod theme;
mod tools;

use grammar::SyntaxRegistry;

#[derive(Parser)]
#[command(name = "highlight-svg-mcp")]
#[command(
    version,
    about = "MCP server rendering syntax-highlighted code as SVG"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
#[command(
    group(
        clap::ArgGroup::new("source")
            .required(false)
            .multiple(false)
            .args(["path", "code"])
    )
)]
struct HighlightArgs {
    /// Path to a source file (reads stdin when neither --path nor --code is set)
    #[arg(long)]
    path: Option<String>,
    /// Source code text
    #[arg(long)]
    code: Option<String>,
    /// Language id or file extension
    #[arg(long)]
    language: Option<String>,
    /// SVG width in px
    #[arg(long, allow_negative_numbers = true)]
    width: Option<f64>,
    /// Padding around content in px
    #[arg(long, allow_negative_numbers = true)]
    padding: Option<f64>,
    /// Background color
    #[arg(long)]
    background: Option<String>,
    /// Font size in px
    #[arg(long, allow_negative_numbers = true)]
    font_size: Option<f64>,
    /// Font family stack
    #[arg(long)]
    font_family: Option<String>,
    /// CSS color-scheme value
    #[arg(long)]
    color_scheme: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server (default)
    Serve {
        /// Serve MCP over stdio (NDJSON); the only transport, accepted for compatibility
        #[arg(long)]
        stdio: bool,
    },
    /// Render code to SVG on stdout
    Highlight(HighlightArgs),
}

fn main() {
    logging::init();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!("fatal error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => run_stdio_server(),
        Some(Commands::Serve { stdio }) => {
            if !stdio {
                tracing::debug!("no transport flag given; serving over stdio");
            }
            run_stdio_server()
        }
        Some(Commands::Highlight(args)) => run_highlight(args),
    }
}

fn run_stdio_server() -> Result<()> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting stdio server");
    let mut registry = SyntaxRegistry::new();
    tracing::debug!(
        grammars = ?registry.loaded_languages().collect::<Vec<_>>(),
        "grammar registry ready"
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    server::serve(stdin.lock(), stdout.lock(), &mut registry)
}

fn run_highlight(args: HighlightArgs) -> Result<()> {
    let map = build_highlight_args(&args)?;
    let mut registry = SyntaxRegistry::new();
    let result = tools::highlight_svg::call(&Value::Object(map), &mut registry);
    print_tool_result(result, args.json)
}

fn build_highlight_args(args: &HighlightArgs) -> Result<Map<String, Value>> {
    let code = match (&args.path, &args.code) {
        (Some(path), _) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        (None, Some(code)) => code.clone(),
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let mut map = Map::new();
    map.insert("code".to_string(), json!(code));
    if let Some(language) = &args.language {
        map.insert("language".to_string(), json!(language));
    }
    if let Some(width) = args.width {
        map.insert("width".to_string(), json!(width));
    }
    if let Some(padding) = args.padding {
        map.insert("padding".to_string(), json!(padding));
    }
    if let Some(background) = &args.background {
        map.insert("background".to_string(), json!(background));
    }
    if let Some(font_size) = args.font_size {
        map.insert("fontSize".to_string(), json!(font_size));
    }
    if let Some(font_family) = &args.font_family {
        map.insert("fontFamily".to_string(), json!(font_family));
    }
    if let Some(color_scheme) = &args.color_scheme {
        map.insert("colorScheme".to_string(), json!(color_scheme));
    }
    Ok(map)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        anyhow::bail!("{message}");
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}
