//! MCP over stdio: one JSON-RPC 2.0 message per line.

use crate::grammar::GrammarRegistry;
use crate::mcp;
use crate::tools;
use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::io::{BufRead, Write};

pub fn serve<I, O, R>(input: I, output: O, registry: &mut R) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: GrammarRegistry + ?Sized,
{
    let mut writer = std::io::BufWriter::new(output);

    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => handle_message(&request, registry),
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed json-rpc message");
                Some(rpc_error(
                    Value::Null,
                    mcp::errors::JSONRPC_PARSE_ERROR,
                    "parse error",
                ))
            }
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    tracing::info!("stdin closed; shutting down");
    Ok(())
}

fn handle_message<R: GrammarRegistry + ?Sized>(request: &Value, registry: &mut R) -> Option<Value> {
    let method = request.get("method").and_then(|value| value.as_str());
    // Notifications carry no id and never get a response.
    let id = request.get("id").cloned()?;

    let result = match method {
        Some("initialize") => json!({
            "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
        Some("ping") => json!({}),
        Some("tools/list") => json!({
            "tools": mcp::tool_definitions()
        }),
        Some("tools/call") => handle_tool_call(request, registry),
        Some(other) => {
            return Some(rpc_error(
                id,
                mcp::errors::JSONRPC_METHOD_NOT_FOUND,
                &format!("method not found: {other}"),
            ));
        }
        None => {
            return Some(rpc_error(
                id,
                mcp::errors::JSONRPC_METHOD_NOT_FOUND,
                "method must be a string",
            ));
        }
    };

    Some(json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    }))
}

fn handle_tool_call<R: GrammarRegistry + ?Sized>(request: &Value, registry: &mut R) -> Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    tracing::debug!(tool = name, "tools/call");
    match name {
        mcp::contracts::TOOL_HIGHLIGHT_SVG => tools::highlight_svg::call(&args, registry),
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("unknown tool: {name}"),
            Some(name),
        ),
    }
}

fn rpc_error(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message
        }
    })
}
