//! `call` and `batch` commands: run work items through the executor.

use std::path::Path;

use anyhow::{Context, Result, bail};
use console::style;
use serde_json::{Map, Value};

use railsr_types::item::{ItemOutput, WorkItem};

use crate::state::AppState;

/// Parse `NAME=VALUE`. The value is parsed as JSON, falling back to a
/// plain string, so `-p limit=20` sends a number and `-p firstName=Ada`
/// sends a string.
pub fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("empty parameter name in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}

/// Assemble one work item from the command line.
pub fn build_item(
    resource: String,
    operation: String,
    params_json: Option<&str>,
    params: Vec<(String, Value)>,
) -> Result<WorkItem> {
    let mut item = WorkItem::new(resource, operation);
    if let Some(raw) = params_json {
        let parsed: Map<String, Value> =
            serde_json::from_str(raw).context("--params-json must be a JSON object")?;
        item.params = parsed;
    }
    for (name, value) in params {
        item.params.insert(name, value);
    }
    Ok(item)
}

/// Run a single operation.
pub async fn call(
    state: &AppState,
    item: WorkItem,
    continue_on_fail: bool,
    json: bool,
) -> Result<()> {
    run(state, &[item], continue_on_fail, json).await
}

/// Run a batch file (`-` reads stdin).
pub async fn batch(state: &AppState, file: &Path, continue_on_fail: bool, json: bool) -> Result<()> {
    let content = if file == Path::new("-") {
        tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await?
            .context("failed to read work items from stdin")?
    } else {
        tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))?
    };

    let items = parse_items(&content)?;
    run(state, &items, continue_on_fail, json).await
}

/// Accept either a JSON array of items or a single item object.
pub fn parse_items(content: &str) -> Result<Vec<WorkItem>> {
    let value: Value = serde_json::from_str(content).context("work items are not valid JSON")?;
    let items = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(_) => vec![serde_json::from_value(value)?],
        _ => bail!("work items must be a JSON array or object"),
    };
    Ok(items)
}

async fn run(state: &AppState, items: &[WorkItem], continue_on_fail: bool, json: bool) -> Result<()> {
    let executor = state.executor(continue_on_fail)?;
    let outputs = executor.execute(items).await?;
    print_outputs(&outputs, json)
}

fn print_outputs(outputs: &[ItemOutput], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outputs)?);
        return Ok(());
    }

    for output in outputs {
        let marker = if output.json.get("error").is_some() {
            style("✗").red()
        } else {
            style("✓").green()
        };
        println!(
            "{} {}",
            marker,
            style(format!("item {}", output.paired_item)).dim()
        );
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    }
    Ok(())
}
