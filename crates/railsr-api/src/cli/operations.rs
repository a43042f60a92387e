//! `operations` command: print the dispatch table.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};

use railsr_core::dispatch::{FieldRule, OPERATIONS, OperationSpec};
use railsr_types::resource::Resource;

/// List supported operations, optionally for a single resource.
pub fn list_operations(resource: Option<&str>, json: bool) -> Result<()> {
    let filter = resource.map(str::parse::<Resource>).transpose()?;
    let specs: Vec<&OperationSpec> = OPERATIONS
        .iter()
        .filter(|op| filter.is_none_or(|r| op.resource == r))
        .collect();

    if json {
        let rows: Vec<_> = specs
            .iter()
            .map(|op| {
                serde_json::json!({
                    "resource": op.resource,
                    "operation": op.operation,
                    "method": op.method,
                    "path": op.path,
                    "params": parameter_names(op),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Resource").fg(Color::White),
        Cell::new("Operation").fg(Color::White),
        Cell::new("Method").fg(Color::White),
        Cell::new("Path").fg(Color::White),
        Cell::new("Parameters").fg(Color::White),
    ]);

    for op in &specs {
        table.add_row(vec![
            Cell::new(op.resource.as_str()).fg(Color::Cyan),
            Cell::new(op.operation),
            Cell::new(op.method.as_str()),
            Cell::new(op.path),
            Cell::new(parameter_names(op).join(", ")).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    Ok(())
}

/// Host-side parameter names an operation reads, in table order.
pub fn parameter_names(op: &OperationSpec) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = op.id_param.into_iter().collect();
    for rule in op.body.iter().chain(op.query) {
        let name = match *rule {
            FieldRule::Field { param, .. }
            | FieldRule::OrDefault { param, .. }
            | FieldRule::Merge { param }
            | FieldRule::Nested { param, .. } => param,
            FieldRule::Const { .. } => continue,
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use railsr_core::dispatch::lookup;

    #[test]
    fn test_parameter_names_include_id_and_fields() {
        let op = lookup(Resource::Card, "createPhysical").unwrap();
        assert_eq!(
            parameter_names(op),
            vec!["cardAccountId", "cardholderName", "cardProgramId", "cardShippingAddress"]
        );

        let op = lookup(Resource::Card, "setPin").unwrap();
        assert_eq!(parameter_names(op), vec!["cardId", "cardPin"]);
    }

    #[test]
    fn test_unknown_resource_filter_fails() {
        assert!(list_operations(Some("bankAccount"), true).is_err());
    }
}
