//! Output formatting utilities

use serde::Serialize;
use uaspace_core::{DataValue, NodeId, ObjectId, ReadValueId, ReferenceDescription, StatusCode};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Symbolic name for well-known nodes, text form otherwise
fn node_label(node_id: &NodeId) -> String {
    ObjectId::from_node_id(node_id)
        .map(|id| id.name().to_string())
        .unwrap_or_else(|| node_id.to_string())
}

/// Render rows as a left-aligned table under `headers`
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn format_references(
    references: &[ReferenceDescription],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(&references),
        OutputFormat::Table => {
            if references.is_empty() {
                return Ok("No references found.".to_string());
            }
            let rows: Vec<Vec<String>> = references
                .iter()
                .map(|r| {
                    vec![
                        node_label(&r.reference_type_id),
                        if r.is_forward { "forward" } else { "inverse" }.to_string(),
                        r.node_id.to_string(),
                        r.browse_name.to_string(),
                        r.node_class.to_string(),
                        if r.type_definition.is_null() {
                            String::new()
                        } else {
                            node_label(&r.type_definition)
                        },
                    ]
                })
                .collect();
            Ok(render_table(
                &["REFERENCE", "DIRECTION", "TARGET", "BROWSE NAME", "CLASS", "TYPE DEFINITION"],
                &rows,
            ))
        }
    }
}

#[derive(Serialize)]
struct ReadRow<'a> {
    node_id: &'a NodeId,
    attribute: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

pub fn format_values(
    requests: &[ReadValueId],
    values: &[DataValue],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let rows: Vec<ReadRow> = requests
        .iter()
        .zip(values)
        .map(|(req, value)| ReadRow {
            node_id: &req.node_id,
            attribute: req.attribute_id.to_string(),
            status: value.status().to_string(),
            value: value.value().map(|v| v.to_string()),
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Table => {
            let table_rows: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.node_id.to_string(),
                        r.attribute.clone(),
                        r.status.clone(),
                        r.value.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            Ok(render_table(&["NODE", "ATTRIBUTE", "STATUS", "VALUE"], &table_rows))
        }
    }
}

pub fn format_statuses(statuses: &[StatusCode], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(&statuses.iter().map(|s| s.to_string()).collect::<Vec<_>>()),
        OutputFormat::Table => Ok(statuses
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
