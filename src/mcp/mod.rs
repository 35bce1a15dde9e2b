use crate::catalog;
use crate::dispatch::ToolKind;
use serde_json::{Value, json};

pub mod contracts;
pub mod errors;

/// MCP `tools/list` entries for every implemented tool, in catalog order.
pub fn tool_definitions() -> Vec<Value> {
    catalog::all()
        .iter()
        .filter_map(|meta| ToolKind::from_id(meta.id).map(|kind| (meta, kind)))
        .map(|(meta, kind)| {
            json!({
                "name": meta.id,
                "title": meta.title,
                "description": meta.description,
                "inputSchema": kind.input_schema()
            })
        })
        .collect()
}
