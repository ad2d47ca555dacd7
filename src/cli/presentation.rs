//! CLI presentation: formatters for history, contexts and session lists.

use crate::error::HistoryError;
use crate::history::Context;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn to_json(value: &serde_json::Value) -> Result<String, HistoryError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| HistoryError::ConfigError(format!("Failed to render JSON: {}", e)))
}

pub fn format_history_json(history: &[Context]) -> Result<String, HistoryError> {
    let value = serde_json::to_value(history)
        .map_err(|e| HistoryError::ConfigError(format!("Failed to render JSON: {}", e)))?;
    to_json(&value)
}

pub fn format_history_text(history: &[Context], max_size: usize) -> String {
    if history.is_empty() {
        return "History is empty.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "URI"]);
    for (i, context) in history.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            context.name().to_string(),
            context.uri().to_string(),
        ]);
    }
    format!("History ({}/{}):\n{}", history.len(), max_size, table)
}

pub fn format_last_context(context: Option<&Context>, format: &str) -> Result<String, HistoryError> {
    match (context, format) {
        (Some(context), "json") => {
            let value = serde_json::to_value(context)
                .map_err(|e| HistoryError::ConfigError(format!("Failed to render JSON: {}", e)))?;
            to_json(&value)
        }
        (None, "json") => Ok("null".to_string()),
        (Some(context), _) => Ok(format!("{}  {}", context.name().bold(), context.uri())),
        (None, _) => Ok("No context recorded.".to_string()),
    }
}

pub fn format_visit_result(context: &Context, history_len: usize, max_size: usize) -> String {
    format!(
        "Kept {} ({}/{})",
        context.name().green(),
        history_len,
        max_size
    )
}

pub fn format_session_list(sessions: &[String]) -> String {
    if sessions.is_empty() {
        return "No sessions.".to_string();
    }
    let mut lines: Vec<String> = sessions.iter().map(|s| format!("  {}", s)).collect();
    lines.insert(0, "Sessions:".to_string());
    lines.join("\n")
}
