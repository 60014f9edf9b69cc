use serde::Serialize;

use crate::model::{Category, Command};
use crate::ops::search::SearchHit;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CommandJson {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct CategoryJson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub commands: Vec<CommandJson>,
}

#[derive(Serialize)]
pub struct CategorySummaryJson {
    pub id: String,
    pub title: String,
    pub commands: usize,
}

#[derive(Serialize)]
pub struct SearchHitJson {
    pub category: String,
    pub id: String,
    pub description: String,
    pub field: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn command_to_json(command: &Command) -> CommandJson {
    CommandJson {
        id: command.id.clone(),
        description: command.description.clone(),
        shortcut: command.shortcut.clone(),
        cmd: command.cmd.clone(),
        note: command.note.clone(),
        tags: command.tags.clone(),
    }
}

pub fn category_to_json(category: &Category) -> CategoryJson {
    CategoryJson {
        id: category.id.clone(),
        title: category.title.clone(),
        description: category.description.clone(),
        commands: category.items.iter().map(command_to_json).collect(),
    }
}

pub fn hit_to_json(category_id: &str, hit: &SearchHit) -> SearchHitJson {
    SearchHitJson {
        category: category_id.to_string(),
        id: hit.command.id.clone(),
        description: hit.command.description.clone(),
        field: hit.field.label().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single command as a one-line summary
pub fn format_command_line(command: &Command) -> String {
    let key_str = match (&command.shortcut, &command.cmd) {
        (Some(shortcut), _) => format!("  prefix + {}", shortcut),
        (None, Some(cmd)) => format!("  $ {}", cmd.lines().next().unwrap_or("")),
        (None, None) => String::new(),
    };
    format!("{}  {}{}", command.id, command.description, key_str)
}

/// Format detailed command view
pub fn format_command_detail(command: &Command) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{}  {}", command.id, command.description));
    if let Some(shortcut) = &command.shortcut {
        lines.push(format!("shortcut: prefix + {}", shortcut));
    }
    if let Some(cmd) = &command.cmd {
        for (i, cmd_line) in cmd.lines().enumerate() {
            let sigil = if i == 0 { "cmd: $ " } else { "       " };
            lines.push(format!("{}{}", sigil, cmd_line));
        }
    }
    if let Some(note) = &command.note {
        lines.push(format!("note: {}", note));
    }
    if !command.tags.is_empty() {
        lines.push(format!(
            "tags: {}",
            command
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        ));
    }

    lines
}

/// Format a category listing header
pub fn format_category_header(category: &Category) -> String {
    format!("== {} ({}) ==", category.title, category.id)
}
