use std::collections::HashSet;
use std::fmt;

use crate::model::Category;

/// A catalog integrity problem found by `check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    /// Two categories share an id
    DuplicateCategoryId(String),
    /// Two commands share an id (anywhere in the catalog, not just within
    /// one category — jump anchors address commands globally)
    DuplicateCommandId(String),
    /// A category with no commands renders as an empty section
    EmptyCategory(String),
    /// A command with neither cmd nor shortcut nor note has nothing to show
    BlankCommand(String),
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckIssue::DuplicateCategoryId(id) => {
                write!(f, "duplicate category id `{}`", id)
            }
            CheckIssue::DuplicateCommandId(id) => {
                write!(f, "duplicate command id `{}`", id)
            }
            CheckIssue::EmptyCategory(id) => {
                write!(f, "category `{}` has no commands", id)
            }
            CheckIssue::BlankCommand(id) => {
                write!(f, "command `{}` has no cmd, shortcut, or note", id)
            }
        }
    }
}

/// Validate the invariants the runtime core assumes but never checks.
/// Runs on raw categories, before `Catalog::new` builds its lookups.
pub fn check_catalog(categories: &[Category]) -> Vec<CheckIssue> {
    let mut issues = Vec::new();

    let mut category_ids: HashSet<&str> = HashSet::new();
    let mut command_ids: HashSet<&str> = HashSet::new();

    for category in categories {
        if !category_ids.insert(&category.id) {
            issues.push(CheckIssue::DuplicateCategoryId(category.id.clone()));
        }
        if category.items.is_empty() {
            issues.push(CheckIssue::EmptyCategory(category.id.clone()));
        }
        for item in &category.items {
            if !command_ids.insert(&item.id) {
                issues.push(CheckIssue::DuplicateCommandId(item.id.clone()));
            }
            if item.cmd.is_none() && item.shortcut.is_none() && item.note.is_none() {
                issues.push(CheckIssue::BlankCommand(item.id.clone()));
            }
        }
    }

    issues
}
