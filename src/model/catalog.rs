use indexmap::IndexMap;

use crate::model::command::{Category, Command};

/// The complete, static command reference: an ordered sequence of categories,
/// each an ordered sequence of commands. Built once at load and never mutated;
/// all runtime state (active category, query, highlight) is layered on top.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    /// command id -> index of its owning category, in flatten order
    owners: IndexMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from categories. Trusts the uniqueness invariants
    /// (category ids unique, command ids unique across the whole catalog);
    /// `ops::check` validates them for untrusted files.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut owners = IndexMap::new();
        for (ci, category) in categories.iter().enumerate() {
            for item in &category.items {
                owners.insert(item.id.clone(), ci);
            }
        }
        Catalog { categories, owners }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The initial active category (first in catalog order)
    pub fn first_category_id(&self) -> Option<&str> {
        self.categories.first().map(|c| c.id.as_str())
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// The category owning a command, or `None` for an unknown id
    pub fn category_of(&self, command_id: &str) -> Option<&Category> {
        let ci = *self.owners.get(command_id)?;
        self.categories.get(ci)
    }

    pub fn command(&self, command_id: &str) -> Option<&Command> {
        self.category_of(command_id)?
            .items
            .iter()
            .find(|c| c.id == command_id)
    }

    /// All commands in category-then-item order
    pub fn flatten(&self) -> impl Iterator<Item = &Command> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn command_count(&self) -> usize {
        self.owners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(id: &str) -> Command {
        Command {
            id: id.to_string(),
            description: id.to_string(),
            shortcut: None,
            cmd: None,
            note: None,
            tags: Vec::new(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            Category {
                id: "a".into(),
                title: "A".into(),
                description: String::new(),
                items: vec![cmd("a1"), cmd("a2")],
            },
            Category {
                id: "b".into(),
                title: "B".into(),
                description: String::new(),
                items: vec![cmd("b1")],
            },
        ])
    }

    #[test]
    fn test_flatten_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.flatten().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_ownership() {
        let catalog = sample();
        assert_eq!(catalog.category_of("b1").map(|c| c.id.as_str()), Some("b"));
        assert_eq!(catalog.category_of("a2").map(|c| c.id.as_str()), Some("a"));
        assert!(catalog.category_of("nope").is_none());
    }

    #[test]
    fn test_lookups() {
        let catalog = sample();
        assert_eq!(catalog.first_category_id(), Some("a"));
        assert!(catalog.category("b").is_some());
        assert!(catalog.category("z").is_none());
        assert_eq!(catalog.command("a2").map(|c| c.id.as_str()), Some("a2"));
        assert_eq!(catalog.command_count(), 3);
    }
}
