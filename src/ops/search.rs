use crate::model::{Catalog, Command};

/// Display budget for the results dropdown, not an error condition
pub const MAX_RESULTS: usize = 8;

/// Which field of a command matched the query (first match wins, in the
/// order the fields are checked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Description,
    Cmd,
    Shortcut,
    Tag,
}

impl MatchField {
    pub fn label(self) -> &'static str {
        match self {
            MatchField::Description => "description",
            MatchField::Cmd => "cmd",
            MatchField::Shortcut => "shortcut",
            MatchField::Tag => "tag",
        }
    }
}

/// A search hit: the command plus the field that matched
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub command: &'a Command,
    pub field: MatchField,
}

/// Filter the flattened catalog by case-insensitive substring containment.
///
/// The query is literal text, never a pattern. A command matches if the
/// lowercased query is a substring of its description, cmd, shortcut, or any
/// tag. An empty or whitespace-only query yields an empty result (the caller
/// suppresses the results panel rather than showing "no matches"). Result
/// order is flatten order, truncated to the first [`MAX_RESULTS`] hits.
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Vec<SearchHit<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let q = query.to_lowercase();

    let mut hits = Vec::new();
    for command in catalog.flatten() {
        if let Some(field) = match_command(command, &q) {
            hits.push(SearchHit { command, field });
            if hits.len() == MAX_RESULTS {
                break;
            }
        }
    }
    hits
}

/// Match one command against a lowercased query. Absent cmd/shortcut are
/// simply non-matching. `note` is intentionally not searched.
fn match_command(command: &Command, q: &str) -> Option<MatchField> {
    if command.description.to_lowercase().contains(q) {
        return Some(MatchField::Description);
    }
    if command
        .cmd
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(q))
    {
        return Some(MatchField::Cmd);
    }
    if command
        .shortcut
        .as_deref()
        .is_some_and(|s| s.to_lowercase().contains(q))
    {
        return Some(MatchField::Shortcut);
    }
    if command.tags.iter().any(|t| t.to_lowercase().contains(q)) {
        return Some(MatchField::Tag);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Command};

    fn cmd(id: &str, description: &str) -> Command {
        Command {
            id: id.to_string(),
            description: description.to_string(),
            shortcut: None,
            cmd: None,
            note: None,
            tags: Vec::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        let split_vert = Command {
            id: "split-vert".into(),
            description: "左右分屏 (垂直)".into(),
            shortcut: Some("%".into()),
            cmd: None,
            note: Some("创建左右两个窗格。".into()),
            tags: vec![
                "divide".into(),
                "side".into(),
                "vertical".into(),
                "分屏".into(),
                "垂直".into(),
                "左右".into(),
            ],
        };
        let start_new = Command {
            id: "start-new".into(),
            description: "新建会话".into(),
            shortcut: None,
            cmd: Some("tmux".into()),
            note: None,
            tags: vec!["start".into(), "init".into()],
        };
        Catalog::new(vec![
            Category {
                id: "basics".into(),
                title: "基础".into(),
                description: String::new(),
                items: vec![start_new],
            },
            Category {
                id: "panes".into(),
                title: "窗格".into(),
                description: String::new(),
                items: vec![split_vert],
            },
        ])
    }

    fn wide_catalog(n: usize) -> Catalog {
        // One category with n commands all matching "task"
        let items = (0..n)
            .map(|i| cmd(&format!("t{}", i), &format!("task {}", i)))
            .collect();
        Catalog::new(vec![Category {
            id: "only".into(),
            title: "Only".into(),
            description: String::new(),
            items,
        }])
    }

    #[test]
    fn test_empty_and_whitespace_query() {
        let catalog = sample_catalog();
        assert!(search("", &catalog).is_empty());
        assert!(search("   ", &catalog).is_empty());
    }

    #[test]
    fn test_tag_and_shortcut_match() {
        let catalog = sample_catalog();
        let by_tag = search("vert", &catalog);
        assert!(by_tag.iter().any(|h| h.command.id == "split-vert"));
        let by_shortcut = search("%", &catalog);
        assert!(by_shortcut.iter().any(|h| h.command.id == "split-vert"));
        assert_eq!(by_shortcut[0].field, MatchField::Shortcut);
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(search("VERT", &catalog).len(), search("vert", &catalog).len());
        assert!(!search("TMUX", &catalog).is_empty());
    }

    #[test]
    fn test_cjk_query() {
        let catalog = sample_catalog();
        let hits = search("分屏", &catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].command.id, "split-vert");
        // matches the description before the tag
        assert_eq!(hits[0].field, MatchField::Description);
    }

    #[test]
    fn test_no_match() {
        let catalog = sample_catalog();
        assert!(search("nonexistentxyz", &catalog).is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let catalog = sample_catalog();
        // ".*" is not a wildcard; it matches nothing in the sample data
        assert!(search(".*", &catalog).is_empty());
        // "(垂直)" appears literally in the description
        assert_eq!(search("(垂直)", &catalog).len(), 1);
    }

    #[test]
    fn test_truncated_to_max_results() {
        let catalog = wide_catalog(20);
        let hits = search("task", &catalog);
        assert_eq!(hits.len(), MAX_RESULTS);
    }

    #[test]
    fn test_order_is_flatten_order() {
        let catalog = wide_catalog(20);
        let hits = search("task", &catalog);
        let ids: Vec<&str> = hits.iter().map(|h| h.command.id.as_str()).collect();
        assert_eq!(ids, vec!["t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7"]);
    }

    #[test]
    fn test_every_hit_contains_query() {
        let catalog = sample_catalog();
        for q in ["vert", "tmux", "%", "新建"] {
            for hit in search(q, &catalog) {
                let c = hit.command;
                let ql = q.to_lowercase();
                let found = c.description.to_lowercase().contains(&ql)
                    || c.cmd.as_deref().is_some_and(|v| v.to_lowercase().contains(&ql))
                    || c.shortcut
                        .as_deref()
                        .is_some_and(|v| v.to_lowercase().contains(&ql))
                    || c.tags.iter().any(|t| t.to_lowercase().contains(&ql));
                assert!(found, "hit {} does not contain {:?}", c.id, q);
            }
        }
    }

    #[test]
    fn test_note_is_not_searched() {
        let catalog = sample_catalog();
        // "两个窗格" appears only in split-vert's note
        assert!(search("两个窗格", &catalog).is_empty());
    }
}
