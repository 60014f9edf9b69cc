use crate::model::{Catalog, Command};

/// Rows a category section header occupies: title, description, separator
pub const SECTION_HEADER_ROWS: usize = 3;
/// Blank row after each card
pub const CARD_SPACER_ROWS: usize = 1;
/// Blank row between sections
pub const SECTION_GAP_ROWS: usize = 1;

/// Half-open row range `[start, end)` in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub start: usize,
    pub end: usize,
}

impl RowSpan {
    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    pub fn intersects(self, other: RowSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone)]
pub struct SectionPos {
    pub category_id: String,
    pub rows: RowSpan,
}

#[derive(Debug, Clone)]
pub struct CardPos {
    pub command_id: String,
    pub rows: RowSpan,
}

/// Row layout of the whole document: the 1:1 id scheme the navigation
/// coordinator addresses. Every category maps to exactly one section span
/// and every command to exactly one card span, nested in its section.
///
/// Pure function of the catalog; the content renderer produces exactly this
/// row structure, so spans stay valid for the catalog's whole lifetime.
#[derive(Debug, Clone)]
pub struct DocLayout {
    pub total_rows: usize,
    pub sections: Vec<SectionPos>,
    pub cards: Vec<CardPos>,
}

/// Rows one command card occupies: header line, one line per cmd line, one
/// line for the note
pub fn card_height(command: &Command) -> usize {
    let cmd_lines = command.cmd.as_deref().map_or(0, |c| c.lines().count());
    let note_lines = usize::from(command.note.is_some());
    1 + cmd_lines + note_lines
}

impl DocLayout {
    pub fn build(catalog: &Catalog) -> Self {
        let mut sections = Vec::new();
        let mut cards = Vec::new();
        let mut row = 0;

        for category in catalog.categories() {
            let section_start = row;
            row += SECTION_HEADER_ROWS;
            for item in &category.items {
                let start = row;
                row += card_height(item);
                cards.push(CardPos {
                    command_id: item.id.clone(),
                    rows: RowSpan { start, end: row },
                });
                row += CARD_SPACER_ROWS;
            }
            sections.push(SectionPos {
                category_id: category.id.clone(),
                rows: RowSpan {
                    start: section_start,
                    end: row,
                },
            });
            row += SECTION_GAP_ROWS;
        }

        DocLayout {
            total_rows: row,
            sections,
            cards,
        }
    }

    pub fn section(&self, category_id: &str) -> Option<RowSpan> {
        self.sections
            .iter()
            .find(|s| s.category_id == category_id)
            .map(|s| s.rows)
    }

    pub fn card(&self, command_id: &str) -> Option<RowSpan> {
        self.cards
            .iter()
            .find(|c| c.command_id == command_id)
            .map(|c| c.rows)
    }

    /// Scroll offset that puts the section's title on the first content row.
    /// The search header lives outside the scroll area, so no extra margin
    /// is needed to keep it clear of the section top.
    pub fn category_scroll_target(&self, category_id: &str, viewport: usize) -> Option<usize> {
        let span = self.section(category_id)?;
        Some(span.start.min(self.max_scroll(viewport)))
    }

    /// Scroll offset that centers the command's card in the viewport
    pub fn command_center_target(&self, command_id: &str, viewport: usize) -> Option<usize> {
        let span = self.card(command_id)?;
        let center = span.start + span.len() / 2;
        let target = center.saturating_sub(viewport / 2);
        Some(target.min(self.max_scroll(viewport)))
    }

    pub fn max_scroll(&self, viewport: usize) -> usize {
        self.total_rows.saturating_sub(viewport)
    }

    /// The activation band: the viewport minus its top 20% and bottom 60%,
    /// in document coordinates. Never empty, so very short viewports still
    /// observe one row.
    fn band(&self, scroll: usize, viewport: usize) -> RowSpan {
        let top = scroll + viewport / 5;
        let bottom = scroll + viewport * 2 / 5;
        RowSpan {
            start: top,
            end: bottom.max(top + 1),
        }
    }

    /// Which category the viewport observer should report for this scroll
    /// position: the first section in document order intersecting the band.
    /// When several sections cross the band, document order is the tie-break.
    pub fn visible_band_category(&self, scroll: usize, viewport: usize) -> Option<&str> {
        let band = self.band(scroll, viewport);
        self.sections
            .iter()
            .find(|s| s.rows.intersects(band))
            .map(|s| s.category_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Command};
    use std::collections::HashSet;

    fn cmd(id: &str, cmd_text: Option<&str>, note: Option<&str>) -> Command {
        Command {
            id: id.to_string(),
            description: id.to_string(),
            shortcut: None,
            cmd: cmd_text.map(String::from),
            note: note.map(String::from),
            tags: Vec::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Category {
                id: "a".into(),
                title: "A".into(),
                description: "d".into(),
                items: vec![
                    cmd("a1", Some("tmux"), None),
                    cmd("a2", None, Some("note")),
                ],
            },
            Category {
                id: "b".into(),
                title: "B".into(),
                description: "d".into(),
                items: vec![cmd("b1", Some("line1\nline2"), Some("note"))],
            },
        ])
    }

    #[test]
    fn test_card_heights() {
        assert_eq!(card_height(&cmd("x", None, None)), 1);
        assert_eq!(card_height(&cmd("x", Some("one"), None)), 2);
        assert_eq!(card_height(&cmd("x", Some("a\nb\nc"), Some("n"))), 5);
    }

    #[test]
    fn test_addressing_is_one_to_one() {
        let catalog = sample_catalog();
        let layout = DocLayout::build(&catalog);

        let section_ids: HashSet<&str> =
            layout.sections.iter().map(|s| s.category_id.as_str()).collect();
        assert_eq!(section_ids.len(), layout.sections.len());
        let card_ids: HashSet<&str> =
            layout.cards.iter().map(|c| c.command_id.as_str()).collect();
        assert_eq!(card_ids.len(), layout.cards.len());

        for category in catalog.categories() {
            let span = layout.section(&category.id).unwrap();
            assert!(!span.is_empty());
            for item in &category.items {
                let card = layout.card(&item.id).unwrap();
                // cards nest within their section
                assert!(card.start >= span.start && card.end <= span.end);
            }
        }
    }

    #[test]
    fn test_row_accounting() {
        let catalog = sample_catalog();
        let layout = DocLayout::build(&catalog);
        // section a: 3 header + (2 card + 1) + (2 card + 1) = 9
        assert_eq!(layout.section("a").unwrap(), RowSpan { start: 0, end: 9 });
        // gap row, then section b: 3 header + (4 card + 1) = 8
        assert_eq!(layout.section("b").unwrap(), RowSpan { start: 10, end: 18 });
        assert_eq!(layout.total_rows, 19);
    }

    #[test]
    fn test_unknown_ids() {
        let layout = DocLayout::build(&sample_catalog());
        assert!(layout.section("zzz").is_none());
        assert!(layout.card("zzz").is_none());
        assert!(layout.category_scroll_target("zzz", 10).is_none());
        assert!(layout.command_center_target("zzz", 10).is_none());
    }

    #[test]
    fn test_category_target_resolves_band_to_same_category() {
        let catalog = sample_catalog();
        let layout = DocLayout::build(&catalog);
        let viewport = 10;
        for category in catalog.categories() {
            let target = layout.category_scroll_target(&category.id, viewport).unwrap();
            // Sections here are at least band-height tall, so the band at
            // the target offset lands inside the selected section
            assert_eq!(
                layout.visible_band_category(target, viewport),
                Some(category.id.as_str()),
                "band did not resolve to {}",
                category.id
            );
        }
    }

    #[test]
    fn test_band_reports_at_most_one_category() {
        let layout = DocLayout::build(&sample_catalog());
        let viewport = 8;
        for scroll in 0..=layout.max_scroll(viewport) {
            // Option type: zero or one, never more
            let _ = layout.visible_band_category(scroll, viewport);
        }
        // Top of document reports the first category
        assert_eq!(layout.visible_band_category(0, viewport), Some("a"));
    }

    #[test]
    fn test_center_target_clamped() {
        let layout = DocLayout::build(&sample_catalog());
        let viewport = 12;
        let target = layout.command_center_target("b1", viewport).unwrap();
        assert!(target <= layout.max_scroll(viewport));
    }

    #[test]
    fn test_tiny_viewport_band_is_nonempty() {
        let layout = DocLayout::build(&sample_catalog());
        assert!(layout.visible_band_category(0, 1).is_some());
    }
}
