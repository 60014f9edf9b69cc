use std::time::{Duration, Instant};

use crate::model::Catalog;

/// Delay before the centering scroll for a jumped-to command fires, letting
/// any pending layout change settle first
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// How long a jumped-to command keeps its visual highlight
pub const HIGHLIGHT_CLEAR_DELAY: Duration = Duration::from_secs(3);

/// A scroll the presentation layer should carry out. Fire-and-forget:
/// nothing waits on scroll completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Bring the category's section into view, below the fixed header
    ScrollToCategory(String),
    /// Center the command's card in the viewport
    CenterCommand(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredKind {
    CenterScroll,
    ClearHighlight,
}

/// A deadline-tagged deferred action. Tagged with the command id it targets
/// so a stale clear timer can never erase a newer highlight.
#[derive(Debug, Clone)]
struct Deferred {
    command_id: String,
    deadline: Instant,
    kind: DeferredKind,
}

/// Keeps "which category is in view" consistent between the explicit path
/// (sidebar selection, search jump) and the passive path (scroll
/// observation), and manages the temporary jump highlight.
///
/// Both paths write the same state cell with last-write-wins semantics; no
/// cycle breaking is needed because both directions converge on the same id
/// and everything runs on one event loop.
#[derive(Debug)]
pub struct Navigator {
    active_category: String,
    highlighted: Option<String>,
    deferred: Vec<Deferred>,
}

impl Navigator {
    pub fn new(catalog: &Catalog) -> Self {
        Navigator {
            active_category: catalog.first_category_id().unwrap_or_default().to_string(),
            highlighted: None,
            deferred: Vec::new(),
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Explicit selection: activate the category and ask the view to scroll
    /// to it. Unknown ids are a silent no-op; the catalog is build-time data,
    /// so a miss is a collaborator defect, not a runtime condition.
    pub fn select_category(&mut self, catalog: &Catalog, category_id: &str) -> Option<NavEffect> {
        catalog.category(category_id)?;
        self.active_category = category_id.to_string();
        Some(NavEffect::ScrollToCategory(category_id.to_string()))
    }

    /// Passive direction: the viewport observation reports which section sits
    /// in the activation band. Updates state without issuing a scroll, so
    /// scrolling drives state and not vice versa.
    pub fn report_visible_category(&mut self, catalog: &Catalog, category_id: &str) {
        if catalog.category(category_id).is_some() {
            self.active_category = category_id.to_string();
        }
    }

    /// Jump to a command (from a search result): activate its owning
    /// category, highlight it immediately, and schedule the centering scroll
    /// and the highlight clear. Every call schedules its own independent
    /// timers. Unknown ids are a silent no-op.
    pub fn select_command(&mut self, catalog: &Catalog, command_id: &str, now: Instant) {
        let Some(owner) = catalog.category_of(command_id) else {
            return;
        };
        self.active_category = owner.id.clone();
        self.highlighted = Some(command_id.to_string());
        self.deferred.push(Deferred {
            command_id: command_id.to_string(),
            deadline: now + SCROLL_DELAY,
            kind: DeferredKind::CenterScroll,
        });
        self.deferred.push(Deferred {
            command_id: command_id.to_string(),
            deadline: now + HIGHLIGHT_CLEAR_DELAY,
            kind: DeferredKind::ClearHighlight,
        });
    }

    /// Fire deferred actions whose deadline has passed. Called once per
    /// event-loop tick. A clear timer only clears the highlight if the
    /// current highlight still equals the id it was scheduled for.
    pub fn tick(&mut self, now: Instant) -> Vec<NavEffect> {
        let mut effects = Vec::new();
        let pending = std::mem::take(&mut self.deferred);
        for d in pending {
            if d.deadline > now {
                self.deferred.push(d);
                continue;
            }
            match d.kind {
                DeferredKind::CenterScroll => {
                    effects.push(NavEffect::CenterCommand(d.command_id));
                }
                DeferredKind::ClearHighlight => {
                    if self.highlighted.as_deref() == Some(d.command_id.as_str()) {
                        self.highlighted = None;
                    }
                }
            }
        }
        effects
    }

    /// True if any deferred action is still pending
    pub fn has_pending(&self) -> bool {
        !self.deferred.is_empty()
    }
}
