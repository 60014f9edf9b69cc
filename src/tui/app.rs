use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::catalog_io::load_catalog;
use crate::io::config_io::load_config;
use crate::model::{Catalog, UserConfig};
use crate::ops::navigate::{NavEffect, Navigator};
use crate::ops::search::{SearchHit, search};

use super::clipboard::{Clipboard, SystemClipboard};
use super::input;
use super::layout::DocLayout;
use super::render;
use super::theme::Theme;

/// How often the event loop wakes up to advance timers and smooth scrolling
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// Main application state
pub struct App {
    pub catalog: Catalog,
    pub layout: DocLayout,
    pub navigator: Navigator,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Config color overrides, reapplied when the palette toggles
    pub color_overrides: HashMap<String, String>,
    /// First visible document row of the content pane
    pub scroll: usize,
    /// Animated scroll destination; `None` when settled
    pub scroll_target: Option<usize>,
    /// Content pane height in rows, updated by the renderer each frame
    pub viewport_height: usize,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Selected row in the results dropdown
    pub result_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Transient message in the status row
    pub status_message: Option<String>,
    pub clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(catalog: Catalog, config: &UserConfig) -> Self {
        Self::with_clipboard(catalog, config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(
        catalog: Catalog,
        config: &UserConfig,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let layout = DocLayout::build(&catalog);
        let navigator = Navigator::new(&catalog);
        let theme = Theme::from_config(config.theme, &config.colors);

        App {
            layout,
            navigator,
            catalog,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            color_overrides: config.colors.clone(),
            scroll: 0,
            scroll_target: None,
            viewport_height: 0,
            search_input: String::new(),
            result_cursor: 0,
            show_help: false,
            status_message: None,
            clipboard,
        }
    }

    /// Current search results (recomputed synchronously from the query)
    pub fn results(&self) -> Vec<SearchHit<'_>> {
        search(&self.search_input, &self.catalog)
    }

    pub fn max_scroll(&self) -> usize {
        self.layout.max_scroll(self.viewport_height)
    }

    /// Advance timers and the scroll animation. Called once per loop tick.
    pub fn on_tick(&mut self, now: Instant) {
        for effect in self.navigator.tick(now) {
            self.apply_effect(effect);
        }
        self.step_scroll();
    }

    fn apply_effect(&mut self, effect: NavEffect) {
        match effect {
            NavEffect::ScrollToCategory(id) => {
                if let Some(target) = self.layout.category_scroll_target(&id, self.viewport_height)
                {
                    self.scroll_target = Some(target);
                }
            }
            NavEffect::CenterCommand(id) => {
                if let Some(target) = self.layout.command_center_target(&id, self.viewport_height)
                {
                    self.scroll_target = Some(target);
                }
            }
        }
    }

    /// Move one animation step toward the scroll target. Nothing awaits
    /// completion; the target is simply dropped once reached.
    fn step_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        if self.scroll == target {
            self.scroll_target = None;
            return;
        }
        let distance = target.abs_diff(self.scroll);
        let step = (distance / 3).max(1);
        if target > self.scroll {
            self.scroll += step;
        } else {
            self.scroll -= step;
        }
        if self.scroll == target {
            self.scroll_target = None;
        }
        self.observe_viewport();
    }

    /// Manual scrolling cancels any in-flight animated scroll
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_target = None;
        let max = self.max_scroll();
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(max);
        self.observe_viewport();
    }

    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_target = None;
        self.scroll = row.min(self.max_scroll());
        self.observe_viewport();
    }

    /// The passive direction of the sync: report whichever section sits in
    /// the activation band. Runs after every scroll mutation.
    pub fn observe_viewport(&mut self) {
        if let Some(id) = self
            .layout
            .visible_band_category(self.scroll, self.viewport_height)
        {
            self.navigator.report_visible_category(&self.catalog, id);
        }
    }

    /// Explicit category selection (sidebar index, 0-based)
    pub fn select_category_index(&mut self, index: usize) {
        let Some(category) = self.catalog.categories().get(index) else {
            return;
        };
        let id = category.id.clone();
        if let Some(effect) = self.navigator.select_category(&self.catalog, &id) {
            self.apply_effect(effect);
        }
    }

    /// Select the category after/before the active one in catalog order
    pub fn select_adjacent_category(&mut self, delta: isize) {
        let active = self.navigator.active_category();
        let Some(pos) = self
            .catalog
            .categories()
            .iter()
            .position(|c| c.id == active)
        else {
            return;
        };
        let count = self.catalog.categories().len() as isize;
        let next = (pos as isize + delta).rem_euclid(count) as usize;
        self.select_category_index(next);
    }

    /// Jump to the currently selected search result
    pub fn jump_to_selected_result(&mut self, now: Instant) {
        let id = self
            .results()
            .get(self.result_cursor)
            .map(|h| h.command.id.clone());
        let Some(id) = id else {
            return;
        };
        self.navigator.select_command(&self.catalog, &id, now);
        self.mode = Mode::Navigate;
        self.search_input.clear();
        self.result_cursor = 0;
    }

    /// Copy a command's literal cmd text. Degrades to a status message when
    /// the command has no cmd or the clipboard backend is missing.
    pub fn copy_command_text(&mut self, command_id: &str) {
        let text = self
            .catalog
            .command(command_id)
            .and_then(|c| c.cmd.clone());
        let Some(text) = text else {
            self.status_message = Some("nothing to copy".to_string());
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.status_message = Some(format!("copied: {}", text.lines().next().unwrap_or("")));
            }
            Err(_) => {
                self.status_message = Some("clipboard unavailable".to_string());
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled(&self.color_overrides);
    }
}

/// Run the TUI application
pub fn run(catalog_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let path = catalog_path.or(config.catalog.as_deref()).map(Path::new);
    let catalog = load_catalog(path)?;

    let mut app = App::new(catalog, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Instant::now());
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::catalog_io::load_embedded;
    use crate::tui::clipboard::test_support::{BrokenClipboard, MockClipboard};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_app() -> App {
        let catalog = load_embedded().unwrap();
        let mut app = App::new(catalog, &UserConfig::default());
        app.viewport_height = 20;
        app
    }

    #[test]
    fn test_initial_active_category_is_first() {
        let app = test_app();
        assert_eq!(app.navigator.active_category(), "basics");
    }

    #[test]
    fn test_select_category_animates_toward_target() {
        let mut app = test_app();
        app.select_category_index(3); // panes
        assert_eq!(app.navigator.active_category(), "panes");
        assert!(app.scroll_target.is_some());

        // Drive ticks until the animation settles
        let now = Instant::now();
        for _ in 0..200 {
            app.on_tick(now);
            if app.scroll_target.is_none() {
                break;
            }
        }
        assert_eq!(app.scroll_target, None);
        let expected = app
            .layout
            .category_scroll_target("panes", app.viewport_height)
            .unwrap();
        assert_eq!(app.scroll, expected);
        // Settled scroll position reports the same category back (§ converge)
        assert_eq!(app.navigator.active_category(), "panes");
    }

    #[test]
    fn test_manual_scroll_updates_active_category() {
        let mut app = test_app();
        app.scroll_to(app.max_scroll());
        let last = app.catalog.categories().last().unwrap().id.clone();
        // Band sits in the upper-middle of the viewport; at the very bottom
        // of the document it lands in one of the trailing sections
        let active = app.navigator.active_category().to_string();
        assert!(
            app.catalog
                .categories()
                .iter()
                .rev()
                .take(2)
                .any(|c| c.id == active),
            "expected a trailing category near {last}, got {active}"
        );
    }

    #[test]
    fn test_adjacent_category_wraps() {
        let mut app = test_app();
        app.select_adjacent_category(-1);
        let last = app.catalog.categories().last().unwrap().id.clone();
        assert_eq!(app.navigator.active_category(), last);
        app.select_adjacent_category(1);
        assert_eq!(app.navigator.active_category(), "basics");
    }

    #[test]
    fn test_jump_to_result_highlights_and_clears_query() {
        let mut app = test_app();
        app.mode = Mode::Search;
        app.search_input = "vert".to_string();
        let now = Instant::now();
        app.jump_to_selected_result(now);
        assert_eq!(app.navigator.highlighted(), Some("split-vert"));
        assert_eq!(app.navigator.active_category(), "panes");
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn test_copy_writes_cmd_text() {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let catalog = load_embedded().unwrap();
        let mut app = App::with_clipboard(
            catalog,
            &UserConfig::default(),
            Box::new(MockClipboard {
                writes: writes.clone(),
            }),
        );
        app.copy_command_text("start-named");
        assert_eq!(writes.borrow().as_slice(), ["tmux new -s [name]"]);
        assert!(app.status_message.as_deref().unwrap().starts_with("copied"));
    }

    #[test]
    fn test_copy_without_cmd_is_inert() {
        let mut app = test_app();
        // rename-session has a shortcut but no cmd
        app.copy_command_text("rename-session");
        assert_eq!(app.status_message.as_deref(), Some("nothing to copy"));
    }

    #[test]
    fn test_copy_degrades_when_clipboard_missing() {
        let catalog = load_embedded().unwrap();
        let mut app =
            App::with_clipboard(catalog, &UserConfig::default(), Box::new(BrokenClipboard));
        app.copy_command_text("start-new");
        assert_eq!(app.status_message.as_deref(), Some("clipboard unavailable"));
        assert!(!app.should_quit);
    }
}
