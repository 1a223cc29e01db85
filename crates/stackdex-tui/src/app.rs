//! Application state and event loop.

use crate::clipboard::ClipboardWriter;
use crate::debounce::Debounce;
use crate::theme::{self, ThemeMode};
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::SetCursorStyle,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};
use stackdex_card::Card;
use stackdex_catalog::{Catalog, CatalogError, FilterCriteria, StackKind, StackRecord};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tui_textarea::{Input, Key, TextArea};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast notification state
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Toast {
    pub fn info(message: String) -> Self {
        Self {
            message,
            is_error: false,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            is_error: true,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Catalog load state. The load happens once; a failure is terminal for
/// this run and rendered in place of the listing.
pub enum CatalogState {
    Loading,
    Ready(Catalog),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

/// Application state
pub struct App<'a> {
    /// Search input textarea
    pub textarea: TextArea<'a>,
    pub catalog_state: CatalogState,
    /// Distinct kinds/tools from the loaded catalog, for the filter cycles
    pub kinds: Vec<StackKind>,
    pub tools: Vec<String>,
    pub criteria: FilterCriteria,
    /// Indices into the catalog satisfying the current criteria
    pub filtered: Vec<usize>,
    /// List state for the filtered view (selection + scroll)
    pub list_state: ListState,
    pub focus: Focus,
    /// Current copy target within the selected card's copyable units
    pub copy_index: usize,
    pub theme: ThemeMode,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    clipboard: ClipboardWriter,
    debounce: Debounce,
    /// Channel from the loader thread; taken once the result arrives
    catalog_rx: Option<Receiver<Result<Catalog, CatalogError>>>,
}

/// Load the catalog off the UI thread; the result comes back over a channel
/// so input stays responsive while the document is read.
fn spawn_loader(path: Option<PathBuf>) -> Receiver<Result<Catalog, CatalogError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = match path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::builtin(),
        };
        let _ = tx.send(result);
    });
    rx
}

impl App<'_> {
    pub fn new(catalog_path: Option<PathBuf>) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(ratatui::style::Style::default());

        Self {
            textarea,
            catalog_state: CatalogState::Loading,
            kinds: Vec::new(),
            tools: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            list_state: ListState::default(),
            focus: Focus::List,
            copy_index: 0,
            theme: theme::initial_mode(),
            toast: None,
            should_quit: false,
            clipboard: ClipboardWriter::new(),
            debounce: Debounce::new(SEARCH_DEBOUNCE),
            catalog_rx: Some(spawn_loader(catalog_path)),
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.catalog_state {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Currently selected record, if the filtered view is non-empty.
    pub fn selected_record(&self) -> Option<&StackRecord> {
        let catalog = self.catalog()?;
        let selected = self.list_state.selected()?;
        let index = *self.filtered.get(selected)?;
        catalog.stacks.get(index)
    }

    /// Current query text
    fn current_query(&self) -> String {
        self.textarea.lines().join("")
    }

    /// Poll the loader thread (non-blocking)
    fn poll_catalog(&mut self) {
        let Some(rx) = &self.catalog_rx else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.catalog_rx = None;

        match result {
            Ok(catalog) => {
                log::info!("catalog ready with {} stacks", catalog.len());
                self.kinds = catalog.kinds();
                self.tools = catalog.tools();
                self.catalog_state = CatalogState::Ready(catalog);
                self.apply_filter();
            }
            Err(e) => {
                log::warn!("catalog load failed: {e}");
                self.catalog_state = CatalogState::Failed(e.to_string());
            }
        }
    }

    /// Recompute the filtered view from the current criteria. The view is
    /// replaced wholesale; selection and copy target are re-anchored.
    fn apply_filter(&mut self) {
        let filtered = match self.catalog() {
            Some(catalog) => catalog
                .stacks
                .iter()
                .enumerate()
                .filter(|(_, r)| self.criteria.matches(r))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };
        self.filtered = filtered;
        self.copy_index = 0;
        if self.filtered.is_empty() {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(selected.min(self.filtered.len() - 1)));
        }
    }

    /// Fire a debounced search pass if its quiet window has elapsed.
    fn poll_search(&mut self) {
        if let Some(query) = self.debounce.poll(Instant::now()) {
            if query != self.criteria.search {
                self.criteria.search = query;
                self.apply_filter();
            }
        }
    }

    /// Cycle the kind filter through "any" and the catalog's kinds.
    /// Dropdown-equivalent: applies immediately, no debounce.
    fn cycle_kind_filter(&mut self) {
        self.criteria.kind = match self.criteria.kind {
            None => self.kinds.first().copied(),
            Some(current) => {
                let pos = self.kinds.iter().position(|k| *k == current);
                match pos {
                    Some(i) if i + 1 < self.kinds.len() => Some(self.kinds[i + 1]),
                    _ => None,
                }
            }
        };
        self.apply_filter();
    }

    /// Cycle the tool filter through "any" and the catalog's build tools.
    fn cycle_tool_filter(&mut self) {
        self.criteria.tool = match &self.criteria.tool {
            None => self.tools.first().cloned(),
            Some(current) => {
                let pos = self.tools.iter().position(|t| t == current);
                match pos {
                    Some(i) if i + 1 < self.tools.len() => Some(self.tools[i + 1].clone()),
                    _ => None,
                }
            }
        };
        self.apply_filter();
    }

    /// Clear search text and reset both filters to "any", then refilter.
    fn clear_filters(&mut self) {
        self.textarea = TextArea::default();
        self.textarea.set_cursor_line_style(ratatui::style::Style::default());
        self.debounce.cancel();
        self.criteria = FilterCriteria::default();
        self.focus = Focus::List;
        self.apply_filter();
    }

    fn select_prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        if current > 0 {
            self.list_state.select(Some(current - 1));
            self.copy_index = 0;
        }
    }

    fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        if current < self.filtered.len() - 1 {
            self.list_state.select(Some(current + 1));
            self.copy_index = 0;
        }
    }

    /// Number of copyable units in the selected card.
    fn copy_target_count(&self) -> usize {
        self.selected_record()
            .map(|r| Card::from_record(r).copy_targets().len())
            .unwrap_or(0)
    }

    fn next_copy_target(&mut self) {
        let count = self.copy_target_count();
        if count > 0 {
            self.copy_index = (self.copy_index + 1) % count;
        }
    }

    fn prev_copy_target(&mut self) {
        let count = self.copy_target_count();
        if count > 0 {
            self.copy_index = (self.copy_index + count - 1) % count;
        }
    }

    /// Copy the current target to the clipboard and toast the outcome.
    fn copy_selected(&mut self) {
        let target = self
            .selected_record()
            .map(Card::from_record)
            .and_then(|card| card.copy_targets().into_iter().nth(self.copy_index));
        let Some(target) = target else {
            return;
        };

        match self.clipboard.copy(&target.text) {
            Ok(()) => self.toast = Some(Toast::info(format!("Copied: {}", target.label))),
            Err(e) => {
                log::warn!("clipboard copy failed: {e}");
                self.toast = Some(Toast::error("Failed to copy to clipboard".to_string()));
            }
        }
    }

    /// Flip light/dark, apply immediately and persist the choice.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = theme::save_preference(self.theme) {
            log::warn!("failed to persist theme preference: {e}");
        }
    }

    /// Clear expired toast
    fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// Handle input event
    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match self.focus {
                    Focus::List => self.handle_list_key(key),
                    Focus::Search => self.handle_search_key(key),
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            (KeyCode::Char('/'), _) => self.focus = Focus::Search,
            (KeyCode::Esc, _) => self.clear_filters(),
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => self.select_prev(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => self.select_next(),
            (KeyCode::Tab, _) => self.cycle_kind_filter(),
            (KeyCode::BackTab, _) => self.cycle_tool_filter(),
            (KeyCode::Char('['), _) => self.prev_copy_target(),
            (KeyCode::Char(']'), _) => self.next_copy_target(),
            (KeyCode::Enter, _) | (KeyCode::Char('y'), KeyModifiers::NONE) => self.copy_selected(),
            (KeyCode::Char('t'), KeyModifiers::NONE) => self.toggle_theme(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Esc, _) => self.clear_filters(),
            (KeyCode::Enter, _) => self.focus = Focus::List,
            (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => self.select_prev(),
            (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => self.select_next(),
            _ => {
                let input = Input::from(key);
                if input.key != Key::Enter && input.key != Key::Tab {
                    self.textarea.input(input);
                    self.debounce.edit(self.current_query(), Instant::now());
                }
            }
        }
    }
}

/// Run the TUI application
pub fn run(catalog_path: Option<PathBuf>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetCursorStyle::BlinkingBar)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog_path);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update_toast();

        app.poll_catalog();

        terminal.draw(|f| ui::render(f, app))?;

        app.poll_search();

        if event::poll(Duration::from_millis(16))? {
            let event = event::read()?;
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
