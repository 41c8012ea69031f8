// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Hosts the project dropdown in a ratatui + crossterm shell. The terminal is held for the whole
//! run, but the dropdown (and with it every menu key binding) only exists while it is open.

use std::{
    error::Error,
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::menu::MenuState;
use crate::model::fixtures::reference_catalog;
use crate::model::Catalog;
use crate::nav::{FocusHandle, FocusSink, FocusSynchronizer, MenuEvent, SystemOpener, UrlOpener};
use crate::query::{highlight, HighlightSpan, VisibleModel};
use crate::store::{CatalogFile, StoreError};

mod search_bar;
mod theme;

use search_bar::{apply_search_key, QueryEdit};
use theme::TuiTheme;

pub use theme::ThemeError;

const NAV_ITEMS: [&str; 3] = ["Home", "Go to Projects", "Products"];
const PROJECTS_NAV_INDEX: usize = 1;
const NAV_SEPARATOR: &str = "  ";
const DROPDOWN_WIDTH: u16 = 44;
const DROPDOWN_INDENT: u16 = 2;
const ENTRY_INDENT: &str = "  ";
const TOAST_TTL: Duration = Duration::from_secs(3);
const LOAD_ERROR_PREFIX: &str = "Whoops, looks like there was an error:";

/// Runs the interactive terminal UI until the user quits.
///
/// A catalog that failed to load is still shown: the top bar reports the error and the dropdown
/// refuses to open.
pub fn run(catalog: Result<Catalog, StoreError>) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let opener = SystemOpener::from_env();
    tracing::debug!(opener = %opener.command_line(), "starting terminal ui");

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(CatalogStatus::from(catalog), opener, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Built-in demo catalog.
///
/// Prefers the bundled `data/demo-catalog.json`; falls back to the compiled-in copy when the file
/// is not next to the sources (e.g. an installed binary).
pub fn demo_catalog() -> Catalog {
    let path = demo_catalog_path();
    match CatalogFile::new(&path).load() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "demo catalog unavailable; using built-in copy");
            reference_catalog()
        }
    }
}

pub fn demo_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("demo-catalog.json")
}

#[derive(Debug, Clone)]
enum CatalogStatus {
    Ready(Catalog),
    Failed(String),
}

impl From<Result<Catalog, StoreError>> for CatalogStatus {
    fn from(result: Result<Catalog, StoreError>) -> Self {
        match result {
            Ok(catalog) => Self::Ready(catalog),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

impl FocusSink for ListState {
    fn focus(&mut self, handle: FocusHandle) {
        self.select(Some(handle.row()));
    }

    fn clear_focus(&mut self) {
        self.select(None);
    }
}

/// An open dropdown: menu state plus the list selection it drives.
struct Dropdown<O> {
    menu: MenuState,
    focus: FocusSynchronizer<ListState, O>,
}

impl<O: UrlOpener> Dropdown<O> {
    fn open(catalog: Catalog, opener: O) -> Self {
        let menu = MenuState::new(catalog);
        let mut focus = FocusSynchronizer::new(ListState::default(), opener);
        focus.sync(menu.visible(), menu.cursor());
        Self { menu, focus }
    }

    fn close(self) -> O {
        self.focus.into_opener()
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App<O> {
    catalog: CatalogStatus,
    /// Parked while the dropdown is closed; the open dropdown owns it otherwise.
    opener: Option<O>,
    dropdown: Option<Dropdown<O>>,
    theme: TuiTheme,
    toast: Option<Toast>,
    should_quit: bool,
}

impl<O: UrlOpener> App<O> {
    fn new(catalog: CatalogStatus, opener: O, theme: TuiTheme) -> Self {
        if let CatalogStatus::Failed(message) = &catalog {
            tracing::error!(error = %message, "catalog failed to load");
        }
        Self {
            catalog,
            opener: Some(opener),
            dropdown: None,
            theme,
            toast: None,
            should_quit: false,
        }
    }

    fn is_open(&self) -> bool {
        self.dropdown.is_some()
    }

    #[cfg(test)]
    fn opener(&self) -> Option<&O> {
        match &self.dropdown {
            Some(dropdown) => Some(dropdown.focus.opener()),
            None => self.opener.as_ref(),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| Instant::now() < toast.expires_at)
            .map(|toast| toast.message.as_str())
    }

    fn open_dropdown(&mut self) {
        if self.dropdown.is_some() {
            return;
        }
        let catalog = match &self.catalog {
            CatalogStatus::Ready(catalog) => catalog.clone(),
            CatalogStatus::Failed(_) => {
                self.set_toast("Projects are unavailable");
                return;
            }
        };
        let Some(opener) = self.opener.take() else {
            return;
        };

        self.dropdown = Some(Dropdown::open(catalog, opener));
        tracing::debug!("dropdown opened");
    }

    fn close_dropdown(&mut self) {
        if let Some(dropdown) = self.dropdown.take() {
            self.opener = Some(dropdown.close());
            tracing::debug!("dropdown closed");
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.is_open() {
            self.handle_dropdown_key(key);
        } else {
            self.handle_closed_key(key.code);
        }
    }

    fn handle_closed_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Down | KeyCode::Char('p') => self.open_dropdown(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.close_dropdown();
            return;
        }
        let Some(dropdown) = self.dropdown.as_mut() else {
            return;
        };

        if let Some(event) = menu_event_for_key(key.code) {
            let target = match event {
                MenuEvent::Activate => dropdown.menu.activation_target().map(str::to_owned),
                MenuEvent::Navigate(_) => None,
            };
            match dropdown.focus.dispatch(&mut dropdown.menu, event) {
                Ok(()) => {
                    if let Some(url) = target {
                        self.set_toast(format!("Opened {url}"));
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to open menu item");
                    self.set_toast(format!("Open failed: {err}"));
                }
            }
            return;
        }

        match apply_search_key(dropdown.menu.query(), key) {
            Some(QueryEdit::Accepted(query)) => {
                dropdown.focus.set_query(&mut dropdown.menu, query);
            }
            Some(QueryEdit::Rejected(query)) => {
                tracing::warn!(%query, "search query rejected");
                self.set_toast("Tags are not allowed in search");
            }
            Some(QueryEdit::Unchanged) | None => {}
        }
    }
}

fn menu_event_for_key(code: KeyCode) -> Option<MenuEvent> {
    match code {
        KeyCode::Down => Some(MenuEvent::NEXT),
        KeyCode::Up => Some(MenuEvent::PREV),
        KeyCode::Enter => Some(MenuEvent::Activate),
        _ => None,
    }
}

fn draw<O: UrlOpener>(frame: &mut Frame<'_>, app: &mut App<O>) {
    let [top, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(nav_line(app)), top);
    draw_dropdown(frame, app, body);
    frame.render_widget(Paragraph::new(footer_line(app)), footer);
}

fn nav_line<O: UrlOpener>(app: &App<O>) -> Line<'static> {
    if let CatalogStatus::Failed(message) = &app.catalog {
        return Line::from(Span::styled(
            format!("{LOAD_ERROR_PREFIX} {message}"),
            app.theme.error_style(),
        ));
    }

    let mut spans = Vec::with_capacity(NAV_ITEMS.len() * 2);
    for (index, label) in NAV_ITEMS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(NAV_SEPARATOR, app.theme.base_style()));
        }
        let active = index == PROJECTS_NAV_INDEX && app.is_open();
        spans.push(Span::styled(*label, app.theme.nav_style(active)));
    }
    Line::from(spans)
}

fn draw_dropdown<O: UrlOpener>(frame: &mut Frame<'_>, app: &mut App<O>, area: Rect) {
    let theme = &app.theme;
    let Some(dropdown) = app.dropdown.as_mut() else {
        return;
    };

    let rect = dropdown_rect(area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_style())
        .title(" Projects ");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [search, rows] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    let search_line = Line::from(vec![
        Span::styled("Search: ", theme.hint_style()),
        Span::styled(dropdown.menu.query().to_owned(), theme.base_style()),
        Span::styled("_", theme.hint_style()),
    ]);
    frame.render_widget(Paragraph::new(search_line), search);

    if dropdown.menu.visible().is_empty() {
        frame.render_widget(Paragraph::new(Span::styled("No matches", theme.hint_style())), rows);
        return;
    }

    let items = menu_items(dropdown.menu.visible(), dropdown.menu.query(), theme);
    let list = List::new(items).highlight_style(theme.selection_style());
    frame.render_stateful_widget(list, rows, dropdown.focus.sink_mut());
}

fn dropdown_rect(area: Rect) -> Rect {
    let indent = DROPDOWN_INDENT.min(area.width);
    let x = area.x + indent;
    let width = DROPDOWN_WIDTH.min(area.width - indent);
    Rect::new(x, area.y, width, area.height)
}

/// One list item per flat position, in cursor order, so list rows and focus handles agree.
fn menu_items<'a>(model: &'a VisibleModel, query: &str, theme: &TuiTheme) -> Vec<ListItem<'a>> {
    let mut items = Vec::with_capacity(model.total_positions());
    for visible in model.categories() {
        let category = visible.category();
        items.push(ListItem::new(Line::from(highlighted_spans(
            category.name(),
            query,
            theme.header_style(),
            theme,
        ))));

        for entry in visible.visible_entries() {
            let mut spans = vec![Span::styled(ENTRY_INDENT, theme.entry_style())];
            spans.extend(highlighted_spans(entry.name(), query, theme.entry_style(), theme));
            items.push(ListItem::new(Line::from(spans)));
        }
    }
    items
}

fn highlighted_spans<'a>(name: &'a str, query: &str, base: Style, theme: &TuiTheme) -> Vec<Span<'a>> {
    match highlight(name, query) {
        HighlightSpan::NoMatch => vec![Span::styled(name, base)],
        HighlightSpan::Match {
            before,
            matched,
            after,
        } => vec![
            Span::styled(before, base),
            Span::styled(matched, base.patch(theme.match_style())),
            Span::styled(after, base),
        ],
    }
}

fn footer_line<O: UrlOpener>(app: &App<O>) -> Line<'static> {
    if let Some(toast) = app.active_toast() {
        return Line::from(Span::styled(toast.to_owned(), app.theme.hint_style()));
    }

    let hints: &[(&str, &str)] = match (&app.catalog, app.is_open()) {
        (CatalogStatus::Failed(_), _) => &[("q", "quit")],
        (CatalogStatus::Ready(_), false) => &[("Enter", "projects"), ("q", "quit")],
        (CatalogStatus::Ready(_), true) => &[
            ("Up/Down", "move"),
            ("Enter", "open"),
            ("Esc", "close"),
            ("Ctrl-C", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", app.theme.base_style()));
        }
        spans.push(Span::styled(*key, app.theme.key_style()));
        spans.push(Span::styled(format!(" {label}"), app.theme.hint_style()));
    }
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
