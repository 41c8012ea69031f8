// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    demo_catalog, draw, footer_line, highlighted_spans, menu_event_for_key, nav_line, App,
    CatalogStatus, TuiTheme, LOAD_ERROR_PREFIX,
};
use crate::model::fixtures::reference_catalog;
use crate::nav::{MenuEvent, RecordingOpener};
use crate::store::parse_catalog_json;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, style::Color, Terminal};

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

fn ready_app() -> App<RecordingOpener> {
    App::new(
        CatalogStatus::Ready(reference_catalog()),
        RecordingOpener::default(),
        TuiTheme::default(),
    )
}

fn failed_app() -> App<RecordingOpener> {
    let status = CatalogStatus::from(parse_catalog_json("not json"));
    App::new(status, RecordingOpener::default(), TuiTheme::default())
}

fn press(app: &mut App<RecordingOpener>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<RecordingOpener>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn query(app: &App<RecordingOpener>) -> Option<&str> {
    app.dropdown.as_ref().map(|dropdown| dropdown.menu.query())
}

fn selected_row(app: &App<RecordingOpener>) -> Option<usize> {
    app.dropdown.as_ref().and_then(|dropdown| dropdown.focus.sink().selected())
}

fn render(app: &mut App<RecordingOpener>, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[test]
fn demo_catalog_loads_bundled_file() {
    assert_eq!(demo_catalog(), reference_catalog());
}

#[test]
fn dropdown_opens_focused_on_first_header_and_closes_on_esc() {
    let mut app = ready_app();
    assert!(!app.is_open());

    press(&mut app, KeyCode::Enter);
    assert!(app.is_open());
    assert_eq!(query(&app), Some(""));
    assert_eq!(selected_row(&app), Some(0));

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_open());
    assert!(app.opener.is_some());
    assert!(!app.should_quit);
}

#[test]
fn reopening_starts_with_an_empty_query() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('p'));
    type_text(&mut app, "zag");
    assert_eq!(query(&app), Some("zag"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Down);
    assert_eq!(query(&app), Some(""));
    assert_eq!(selected_row(&app), Some(0));
}

#[test]
fn letters_are_search_text_while_open() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "qp");
    assert_eq!(query(&app), Some("qp"));
    assert!(!app.should_quit);
}

#[test]
fn arrows_move_selection_and_wrap() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Up);
    assert_eq!(selected_row(&app), Some(11));
    press(&mut app, KeyCode::Down);
    assert_eq!(selected_row(&app), Some(0));
    press(&mut app, KeyCode::Down);
    assert_eq!(selected_row(&app), Some(1));
}

#[test]
fn typing_filters_rows_and_selects_first() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "epi");

    assert_eq!(selected_row(&app), Some(0));
    let rows = render(&mut app, 60, 20);
    let screen = rows.join("\n");
    assert!(screen.contains("Search: epi_"), "{screen}");
    assert!(screen.contains("User Agents"), "{screen}");
    assert!(screen.contains("  Epiphany"), "{screen}");
    assert!(!screen.contains("Systems"), "{screen}");
    assert!(!screen.contains("Zagreb"), "{screen}");
}

#[test]
fn enter_opens_focused_entry_and_keeps_dropdown_open() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "epi");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let opener = app.opener().expect("opener");
    assert_eq!(opener.opened(), ["https://wwww.itschools.co.za/tools/epiphany"]);
    assert!(app.is_open());
    assert_eq!(
        app.active_toast(),
        Some("Opened https://wwww.itschools.co.za/tools/epiphany")
    );
}

#[test]
fn enter_on_header_opens_category_url() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let opener = app.opener().expect("opener");
    assert_eq!(opener.opened(), ["https://wwww.itschools.co.za/projects"]);
}

#[test]
fn enter_with_no_matches_opens_nothing() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "zzz");
    press(&mut app, KeyCode::Enter);

    assert!(app.opener().expect("opener").opened().is_empty());
    assert_eq!(app.active_toast(), None);
    let screen = render(&mut app, 60, 20).join("\n");
    assert!(screen.contains("No matches"), "{screen}");
}

#[test]
fn tag_like_query_is_refused_and_previous_query_kept() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "<b>");

    assert_eq!(query(&app), Some("<b"));
    assert_eq!(app.active_toast(), Some("Tags are not allowed in search"));
}

#[test]
fn backspace_widens_the_filter_again() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "epix");
    assert_eq!(app.dropdown.as_ref().map(|d| d.menu.visible().is_empty()), Some(true));

    press(&mut app, KeyCode::Backspace);
    assert_eq!(query(&app), Some("epi"));
    assert_eq!(selected_row(&app), Some(0));
}

#[test]
fn ctrl_c_quits_from_any_state() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    let mut closed = ready_app();
    press(&mut closed, KeyCode::Char('q'));
    assert!(closed.should_quit);
}

#[test]
fn load_error_replaces_nav_bar_and_blocks_dropdown() {
    let mut app = failed_app();
    let nav = line_to_string(&nav_line(&app));
    assert!(nav.starts_with(LOAD_ERROR_PREFIX), "{nav}");
    assert_eq!(nav_line(&app).spans[0].style.fg, Some(Color::Red));

    press(&mut app, KeyCode::Enter);
    assert!(!app.is_open());
    assert_eq!(app.active_toast(), Some("Projects are unavailable"));
}

#[test]
fn nav_bar_underlines_projects_while_open() {
    let mut app = ready_app();
    assert_eq!(line_to_string(&nav_line(&app)), "Home  Go to Projects  Products");

    press(&mut app, KeyCode::Enter);
    let line = nav_line(&app);
    let projects = line
        .spans
        .iter()
        .find(|span| span.content == "Go to Projects")
        .expect("projects item");
    assert!(projects.style.add_modifier.contains(ratatui::style::Modifier::UNDERLINED));
}

#[test]
fn footer_lists_keys_for_current_state() {
    let mut app = ready_app();
    assert_eq!(line_to_string(&footer_line(&app)), "Enter projects  q quit");

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        line_to_string(&footer_line(&app)),
        "Up/Down move  Enter open  Esc close  Ctrl-C quit"
    );
}

#[test]
fn highlighted_spans_mark_the_matched_part() {
    let theme = TuiTheme::default();
    let spans = highlighted_spans("Epiphany", "epi", theme.entry_style(), &theme);
    let parts = spans.iter().map(|span| span.content.as_ref()).collect::<Vec<_>>();
    assert_eq!(parts, ["", "Epi", "phany"]);
    assert_eq!(spans[1].style.bg, Some(Color::Yellow));
    assert_eq!(spans[2].style.bg, None);

    let plain = highlighted_spans("Zagreb", "epi", theme.entry_style(), &theme);
    assert_eq!(plain.len(), 1);
}

#[test]
fn menu_keys_map_to_events() {
    assert_eq!(menu_event_for_key(KeyCode::Down), Some(MenuEvent::NEXT));
    assert_eq!(menu_event_for_key(KeyCode::Up), Some(MenuEvent::PREV));
    assert_eq!(menu_event_for_key(KeyCode::Enter), Some(MenuEvent::Activate));
    assert_eq!(menu_event_for_key(KeyCode::Char('j')), None);
}

#[test]
fn full_menu_renders_headers_and_indented_entries() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    let rows = render(&mut app, 60, 20);

    assert!(rows[0].starts_with("Home  Go to Projects  Products"), "{:?}", rows[0]);
    assert!(rows[1].contains("Projects"), "{:?}", rows[1]);
    let body = rows.join("\n");
    for needle in ["Systems", "  API", "  Intranet", "User Agents", "  Zagreb"] {
        assert!(body.contains(needle), "missing {needle}: {body}");
    }
}
