//! UI rendering
//!
//! The frame is rebuilt wholesale every pass; nothing is patched
//! incrementally, so copy targets and selection highlights are always
//! re-derived from current state.

use crate::app::{App, CatalogState, Focus};
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use stackdex_card::{Card, NO_RESULTS_MESSAGE, SectionBody};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_mode(app.theme);

    // Base fill so the light palette actually reads as light.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(10),   // Listing + detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, app, &palette, chunks[0]);
    render_main(frame, app, &palette, chunks[1]);
    render_status_bar(frame, app, &palette, chunks[2]);
}

/// Render the search input box
fn render_search_input(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let border = if app.focus == Focus::Search {
        palette.border_focused
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Search (/) ");

    app.textarea.set_block(block);
    app.textarea.set_cursor_line_style(Style::default());
    app.textarea
        .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(&app.textarea, area);
}

fn render_main(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    match &app.catalog_state {
        CatalogState::Loading => {
            let loading = Paragraph::new("Loading catalog…")
                .style(Style::default().fg(palette.muted))
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.border)));
            frame.render_widget(loading, area);
        }
        CatalogState::Failed(message) => {
            // Shown in place of the listing; reload the app to retry.
            let error = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Failed to load catalog",
                    Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::raw(message.as_str()),
            ])
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.error)),
            );
            frame.render_widget(error, area);
        }
        CatalogState::Ready(_) => {
            if app.filtered.is_empty() {
                let empty = Paragraph::new(NO_RESULTS_MESSAGE)
                    .style(Style::default().fg(palette.muted))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(palette.border))
                            .title(" Stacks [0] "),
                    );
                frame.render_widget(empty, area);
                return;
            }

            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(area);

            render_stack_list(frame, app, palette, panels[0]);
            render_detail(frame, app, palette, panels[1]);
        }
    }
}

/// Render the filtered stack list
fn render_stack_list(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    // Items own their text, so the catalog borrow ends before the
    // stateful render borrows the list state mutably.
    let (items, total) = {
        let Some(catalog) = app.catalog() else {
            return;
        };
        let items: Vec<ListItem> = app
            .filtered
            .iter()
            .filter_map(|&i| catalog.stacks.get(i))
            .map(|record| {
                let name = Span::styled(
                    record.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                );
                let badge = Span::styled(
                    format!(" [{}]", record.kind.label()),
                    Style::default().fg(palette.badge(record.kind)),
                );
                let tool = Span::styled(
                    format!(" {}", record.build_tool),
                    Style::default().fg(palette.muted),
                );
                ListItem::new(Line::from(vec![name, badge, tool]))
            })
            .collect();
        (items, catalog.len())
    };

    let title = format!(" Stacks [{}/{}] ", app.filtered.len(), total);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(title),
        )
        .highlight_style(Style::default().bg(palette.selection_bg).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the selected record's card, highlighting the current copy target.
fn render_detail(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(record) = app.selected_record() else {
        return;
    };
    let card = Card::from_record(record);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::raw(format!("{} ", card.kind.icon())),
        Span::styled(card.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" [{}]", card.kind.label()),
            Style::default().fg(palette.badge(card.kind)),
        ),
        Span::styled(
            format!("  {}", card.build_tool),
            Style::default().fg(palette.muted),
        ),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::raw(card.description.clone()));

    // Copyable units are numbered in display order, matching
    // Card::copy_targets; `unit` tracks which one we are emitting.
    let mut unit = 0usize;
    for section in &card.sections {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        match &section.body {
            SectionBody::Block(text) => {
                let is_target = unit == app.copy_index;
                let marker = if is_target { "⧉ " } else { "  " };
                let style = if is_target {
                    Style::default().bg(palette.selection_bg)
                } else {
                    Style::default()
                };
                for (i, line) in text.lines().enumerate() {
                    let prefix = if i == 0 { marker } else { "  " };
                    lines.push(Line::from(Span::styled(format!("{prefix}{line}"), style)));
                }
                unit += 1;
            }
            SectionBody::List { entries, executable } => {
                for entry in entries {
                    let is_target = unit == app.copy_index;
                    let bullet = if *executable { "$" } else { "•" };
                    let style = if is_target {
                        Style::default().bg(palette.selection_bg)
                    } else {
                        Style::default()
                    };
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {bullet} "),
                            style.fg(if *executable {
                                palette.success
                            } else {
                                palette.accent
                            }),
                        ),
                        Span::styled(entry.clone(), style),
                    ]));
                    unit += 1;
                }
            }
        }
    }

    let copy_hint = card
        .copy_targets()
        .get(app.copy_index)
        .map(|t| format!(" Enter: copy {} ", t.label))
        .unwrap_or_default();

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {} ", card.id))
            .title_bottom(Line::from(copy_hint).right_aligned()),
    );
    frame.render_widget(detail, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    if let Some(toast) = &app.toast {
        let color = if toast.is_error {
            palette.error
        } else {
            palette.success
        };
        let toast_line = Paragraph::new(toast.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        frame.render_widget(toast_line, area);
        return;
    }

    let kind = app
        .criteria
        .kind
        .map(|k| k.label().to_string())
        .unwrap_or_else(|| "any".to_string());
    let tool = app.criteria.tool.clone().unwrap_or_else(|| "any".to_string());
    let status_text = format!(
        " type: {kind} │ tool: {tool} │ /: search  Tab/S-Tab: filters  ]/[: copy target  Enter: copy  t: theme  Esc: clear  q: quit",
    );

    let status = Paragraph::new(status_text).style(Style::default().fg(palette.muted));
    frame.render_widget(status, area);
}
