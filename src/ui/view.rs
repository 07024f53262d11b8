use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    domain::{
        shell_state::{ScreenId, ShellState},
        snapshot::{ListAppearance, RenderedRow},
    },
    usecases::{
        contracts::{DisplaySurface, ListScreen, ShellOrchestrator},
        list_surface::ListSurface,
        settings_screen::SETTINGS_TITLE,
        travel_talk_screen::TRAVEL_TALK_TITLE,
    },
};

use super::styles;

const SUBTITLE_INDENT: &str = "    ";
const ELLIPSIS: &str = "...";

pub fn render(frame: &mut Frame<'_>, shell: &dyn ShellOrchestrator) {
    let [tabs_area, list_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let state = shell.state();
    frame.render_widget(Paragraph::new(tabs_line(state)), tabs_area);
    render_list_panel(frame, list_area, shell.screen());
    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

fn render_list_panel(frame: &mut Frame<'_>, area: Rect, screen: &dyn ListScreen) {
    let block = Block::default()
        .title(Span::styled(
            screen.title().to_owned(),
            styles::navigation_title_style(),
        ))
        .borders(Borders::ALL);

    let surface = screen.surface();
    if surface.visible().is_empty() {
        frame.render_widget(Paragraph::new("Nothing to show.").block(block), area);
        return;
    }

    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let rows = build_visual_rows(surface, inner_width);
    let selected = surface
        .selected_index()
        .and_then(|index| visual_index(&rows, index));

    let items: Vec<ListItem<'static>> = rows
        .into_iter()
        .map(|row| ListItem::new(Text::from(row.lines)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(styles::selection_style());

    let mut list_state = ListState::default();
    list_state.select(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One entry of the drawn list: a data row, a section header or a
/// separator. Only data rows carry a row index.
struct VisualRow {
    lines: Vec<Line<'static>>,
    row_index: Option<usize>,
}

impl VisualRow {
    fn decoration(line: Line<'static>) -> Self {
        Self {
            lines: vec![line],
            row_index: None,
        }
    }
}

fn build_visual_rows(surface: &ListSurface, width: usize) -> Vec<VisualRow> {
    let layout = surface.layout();
    let mut rows = Vec::new();
    let mut row_index = 0;

    for (position, section) in surface.visible().sections.iter().enumerate() {
        if layout.appearance == ListAppearance::Grouped {
            if position > 0 {
                rows.push(VisualRow::decoration(Line::default()));
            }
            rows.push(VisualRow::decoration(section_header_line(&section.key)));
        }

        for (offset, row) in section.rows.iter().enumerate() {
            if layout.show_separators && offset > 0 {
                rows.push(VisualRow::decoration(separator_line(width)));
            }
            rows.push(VisualRow {
                lines: row_lines(row, width),
                row_index: Some(row_index),
            });
            row_index += 1;
        }
    }

    rows
}

fn visual_index(rows: &[VisualRow], row_index: usize) -> Option<usize> {
    rows.iter()
        .position(|row| row.row_index == Some(row_index))
}

fn section_header_line(key: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("-- {key} --"),
        styles::section_header_style(),
    ))
}

fn separator_line(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "\u{2500}".repeat(width),
        styles::separator_style(),
    ))
}

fn row_lines(row: &RenderedRow, width: usize) -> Vec<Line<'static>> {
    match row.cell.subtitle.as_deref() {
        None => vec![value_line(row, width)],
        Some(subtitle) => subtitle_lines(row, subtitle, width),
    }
}

/// Single-line value cell: just the title.
fn value_line(row: &RenderedRow, width: usize) -> Line<'static> {
    let style = if row.placeholder {
        styles::placeholder_style()
    } else {
        styles::setting_name_style()
    };

    Line::from(Span::styled(truncate_to_width(&row.cell.title, width), style))
}

/// Two-line subtitle cell: avatar and title, then the subtitle followed by
/// the dimmed detail.
fn subtitle_lines(row: &RenderedRow, subtitle: &str, width: usize) -> Vec<Line<'static>> {
    let badge = avatar_badge(row.cell.image.as_deref());
    let title_width = width.saturating_sub(badge.width() + 1);
    let title_line = Line::from(vec![
        Span::styled(badge, styles::avatar_style()),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&row.cell.title, title_width),
            styles::room_name_style(),
        ),
    ]);

    let detail = row.cell.detail.as_deref().unwrap_or_default();
    let detail_width = if detail.is_empty() { 0 } else { detail.width() + 1 };
    let subtitle_width = width.saturating_sub(SUBTITLE_INDENT.len() + detail_width);
    let subtitle_style = if row.placeholder {
        styles::placeholder_style()
    } else {
        styles::last_message_style()
    };

    let mut spans = vec![
        Span::raw(SUBTITLE_INDENT),
        Span::styled(truncate_to_width(subtitle, subtitle_width), subtitle_style),
    ];
    if !detail.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(detail.to_owned(), styles::message_date_style()));
    }

    vec![title_line, Line::from(spans)]
}

fn avatar_badge(image: Option<&str>) -> String {
    match image.and_then(|name| name.chars().next()) {
        Some(initial) => format!("[{}]", initial.to_uppercase()),
        None => "[ ]".to_owned(),
    }
}

/// Cuts `text` to at most `max_width` terminal columns, marking the cut with
/// an ellipsis. Wide (e.g. Hangul) characters count as two columns.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        truncated.push(ch);
    }

    if max_width >= ELLIPSIS.len() {
        truncated.push_str(ELLIPSIS);
    }
    truncated
}

fn tabs_line(state: &ShellState) -> Line<'static> {
    let tab = |screen: ScreenId, label: &str| {
        let style = if state.active_screen() == screen {
            styles::active_tab_style()
        } else {
            styles::inactive_tab_style()
        };
        Span::styled(format!(" {label} "), style)
    };

    Line::from(vec![
        tab(ScreenId::Settings, SETTINGS_TITLE),
        Span::raw(" "),
        tab(ScreenId::TravelTalk, TRAVEL_TALK_TITLE),
    ])
}

fn status_line(state: &ShellState) -> Line<'static> {
    let hint = format!(
        "screen: {} | j/k: navigate | Tab/1/2: switch | r: reload | q: quit",
        state.active_screen().as_label()
    );

    match state.notice() {
        Some(notice) => Line::from(vec![
            Span::styled(notice.to_owned(), styles::notice_style()),
            Span::raw(" | "),
            Span::raw(hint),
        ]),
        None => Line::from(hint),
    }
}

/// Plain-text rendition of a screen: its title followed by every visual
/// line, without styling.
pub fn screen_text(screen: &dyn ListScreen, width: usize) -> Vec<String> {
    let mut lines = vec![screen.title().to_owned()];
    lines.extend(
        build_visual_rows(screen.surface(), width)
            .iter()
            .flat_map(|row| row.lines.iter().map(line_to_string)),
    );
    lines
}

fn line_to_string(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
