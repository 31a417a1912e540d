use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, FocusArea, INPUT_HINT, display_width};

mod theme;
use theme::*;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;
const POPUP_MAX_ROWS: u16 = 12;
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let block = Paragraph::new(format!(
            "Terminal too small, resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("lingo")
                .borders(Borders::ALL)
                .style(Style::default().fg(TEXT).bg(LIST_BG)),
        )
        .style(Style::default().fg(TEXT).bg(SCREEN_BG));
        f.render_widget(block, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(SCREEN_BG));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(30),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    app.areas.input = vertical[1];
    app.areas.picker = vertical[2];
    app.areas.button = vertical[3];
    app.areas.output = vertical[4];
    app.areas.popup = None;

    render_title_bar(f, app, vertical[0]);
    render_input(f, app, vertical[1]);
    render_picker(f, app, vertical[2]);
    render_button(f, app, vertical[3]);
    render_output(f, app, vertical[4]);
    render_status_bar(f, app, vertical[5]);

    if app.picker.is_open() {
        let below = Rect {
            x: vertical[2].x,
            y: vertical[2].y.saturating_add(vertical[2].height),
            width: vertical[2].width,
            height: vertical[3].height + vertical[4].height,
        };
        render_language_list(f, app, below);
    }
}

fn panel_block<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let border = if focused {
        Style::default()
            .fg(BORDER_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, Style::default().fg(TEXT)))
        .style(Style::default().bg(PANEL_BG))
}

fn render_title_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(" lingo | {} ", app.controller.backend_name());
    let paragraph = Paragraph::new(title)
        .style(Style::default().fg(STATUS_TEXT).bg(STATUS_BG).add_modifier(Modifier::BOLD));
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == FocusArea::Input && !app.picker.is_open();
    let block = panel_block("Text (Ctrl+U clears)", focused);
    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;

    let lines: Vec<Line> = if app.input.is_empty() {
        vec![Line::from(Span::styled(INPUT_HINT, Style::default().fg(TEXT_HINT)))]
    } else {
        let style = Style::default().fg(TEXT);
        let mut lines = Vec::new();
        for line in app.input.buffer().split('\n') {
            push_wrapped_line(&mut lines, line, style, width);
        }
        lines
    };

    let (_, cursor_row) = app.input.cursor_display_position(width);
    let scroll = cursor_row.saturating_sub(inner.height.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(PANEL_BG))
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);

    if focused {
        let (cursor_col, cursor_row) = app.input.cursor_display_position(width);
        let cursor_x = inner
            .x
            .saturating_add(cursor_col.min(width.saturating_sub(1) as u16));
        let cursor_y = inner
            .y
            .saturating_add(cursor_row.saturating_sub(scroll).min(inner.height.saturating_sub(1)));
        f.set_cursor(cursor_x, cursor_y);
    }
}

fn render_picker(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == FocusArea::Language;
    let block = panel_block("Target language", focused);
    let style = if app.picker.selected().is_some() {
        Style::default().fg(TEXT)
    } else {
        Style::default().fg(TEXT_HINT)
    };
    let marker = if app.picker.is_open() { "▲" } else { "▼" };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.picker.selection_text()), style),
        Span::styled(marker, Style::default().fg(TEXT_HINT)),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_button(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == FocusArea::Button && !app.picker.is_open();
    let (label, bg) = if app.is_translating() {
        (
            format!("Translating {}", SPINNER[app.spinner % SPINNER.len()]),
            BUTTON_BUSY_BG,
        )
    } else {
        (String::from("Translate"), BUTTON_BG)
    };
    let mut style = Style::default().fg(BUTTON_TEXT).bg(bg);
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let border = if focused { BORDER_ACTIVE } else { BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_output(f: &mut Frame<'_>, app: &App, area: Rect) {
    let face = app.fonts.face(app.output.font);
    let file = face
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut title = format!("Translation | {} ({})", face.choice.family(), file);
    if face.choice != app.output.font {
        title.push_str(&format!(" | {} missing", app.output.font.family()));
    }
    let block = panel_block(&title, false);
    let paragraph = Paragraph::new(app.output.text.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(TEXT).bg(PANEL_BG))
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_language_list(f: &mut Frame<'_>, app: &mut App, below: Rect) {
    let rows = (app.picker.names().len() as u16)
        .saturating_add(2)
        .min(POPUP_MAX_ROWS)
        .min(below.height);
    if rows < 3 {
        return;
    }
    let area = Rect {
        height: rows,
        ..below
    };

    let items: Vec<ListItem> = app
        .picker
        .names()
        .iter()
        .map(|name| ListItem::new(Line::from(name.as_str())))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_ACTIVE))
        .title("Choose with Up/Down, Enter to select, letter to jump")
        .style(Style::default().bg(LIST_BG).fg(TEXT));
    let inner = block.inner(area);

    let mut state = ListState::default();
    state.select(Some(app.picker.highlighted()));
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(LIST_SELECTED_BG)
            .fg(LIST_SELECTED_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);

    app.areas.popup = Some(inner);
    app.areas.popup_offset = state.offset();
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let right = format!("[{}]", app.focus.label());
    let available = area.width.saturating_sub(cell_width(&right) + 1) as usize;
    let left: String = truncate_to_width(&format!(" {}", app.status_message), available);
    let padding = available.saturating_sub(UnicodeWidthStr::width(left.as_str()));

    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding + 1)),
        Span::raw(right),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().fg(STATUS_TEXT).bg(STATUS_BG));
    f.render_widget(paragraph, area);
}

fn push_wrapped_line(lines: &mut Vec<Line>, text: &str, style: Style, width: usize) {
    for segment in wrap_to_width(text, width) {
        lines.push(Line::from(Span::styled(segment, style)));
    }
}

fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;
    for ch in text.chars() {
        let ch_width = display_width(ch);
        if current_width + ch_width > width && !current.is_empty() {
            result.push(current);
            current = String::new();
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    result.push(current);
    result
}

fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_by_cell_width() {
        assert_eq!(wrap_to_width("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_to_width("한국어", 4), vec!["한국", "어"]);
        assert_eq!(wrap_to_width("", 4), vec![""]);
    }

    #[test]
    fn cursor_row_matches_wrapped_rows() {
        use crate::app::InputComposer;

        for (text, width) in [
            ("abcd", 4),
            ("abcd\nef", 4),
            ("abcdefgh", 4),
            ("한국어한", 4),
            ("ab한국", 3),
            ("\n\nxyz", 2),
        ] {
            let mut input = InputComposer::new();
            input.insert_str(text);
            let rows: usize = text.split('\n').map(|line| wrap_to_width(line, width).len()).sum();
            let (_, row) = input.cursor_display_position(width);
            assert_eq!(row as usize, rows - 1, "{text:?} at width {width}");
        }
    }

    #[test]
    fn truncates_wide_text() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("中文字", 5), "中文");
    }
}
