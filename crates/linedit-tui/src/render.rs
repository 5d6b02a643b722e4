use linedit_core::layout::{cell_width_at, visual_x_for_col};
use linedit_core::{ContentKind, Document, Preview};
use linedit_highlight_simple::{Token, TokenClass};
use ratatui::Frame;
use ratatui::layout::{Position as CellPosition, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Screen geometry from the last draw, used to hit-test mouse events.
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub tabs: Rect,
    /// `(start, close_button, end)` cell columns for each tab.
    pub tab_spans: Vec<(u16, u16, u16)>,
    pub text: Rect,
    pub gutter: u16,
}

impl ScreenLayout {
    /// Tab under column `x`, and whether the close button was hit.
    pub fn tab_at(&self, x: u16) -> Option<(usize, bool)> {
        self.tab_spans
            .iter()
            .position(|&(start, _, end)| x >= start && x < end)
            .map(|index| {
                let (_, close, _) = self.tab_spans[index];
                (index, x >= close)
            })
    }

    pub fn text_rows(&self) -> usize {
        self.text.height as usize
    }
}

pub fn token_style(class: TokenClass) -> Style {
    match class {
        TokenClass::Keyword => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        TokenClass::Type => Style::default().fg(Color::Cyan),
        TokenClass::Number => Style::default().fg(Color::LightYellow),
        TokenClass::Comment => Style::default().fg(Color::DarkGray),
        TokenClass::StringLiteral => Style::default().fg(Color::Green),
        TokenClass::Plain => Style::default(),
    }
}

const SELECTION_BG: Color = Color::Rgb(60, 70, 110);

/// Width of the line-number gutter for a document of `line_count` lines.
pub fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len().max(3);
    digits as u16 + 1
}

/// Draw the tab strip and record where each tab landed.
pub fn render_tabs(frame: &mut Frame, area: Rect, titles: &[String], active: usize) -> Vec<(u16, u16, u16)> {
    let mut spans = Vec::new();
    let mut hits = Vec::new();
    let mut x = area.x;
    for (index, title) in titles.iter().enumerate() {
        let style = if index == active {
            Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        let label = format!(" {title} ");
        let start = x;
        let close = start.saturating_add(label.chars().count() as u16);
        let end = close.saturating_add(2);
        spans.push(Span::styled(label, style));
        spans.push(Span::styled("x ", style.fg(Color::Red)));
        spans.push(Span::raw(" "));
        hits.push((start, close, end));
        x = end.saturating_add(1);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    hits
}

/// Draw the visible slice of `doc` into `area`, with a line-number gutter of `gutter` cells.
pub fn render_document(
    frame: &mut Frame,
    area: Rect,
    gutter: u16,
    doc: &Document,
    highlights: &[Vec<Token>],
    tab_width: usize,
) {
    let selection = doc.selection().filter(|sel| !sel.is_empty());
    let scroll = doc.scroll();
    let mut rendered = Vec::with_capacity(area.height as usize);

    for (offset, line) in doc
        .lines()
        .iter()
        .skip(scroll)
        .take(area.height as usize)
        .enumerate()
    {
        let row = scroll + offset;
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", row + 1, width = gutter as usize - 1),
            Style::default().fg(Color::DarkGray),
        )];
        let selected = selection.and_then(|sel| sel.columns_on_row(row, line.len()));
        let tokens = highlights.get(offset).map(Vec::as_slice).unwrap_or(&[]);
        spans.extend(styled_line(line, tokens, selected, tab_width));
        rendered.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(rendered), area);

    let cursor = doc.cursor();
    if cursor.row >= scroll && cursor.row < scroll + area.height as usize {
        let line = doc.lines().get(cursor.row).map(String::as_str).unwrap_or("");
        let x = area.x as usize + gutter as usize + visual_x_for_col(line, cursor.col, tab_width);
        let y = area.y as usize + (cursor.row - scroll);
        if x < (area.x + area.width) as usize {
            frame.set_cursor_position(CellPosition::new(x as u16, y as u16));
        }
    }
}

/// Split a line into styled spans, expanding tabs to spaces so cells line up with the
/// layout helpers.
fn styled_line(
    line: &str,
    tokens: &[Token],
    selected: Option<(usize, usize)>,
    tab_width: usize,
) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    let mut cell = 0usize;

    for (col, ch) in line.char_indices() {
        let mut style = tokens
            .iter()
            .find(|token| token.range.contains(&col))
            .map(|token| token_style(token.class))
            .unwrap_or_default();
        if let Some((from, to)) = selected
            && col >= from
            && col < to
        {
            style = style.bg(SELECTION_BG);
        }
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;

        let width = cell_width_at(ch, cell, tab_width);
        if ch == '\t' {
            run.extend(std::iter::repeat_n(' ', width));
        } else {
            run.push(ch);
        }
        cell += width;
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}

pub fn render_preview(frame: &mut Frame, area: Rect, preview: &Preview) {
    let label = match preview.kind {
        ContentKind::Image => "Image",
        ContentKind::Audio => "Audio",
        ContentKind::Text => "File",
    };
    let text = vec![
        Line::from(Span::styled(
            format!("{label} preview"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(preview.path.display().to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Ctrl+N for a new file, Ctrl+O to open another",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

pub fn render_status(frame: &mut Frame, area: Rect, text: String) {
    let status = Paragraph::new(text).style(
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(status, area);
}

pub fn render_shortcuts(frame: &mut Frame, area: Rect) {
    let shortcuts = Paragraph::new(
        "^S Save | ^O Open | ^N New | ^W Close | ^Z Undo | ^C/^X/^V Clipboard | ^PgUp/^PgDn Tabs | ^Q Quit",
    )
    .style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(shortcuts, area);
}
