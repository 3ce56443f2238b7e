//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]). Rendering only reads the app's
//! derived views; it never changes results or history.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::stories::Phase;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [search_area, history_area, main_area, link_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_search_bar(app, frame, search_area);
    draw_history(app, frame, history_area);
    draw_story_list(app, frame, main_area);
    draw_link(app, frame, link_area);
    draw_status_bar(app, frame, status_area);
}

fn draw_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let hint = if app.can_submit() { "" } else { "  (type a term to search)" };

    let input = Paragraph::new(Line::from(vec![
        Span::raw(app.search_term()),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);

    if editing {
        frame.set_cursor_position((cursor_x(area, app.search_term()), area.y + 1));
    }
}

/// Column just after `term` inside a bordered box, kept within the border.
fn cursor_x(area: Rect, term: &str) -> u16 {
    let width = u16::try_from(term.width()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2))
}

/// Where the highlighted story points.
fn draw_link(app: &App, frame: &mut Frame, area: Rect) {
    let Some(story) = app.selected_story() else {
        return;
    };
    let link = Paragraph::new(Line::from(vec![
        Span::styled(" Link: ", Style::default().fg(Color::DarkGray)),
        Span::styled(story.target_url(), Style::default().fg(Color::Blue)),
    ]));
    frame.render_widget(link, area);
}

fn draw_history(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(" Recent: ", Style::default().fg(Color::DarkGray))];
    for (i, term) in app.recent_searches().into_iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}] {term}", i + 1),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_story_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .visible_stories()
        .into_iter()
        .map(|story| {
            let date_str = story
                .created_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "no date".into());

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<11}", date_str),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(story.title.clone(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    format!("by {}", story.author),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} pts, {} comments", story.points, story.num_comments),
                    Style::default().fg(Color::Green),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let title = format!(
        " Stories (sort: {}{}) ",
        app.sort.label(),
        if app.reverse { ", reversed" } else { "" }
    );
    let list = List::new(list_items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let (message, color) = match app.phase() {
        Phase::Idle => ("Ready".to_string(), Color::Yellow),
        Phase::Loading => ("Loading ...".to_string(), Color::Yellow),
        Phase::Success => (app.status.clone(), Color::Yellow),
        Phase::Failure => ("Something went wrong ...".to_string(), Color::Red),
    };
    let count = app.visible_stories().len();

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(message, Style::default().fg(color)),
        Span::raw("  "),
        Span::styled(
            format!("{count} stories, {} comments", app.sum_comments()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  /: search  d: dismiss  s/r: sort  1-5: recent"),
    ]));
    frame.render_widget(status, area);
}
