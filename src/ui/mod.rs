use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::messages::{CategoryFilter, Message};

pub mod plain;
pub mod presentation;

use presentation::{
    attachment_badge, category_badge, category_icon, clamp_text, format_timestamp,
    priority_badge, Badge, ARCHIVE_MARKER, EMPTY_STATE_TEXT,
};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Search + category selector
            Constraint::Min(0),    // Message list
            Constraint::Length(3), // Status / key help
        ])
        .split(size);

    let visible = app.visible_messages();

    draw_title_bar(f, app, visible.len(), chunks[0]);
    draw_controls(f, app, chunks[1]);
    draw_message_list(f, app, &visible, chunks[2]);
    draw_status_bar(f, app, chunks[3]);
}

fn draw_title_bar(f: &mut Frame, app: &App, shown: usize, area: Rect) {
    let title = format!(
        " LinkedIn Message Organizer | {} | {} of {} messages ",
        app.filter().category().label(),
        shown,
        app.store().len()
    );

    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Blue))
        .title(" Inbox ");

    let title_paragraph = Paragraph::new(title)
        .block(title_block)
        .alignment(Alignment::Center);

    f.render_widget(title_paragraph, area);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let editing = app.input_mode == InputMode::Editing;
    let search_style = if editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .style(search_style);

    let query = app.filter().query();
    let search_text = if query.is_empty() && !editing {
        Line::from(Span::styled(
            "Search messages...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(query)
    };

    f.render_widget(Paragraph::new(search_text).block(search_block), chunks[0]);

    if editing {
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let offset = u16::try_from(app.cursor_position).unwrap_or(u16::MAX);
        let x = chunks[0].x.saturating_add(1).saturating_add(offset).min(max_x);
        f.set_cursor(x, chunks[0].y + 1);
    }

    let current = app.filter().category();
    let mut spans = Vec::new();
    for (index, option) in CategoryFilter::ALL_OPTIONS.iter().enumerate() {
        let style = if *option == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(
                " {} {} ({}) ",
                index,
                option.label(),
                app.store().count_by_category(option)
            ),
            style,
        ));
    }

    let filter_block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter ")
        .style(Style::default().fg(Color::White));

    f.render_widget(Paragraph::new(Line::from(spans)).block(filter_block), chunks[1]);
}

fn badge_span(badge: Badge) -> Span<'static> {
    Span::styled(format!("[{}]", badge.label), badge.style)
}

fn message_item(message: &Message, date_format: &str, width: usize) -> ListItem<'static> {
    let icon = category_icon(&message.category);

    let mut header = vec![
        Span::styled(
            format!("{} ", icon.glyph()),
            Style::default().fg(icon.color()),
        ),
        Span::styled(
            message.sender.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    if message.has_attachments {
        header.push(badge_span(attachment_badge()));
        header.push(Span::raw(" "));
    }
    header.push(Span::styled(
        format_timestamp(&message.timestamp, date_format),
        Style::default().fg(Color::Gray),
    ));
    header.push(Span::raw("  "));
    header.push(Span::styled(ARCHIVE_MARKER, Style::default().fg(Color::DarkGray)));

    let content = Line::from(Span::styled(
        format!("  {}", clamp_text(&message.content, width.saturating_sub(2))),
        Style::default().fg(Color::Gray),
    ));

    let badges = Line::from(vec![
        Span::raw("  "),
        badge_span(priority_badge(message.priority)),
        Span::raw(" "),
        badge_span(category_badge(&message.category)),
    ]);

    ListItem::new(vec![Line::from(header), content, badges, Line::from("")])
}

fn draw_message_list(f: &mut Frame, app: &App, visible: &[&Message], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Messages ")
        .style(Style::default().fg(Color::Cyan));

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_STATE_TEXT,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    // Room for borders and the highlight symbol.
    let width = area.width.saturating_sub(5) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .map(|message| message_item(message, &app.date_format, width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (title, style) = match app.input_mode {
        InputMode::Normal => (" [NORMAL] ", Style::default().fg(Color::White)),
        InputMode::Editing => (" [SEARCH] ", Style::default().fg(Color::Green)),
    };

    let help = match app.input_mode {
        InputMode::Normal => {
            "/=search  Tab=next filter  0-3=pick filter  Up/Down=select  Esc=clear search  q=quit"
        }
        InputMode::Editing => "type to filter  Enter=done  Esc=clear and close",
    };

    let text = match &app.status_message {
        Some(status) => format!("{}  |  {}", status, help),
        None => help.to_string(),
    };

    let block = Block::default().borders(Borders::ALL).title(title).style(style);
    f.render_widget(Paragraph::new(text).block(block), area);
}
