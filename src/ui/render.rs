use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::app::{App, InputMode, Notice};
use super::form::FormField;

pub fn render_entry_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.form;

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        field_line(
            "Date",
            form.date_string(),
            editing && form.focused_field == FormField::Date,
            true,
        ),
        field_line(
            "Category",
            form.category().to_string(),
            editing && form.focused_field == FormField::Category,
            true,
        ),
        field_line(
            "Amount",
            form.amount.clone(),
            editing && form.focused_field == FormField::Amount,
            false,
        ),
        field_line(
            "Type",
            form.kind().to_string(),
            editing && form.focused_field == FormField::Kind,
            true,
        ),
        field_line(
            "Notes",
            form.notes.clone(),
            editing && form.focused_field == FormField::Notes,
            false,
        ),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" New Entry ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    f.render_widget(panel, area);
}

// Selector fields get < > markers when focused, text fields get a cursor
fn field_line(label: &str, value: String, focused: bool, selector: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let display = if focused && selector {
        format!("< {value} >")
    } else if focused {
        format!("{value}_")
    } else {
        value
    };

    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{label:>9}: "), label_style),
        Span::styled(display, value_style),
    ])
}

pub fn render_record_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.records.iter().map(|r| r.to_list_item()).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Records ({} total) ", app.records.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    f.render_stateful_widget(list, area, &mut app.list_state.clone());
}

pub fn render_help_panel(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.input_mode {
        InputMode::Browsing => vec![Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" Move • "),
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(" Add entry • "),
            Span::styled("e", Style::default().fg(Color::Yellow)),
            Span::raw(" Export CSV • "),
            Span::styled("i", Style::default().fg(Color::Yellow)),
            Span::raw(" About • "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])],
        InputMode::Editing => vec![Line::from(vec![
            Span::styled("Tab/↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(" Field • "),
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(" Adjust • "),
            Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
            Span::raw(" Month • "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" Add • "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" Done"),
        ])],
        InputMode::ExportPrompt => vec![Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" Save • "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ])],
    };

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Help "),
        )
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}

pub fn render_export_prompt(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(if app.export_input.is_empty() {
        Line::from("Enter destination path...").style(Style::default().fg(Color::DarkGray))
    } else {
        Line::from(app.export_input.as_str())
    })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Export CSV (Enter to save, Esc to cancel)")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    let popup_area = centered_rect(60, 10, area);
    f.render_widget(Clear, popup_area);
    f.render_widget(input, popup_area);
}

pub fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (title, border_color, text) = match &app.notice {
        Some(Notice::ValidationError(message)) => (
            " Validation Error ",
            Color::Red,
            vec![
                Line::from(message.as_str()),
                Line::from(""),
                dismiss_line(),
            ],
        ),
        Some(Notice::ExportDone(path)) => (
            " Export Complete ",
            Color::Green,
            vec![
                Line::from("CSV exported to:"),
                Line::from(Span::styled(
                    path.display().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                dismiss_line(),
            ],
        ),
        Some(Notice::About) => (
            " About Money Tracker ",
            Color::Cyan,
            vec![
                Line::from("💰 Money Tracker"),
                Line::from(""),
                Line::from("A personal income & expense log."),
                Line::from("SQLite storage, rupiah formatting, CSV export."),
                Line::from(""),
                dismiss_line(),
            ],
        ),
        None => return,
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .alignment(Alignment::Center);

    let popup_area = centered_rect(50, 30, area);
    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

fn dismiss_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw("/"),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" close"),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(layout[1])[1]
}
