use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use money_tracker::ui::app::{App, InputMode};
use money_tracker::ui::render;

const DB_PATH: &str = "money.db";

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.size();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(7),
                        Constraint::Min(3),
                        Constraint::Length(3),
                    ]
                    .as_ref(),
                )
                .split(size);

            render::render_entry_form(f, &app, chunks[0]);
            render::render_record_list(f, &app, chunks[1]);
            render::render_help_panel(f, &app, chunks[2]);

            if app.input_mode == InputMode::ExportPrompt {
                render::render_export_prompt(f, &app, size);
            }

            // Modal notices sit on top of everything else
            if app.notice.is_some() {
                render::render_notice(f, &app, size);
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // A notice blocks all other input until dismissed
            if app.notice.is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    app.dismiss_notice();
                }
                continue;
            }

            match app.input_mode {
                InputMode::Browsing => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('a') => app.input_mode = InputMode::Editing,
                    KeyCode::Char('e') => app.begin_export(),
                    KeyCode::Char('i') => app.show_about(),
                    KeyCode::Up => app.previous(),
                    KeyCode::Down => app.next(),
                    _ => {}
                },
                InputMode::Editing => match key.code {
                    KeyCode::Esc => app.input_mode = InputMode::Browsing,
                    KeyCode::Enter => app.add_entry()?,
                    KeyCode::Tab | KeyCode::Down => app.form.next_field(),
                    KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
                    KeyCode::Left => app.form.handle_left(),
                    KeyCode::Right => app.form.handle_right(),
                    KeyCode::PageUp => app.form.handle_page_up(),
                    KeyCode::PageDown => app.form.handle_page_down(),
                    KeyCode::Backspace => app.form.handle_backspace(),
                    KeyCode::Char(c) => app.form.handle_input(c),
                    _ => {}
                },
                InputMode::ExportPrompt => match key.code {
                    KeyCode::Enter => app.submit_export()?,
                    KeyCode::Esc => app.cancel_export(),
                    KeyCode::Backspace => {
                        app.export_input.pop();
                    }
                    KeyCode::Char(c) => app.export_input.push(c),
                    _ => {}
                },
            }
        }
    }
}

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new(DB_PATH).and_then(|app| run_app(&mut terminal, app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
