//! Terminal UI example using crossterm and ratatui.
//!
//! An editable text area driven by keybindings and the default editor.
//! Run with: cargo run --example text_area

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use cui_edit::{Keybindings, View, backend::translate_event};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const WELCOME: &str = "Welcome to cui_edit!\n\nType to edit. Long lines wrap at word boundaries.\nCtrl+W deletes a word, Ctrl+Y yanks it back, Insert toggles overwrite.\nPress F2 to toggle wrapping and Ctrl+C to quit.\n";

#[derive(Default)]
struct App {
    message: String,
    should_quit: bool,
}

fn keybindings() -> anyhow::Result<Keybindings<App>> {
    let mut bindings = Keybindings::new();
    bindings.bind_str("", "ctrl+c", |app: &mut App, _| {
        app.should_quit = true;
        Ok(())
    })?;
    bindings.bind_str("editor", "f2", |app: &mut App, view| {
        if let Some(view) = view {
            let text_area = view.text_area_mut();
            let wrap = !text_area.config().auto_wrap;
            text_area.set_auto_wrap(wrap);
            app.message = format!("wrapping {}", if wrap { "on" } else { "off" });
        }
        Ok(())
    })?;
    Ok(bindings)
}

fn ui(f: &mut Frame, view: &View, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.area());

    // One line per display row
    let text_area = view.text_area();
    let mut lines = vec![String::new()];
    for cell in text_area.cells() {
        if cell.is_line_break() {
            lines.push(String::new());
        } else if let Some(line) = lines.last_mut() {
            line.push_str(&cell.text);
        }
    }
    let lines: Vec<Line> = lines.into_iter().map(Line::from).collect();

    let title = if text_area.is_overwrite() {
        "cui_edit demo [OVR]"
    } else {
        "cui_edit demo"
    };
    let text = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(text, chunks[0]);

    // Status line
    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    let (x, y) = view.cursor_xy();
    f.set_cursor_position((chunks[0].x + 1 + x as u16, chunks[0].y + 1 + y as u16));
}

fn main() -> anyhow::Result<()> {
    let bindings = keybindings()?;

    let mut view = View::new("editor");
    view.set_editable(true);
    view.text_area_mut().set_auto_wrap(true);
    view.text_area_mut().set_content(WELCOME);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let mut width = 0;

    loop {
        let inner = terminal.size()?.width.saturating_sub(4) as usize;
        if inner != width {
            width = inner;
            view.resize(width);
        }
        terminal.draw(|f| ui(f, &view, &app))?;

        let event = event::read()?;
        let Some((key, modifier)) = translate_event(&event) else {
            continue;
        };
        if key.name().is_mouse() {
            continue;
        }

        let handled = bindings.dispatch(&mut app, Some(&mut view), key, modifier)?;
        if !handled {
            app.message = format!("unbound: {key} ({modifier})");
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}
