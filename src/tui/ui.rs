use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::constants::UI_REFRESH_INTERVAL_MS;

use super::app::{App, Command, PendingGeneration, ToolRequest};
use super::render::render_ui;
use super::tab::Tab;

/// A finished backend call on its way back to the UI loop
struct GenerationOutcome {
    tab: Tab,
    result: Result<String>,
}

/// Run the terminal UI
pub async fn run_ui(mut app: App) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("❌ Quill requires an interactive terminal.");
        eprintln!("   Cannot run in non-interactive mode (pipes, redirects, etc.)");
        eprintln!("   Try running directly in your terminal: quill");
        return Err(anyhow::anyhow!("No interactive terminal available"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Channel carrying finished generations back into the loop
    let (tx, mut rx) = mpsc::channel::<GenerationOutcome>(16);

    let res = run_app(&mut terminal, &mut app, tx, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<GenerationOutcome>,
    rx: &mut mpsc::Receiver<GenerationOutcome>,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render_ui(f, app))?;

        // Handle input events
        if event::poll(Duration::from_millis(UI_REFRESH_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = map_key(key, app) {
                        if let Some(pending) = app.dispatch(command) {
                            spawn_generation(app, pending, tx.clone());
                        }
                    } else {
                        app.active_form_mut().handle_key(key);
                    }
                }
            }
        }

        // Apply finished generations
        while let Ok(outcome) = rx.try_recv() {
            app.finish_generation(outcome.tab, outcome.result);
        }

        // Expire toasts, flush due autosaves
        app.tick();

        if !app.running {
            break;
        }
    }

    Ok(())
}

/// Translate a key press into a UI command. Keys that map to no command
/// fall through to the focused form field.
fn map_key(key: KeyEvent, app: &App) -> Option<Command> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    if app.show_settings {
        return match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Command::CloseSettings),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Command::SaveSettings),
            (KeyCode::Tab, _) => Some(Command::FocusNextField),
            (KeyCode::BackTab, _) => Some(Command::FocusPrevField),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('g') => Some(Command::Generate),
            KeyCode::Char('s') => Some(Command::Save),
            KeyCode::Char('e') => Some(Command::Export),
            KeyCode::Char('y') => Some(Command::CopyOutput),
            KeyCode::Char('l') => Some(Command::ClearOutput),
            KeyCode::Char('o') => Some(Command::OpenSettings),
            _ => None,
        };
    }

    match key.code {
        // Shift+Tab cycles tools, Tab moves field focus
        KeyCode::BackTab => Some(Command::NextTab),
        KeyCode::Tab => Some(Command::FocusNextField),
        // Enter submits unless a multi-line editor has focus
        KeyCode::Enter if !app.active_form().focused_field().is_multiline() => {
            Some(Command::Generate)
        }
        KeyCode::PageUp => Some(Command::ScrollUp),
        KeyCode::PageDown => Some(Command::ScrollDown),
        _ => None,
    }
}

/// Run one tool request on the backend without blocking the UI
fn spawn_generation(app: &App, pending: PendingGeneration, tx: mpsc::Sender<GenerationOutcome>) {
    let generator = app.generator.clone();

    tokio::spawn(async move {
        let result = match pending.request {
            ToolRequest::Draft(req) => generator.draft(&req).await,
            ToolRequest::Revise(req) => generator.revise(&req).await,
            ToolRequest::Cite(req) => generator.cite(&req).await,
            ToolRequest::Check(req) => generator.check(&req).await,
        };
        let _ = tx
            .send(GenerationOutcome {
                tab: pending.tab,
                result,
            })
            .await;
    });
}
