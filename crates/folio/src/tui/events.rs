//! Event handling for the TUI.

use std::io::{self, Stdout};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{FolioConfig, LinkError, LinkOpener, LinkOutcome, SystemOpener};
use folio_models::SectionId;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use super::app::App;
use super::ui;

/// Result type for TUI operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize the terminal for TUI mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Register SIGTERM/SIGHUP so the loop can exit cleanly.
fn setup_signal_handler() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&flag))?;
    signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(&flag))?;
    Ok(flag)
}

/// Opener used when no system opener is installed.
struct UnavailableOpener(String);

impl LinkOpener for UnavailableOpener {
    fn open(&self, href: &str) -> std::result::Result<LinkOutcome, LinkError> {
        match folio_core::LinkKind::classify(href) {
            folio_core::LinkKind::Placeholder => Ok(LinkOutcome::Ignored),
            _ => Err(LinkError::NoOpener(self.0.clone())),
        }
    }
}

fn system_opener() -> Box<dyn LinkOpener> {
    match SystemOpener::detect() {
        Ok(opener) => {
            info!(program = %opener.program().display(), "Using link opener");
            Box::new(opener)
        }
        Err(LinkError::NoOpener(tried)) => {
            warn!(tried = %tried, "No link opener found");
            Box::new(UnavailableOpener(tried))
        }
        Err(e) => {
            warn!(error = %e, "No link opener found");
            Box::new(UnavailableOpener(e.to_string()))
        }
    }
}

/// Run the terminal viewer.
pub fn run(content: Option<&Path>, start_section: Option<&str>) -> Result<()> {
    let config = FolioConfig::from_env()?;
    let profile = crate::load_profile(content, config.content_path.as_deref())?;
    profile.validate()?;

    let start = match start_section {
        Some(s) => Some(s.parse::<SectionId>()?),
        None => None,
    };

    let quit_flag = match setup_signal_handler() {
        Ok(flag) => Some(flag),
        Err(e) => {
            eprintln!("Warning: Failed to setup signal handler: {}", e);
            None
        }
    };

    let mut app = App::new(
        profile,
        config.controller_settings(),
        system_opener(),
        Instant::now(),
        chrono::Local::now().year(),
    );

    // Setup terminal
    let mut terminal = setup_terminal()?;

    if let Some(section) = start {
        // Lay out at the real size before scrolling
        terminal.draw(|f| ui::draw(f, &mut app))?;
        app.navigate(section.as_str());
    }

    info!(frame_ms = config.frame_interval.as_millis() as u64, "Viewer started");
    let result = run_loop(&mut terminal, &mut app, config.frame_interval, quit_flag.as_ref());

    // Release host registrations before the screen goes away
    app.shutdown();
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    frame_interval: Duration,
    quit_flag: Option<&Arc<AtomicBool>>,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Wake for the next timer tick or animation frame, whichever is sooner
        let now = Instant::now();
        let timeout = app
            .controller
            .host()
            .next_deadline()
            .map(|due| due.saturating_duration_since(now))
            .map_or(frame_interval, |until| until.min(frame_interval));

        if event::poll(timeout)? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick(Instant::now());

        // Check if should quit
        if app.should_quit {
            break;
        }

        if quit_flag.is_some_and(|f| f.load(Ordering::Relaxed)) {
            info!("Signal received, exiting");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_opener() {
        let opener = UnavailableOpener("xdg-open".to_string());
        assert_eq!(opener.open("#").unwrap(), LinkOutcome::Ignored);

        let err = opener.open("https://example.com").unwrap_err();
        assert!(err.to_string().contains("xdg-open"));
    }
}
