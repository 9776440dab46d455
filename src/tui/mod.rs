//! TUI: two-page terminal interface (image analyzer and disease chatbot).

mod app;
mod constants;
mod draw;
mod handlers;
mod request;
mod text;

#[allow(unused_imports)]
pub use app::{App, ChatMessage, Page};

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Runtime;

use crate::core::api::ApiClient;
use crate::core::config::Config;

use draw::draw;
use handlers::{HandleKeyContext, HandleResult};
use request::PendingRequest;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the backend calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );
    let client = Arc::new(
        ApiClient::new(config.as_ref()).map_err(|e| io::Error::other(e.to_string()))?,
    );

    let mut app = App::new(config.strip_quotes);
    let mut pending: Option<PendingRequest> = None;

    loop {
        if let Some(ref p) = pending
            && let Ok(outcome) = p.rx.try_recv()
        {
            handlers::apply_outcome(&mut app, outcome);
            pending = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(
                key,
                HandleKeyContext {
                    app: &mut app,
                    client: &client,
                    rt: &rt,
                    pending: &mut pending,
                },
            );
            if result == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
