//! Key handling and request outcome processing.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Runtime;

use crate::core::api::{ApiClient, ApiError};
use crate::core::report;

use super::app::{App, Page};
use super::constants::SCROLL_LINES_SMALL;
use super::request::{self, Outcome, PendingRequest};

#[derive(PartialEq, Eq)]
pub(super) enum HandleResult {
    Continue,
    Break,
}

pub(super) struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a Arc<ApiClient>,
    pub rt: &'a Arc<Runtime>,
    pub pending: &'a mut Option<PendingRequest>,
}

pub(super) fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        client,
        rt,
        pending,
    } = ctx;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return HandleResult::Break;
    }

    // While a request is outstanding only Esc (cancel) is honored; this
    // is what guarantees one in-flight request per user action.
    if let Some(p) = pending.as_ref() {
        if key.code == KeyCode::Esc {
            p.cancel.cancel();
        }
        return HandleResult::Continue;
    }

    match key.code {
        KeyCode::Tab => {
            app.page = match app.page {
                Page::Analyzer => Page::Chatbot,
                Page::Chatbot => Page::Analyzer,
            };
            app.status = None;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            save_export(app);
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            copy_export(app);
        }
        KeyCode::Up if app.page == Page::Chatbot => app.scroll_up(SCROLL_LINES_SMALL),
        KeyCode::Down if app.page == Page::Chatbot => app.scroll_down(SCROLL_LINES_SMALL),
        KeyCode::Enter => submit(app, client, rt, pending),
        KeyCode::Backspace => app.input_mut().backspace(),
        KeyCode::Left => app.input_mut().move_left(),
        KeyCode::Right => app.input_mut().move_right(),
        KeyCode::Home => app.input_mut().move_home(),
        KeyCode::End => app.input_mut().move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_mut().insert(c);
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Submit the focused input: upload the image or send the chat query.
fn submit(
    app: &mut App,
    client: &Arc<ApiClient>,
    rt: &Arc<Runtime>,
    pending: &mut Option<PendingRequest>,
) {
    match app.page {
        Page::Analyzer => {
            let path_text = app.analyzer_input.text.trim().to_string();
            if path_text.is_empty() {
                return;
            }
            let path = PathBuf::from(&path_text);
            if !path.is_file() {
                app.set_error(format!("No such file: {}", path_text));
                return;
            }
            log::info!("analyzing {}", path.display());
            app.error = None;
            app.status = None;
            app.waiting = true;
            *pending = Some(request::spawn_analyze(rt, client, path));
        }
        Page::Chatbot => {
            let query = app.chat_input.take();
            if query.is_empty() {
                return;
            }
            app.push_user(query.clone());
            app.waiting = true;
            *pending = Some(request::spawn_chat(rt, client, query));
        }
    }
}

/// Apply a settled request: install the result or surface the error, and
/// re-enable input either way.
pub(super) fn apply_outcome(app: &mut App, outcome: Outcome) {
    app.waiting = false;
    match outcome {
        Outcome::Analysis(Ok(result)) => {
            app.set_result(result);
            app.status = Some("Analysis complete. Ctrl+S saves JSON, Ctrl+Y copies it.".to_string());
        }
        Outcome::Analysis(Err(ApiError::Cancelled)) => {
            app.status = Some("Analysis cancelled.".to_string());
        }
        Outcome::Analysis(Err(e)) => {
            log::warn!("analysis failed: {}", e);
            app.set_error(e.to_string());
        }
        Outcome::ChatReply(Ok(message)) => app.push_bot(message),
        Outcome::ChatReply(Err(ApiError::Cancelled)) => {
            app.push_bot("Request cancelled.".to_string());
        }
        Outcome::ChatReply(Err(e)) => {
            log::warn!("chatbot query failed: {}", e);
            app.push_bot(format!("Sorry, I ran into an error: {}", e));
        }
    }
}

/// Ctrl+S: write the JSON export to the download directory.
fn save_export(app: &mut App) {
    let Some(result) = app.result.as_ref() else {
        app.status = Some("Nothing to save yet.".to_string());
        return;
    };
    match report::save_report(result) {
        Ok(path) => app.status = Some(format!("Saved {}", path.display())),
        Err(e) => app.status = Some(format!("Save failed: {}", e)),
    }
}

/// Ctrl+Y: copy the JSON export to the system clipboard.
fn copy_export(app: &mut App) {
    let Some(result) = app.result.as_ref() else {
        app.status = Some("Nothing to copy yet.".to_string());
        return;
    };
    let json = report::export_json(result);
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(json)) {
        Ok(()) => app.status = Some("Export JSON copied to clipboard.".to_string()),
        Err(e) => app.status = Some(format!("Clipboard failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AdviceRecord, AnalysisResult};

    fn result() -> AnalysisResult {
        AnalysisResult {
            predicted_class: "leaf blight".to_string(),
            confidence: 0.6,
            chatbot_answer: AdviceRecord {
                symptoms: "* spots".to_string(),
                causes: "* spores".to_string(),
                prevention: String::new(),
                treatment: String::new(),
            },
        }
    }

    #[test]
    fn analysis_error_keeps_app_usable() {
        let mut app = App::new(true);
        apply_outcome(
            &mut app,
            Outcome::Analysis(Err(ApiError::InvalidPayload("bad".to_string()))),
        );
        assert!(!app.waiting);
        assert!(app.error.as_deref().unwrap_or("").contains("invalid response"));
        assert!(app.report.is_none());
    }

    #[test]
    fn chat_error_becomes_bot_message() {
        let mut app = App::new(true);
        apply_outcome(
            &mut app,
            Outcome::ChatReply(Err(ApiError::InvalidPayload(
                "missing chatbot_message".to_string(),
            ))),
        );
        let last = app.messages.last().expect("bot message appended");
        assert!(last.text.starts_with("Sorry, I ran into an error:"));
    }

    #[test]
    fn successful_analysis_replaces_previous_error() {
        let mut app = App::new(true);
        app.set_error("earlier".to_string());
        apply_outcome(&mut app, Outcome::Analysis(Ok(result())));
        assert!(app.error.is_none());
        assert_eq!(
            app.report.as_ref().map(|r| r.confidence.percentage),
            Some(60)
        );
    }

    #[test]
    fn cancelled_chat_reports_in_transcript() {
        let mut app = App::new(true);
        apply_outcome(&mut app, Outcome::ChatReply(Err(ApiError::Cancelled)));
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("Request cancelled.")
        );
    }
}
