//! TUI application state: pages, chat transcript, inputs, latest result.

use chrono::{DateTime, Local};

use crate::core::model::AnalysisResult;
use crate::core::report::DiseaseReport;

/// Greeting shown when the chatbot page first opens.
pub(crate) const GREETING: &str =
    "Hello! I am the Plant Doctor Assistant. Ask me about a plant disease by typing its name below.";

/// Which page is visible (Tab switches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Analyzer,
    Chatbot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the append-only chat transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Local>,
}

/// Single-line text input with a byte-index cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    /// Byte index into `text`; always on a char boundary.
    pub cursor: usize,
}

impl InputState {
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.text.remove(idx);
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the trimmed content and clear the input.
    pub fn take(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        text.trim().to_string()
    }

    /// Cursor position counted in chars (for terminal cursor placement).
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

pub struct App {
    pub page: Page,
    /// Chat transcript; grows only at the end, lives for the session.
    pub messages: Vec<ChatMessage>,
    /// Image path input on the analyzer page.
    pub analyzer_input: InputState,
    /// Disease name input on the chatbot page.
    pub chat_input: InputState,
    /// Latest analysis; replaced wholesale on each new upload.
    pub result: Option<AnalysisResult>,
    /// Panels and gauge derived from `result`.
    pub report: Option<DiseaseReport>,
    /// Error banner on the analyzer page.
    pub error: Option<String>,
    /// Transient status line (export path, clipboard note).
    pub status: Option<String>,
    /// A request is in flight; input is disabled until it settles.
    pub waiting: bool,
    /// Chat scroll offset in lines, measured from the bottom.
    pub scroll: usize,
    strip_quotes: bool,
}

impl App {
    pub fn new(strip_quotes: bool) -> Self {
        let mut app = Self {
            page: Page::Analyzer,
            messages: Vec::new(),
            analyzer_input: InputState::default(),
            chat_input: InputState::default(),
            result: None,
            report: None,
            error: None,
            status: None,
            waiting: false,
            scroll: 0,
            strip_quotes,
        };
        app.push_bot(GREETING.to_string());
        app
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        match self.page {
            Page::Analyzer => &mut self.analyzer_input,
            Page::Chatbot => &mut self.chat_input,
        }
    }

    pub fn input(&self) -> &InputState {
        match self.page {
            Page::Analyzer => &self.analyzer_input,
            Page::Chatbot => &self.chat_input,
        }
    }

    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text,
            at: Local::now(),
        });
        self.scroll = 0;
    }

    pub fn push_bot(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text,
            at: Local::now(),
        });
        self.scroll = 0;
    }

    /// Install a fresh analysis, replacing any previous one.
    pub fn set_result(&mut self, result: AnalysisResult) {
        self.report = Some(DiseaseReport::from_result(&result, self.strip_quotes));
        self.result = Some(result);
        self.error = None;
    }

    /// Record a failed analysis; the previous result stays cleared.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.result = None;
        self.report = None;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_greets_on_chat_page() {
        let app = App::new(true);
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].sender, Sender::Bot);
        assert!(app.messages[0].text.contains("Plant Doctor"));
    }

    #[test]
    fn transcript_is_append_only_and_ordered() {
        let mut app = App::new(true);
        app.push_user("rust".to_string());
        app.push_bot("a fungal disease".to_string());
        let senders: Vec<_> = app.messages.iter().map(|m| m.sender).collect();
        assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
    }

    #[test]
    fn set_result_builds_report_and_clears_error() {
        use crate::core::model::{AdviceRecord, AnalysisResult};
        let mut app = App::new(true);
        app.set_error("old failure".to_string());
        app.set_result(AnalysisResult {
            predicted_class: "rust".to_string(),
            confidence: 0.9,
            chatbot_answer: AdviceRecord {
                symptoms: "* spots".to_string(),
                causes: String::new(),
                prevention: String::new(),
                treatment: String::new(),
            },
        });
        assert!(app.error.is_none());
        assert_eq!(app.report.as_ref().map(|r| r.panels.len()), Some(4));
    }

    #[test]
    fn input_editing_respects_char_boundaries() {
        let mut input = InputState::default();
        for c in "café".chars() {
            input.insert(c);
        }
        input.move_left();
        input.backspace(); // removes 'f'
        assert_eq!(input.text, "caé");
        input.move_end();
        assert_eq!(input.cursor_chars(), 3);
    }

    #[test]
    fn take_trims_and_clears() {
        let mut input = InputState::default();
        for c in "  leaf.png ".chars() {
            input.insert(c);
        }
        assert_eq!(input.take(), "leaf.png");
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
    }
}
