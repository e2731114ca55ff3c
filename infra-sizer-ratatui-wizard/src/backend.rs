//! Ratatui implementation of the Frontend trait.
//!
//! Provides a full-screen terminal UI with a progress bar, a prompt panel,
//! an input panel and a scrollable report screen.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use infra_sizer::{
    ExportDecision, Frontend, InlineReport, Questionnaire, QuestionnaireError, SizerError,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, IsTerminal, Stdout};
use thiserror::Error;
use tracing::{debug, trace};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Error type for the Ratatui frontend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the questionnaire (pressed Esc).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<RatatuiError> for SizerError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => SizerError::Cancelled,
            other => SizerError::frontend(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub placeholder: Color,
    pub highlight: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            placeholder: Color::DarkGray,
            highlight: Color::Yellow,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

impl Theme {
    /// Terminal default colors only.
    pub fn plain() -> Self {
        Self {
            primary: Color::Reset,
            secondary: Color::Reset,
            text: Color::Reset,
            placeholder: Color::Reset,
            highlight: Color::Reset,
            success: Color::Reset,
            border: Color::Reset,
        }
    }
}

/// Full-screen questionnaire frontend.
///
/// Questions are shown one at a time. Enter submits the typed answer (blank
/// answers are ignored), Esc cancels. Once every question is answered the
/// report is shown; Enter asks for the download and Esc leaves without one.
#[derive(Debug, Clone)]
pub struct RatatuiWizard {
    /// Title shown at the top of the wizard.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiWizard {
    /// Create a new Ratatui frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: crate::TITLE.to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Tui, RatatuiError> {
        if !io::stdout().is_terminal() {
            return Err(RatatuiError::Terminal("stdout is not a terminal".to_string()));
        }
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(&self, terminal: &mut Tui) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn ask_all(&self, terminal: &mut Tui, session: &mut Questionnaire) -> Result<(), RatatuiError> {
        let mut state = WizardState::new(session);

        loop {
            terminal.draw(|frame| self.draw_question(frame, session, &state))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match state.handle_event(session, key) {
                    Flow::Continue => {}
                    Flow::Finished => return Ok(()),
                    Flow::Cancelled => return Err(RatatuiError::Cancelled),
                }
            }
        }
    }

    fn show_report(
        &self,
        terminal: &mut Tui,
        report: &InlineReport,
    ) -> Result<ExportDecision, RatatuiError> {
        let mut view = ReportView::default();

        loop {
            terminal.draw(|frame| self.draw_report(frame, report, &view))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_interrupt(&key) {
                    return Err(RatatuiError::Cancelled);
                }
                if let Some(decision) = view.handle_key(key.code) {
                    return Ok(decision);
                }
            }
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, text: &str) {
        let header = Paragraph::new(text.to_string())
            .style(Style::default().fg(self.theme.primary).bold())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        frame.render_widget(header, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect, text: String) {
        let help = Paragraph::new(text)
            .style(Style::default().fg(self.theme.border))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        frame.render_widget(help, area);
    }

    fn draw_progress(&self, frame: &mut Frame, area: Rect, answered: usize, total: usize) {
        let current = (answered + 1).min(total);
        let progress_text = format!(" {current} / {total} ");

        let bar_width = area.width.saturating_sub(2);
        let text_width = progress_text.len() as u16;
        let ratio = if total == 0 {
            0.0
        } else {
            answered as f32 / total as f32
        };
        let filled_width = (ratio * bar_width as f32) as u16;
        let bar_x = area.x + 1;

        let track = Paragraph::new("─".repeat(bar_width as usize))
            .style(Style::default().fg(self.theme.border));
        frame.render_widget(track, Rect::new(bar_x, area.y, bar_width, 1));

        if filled_width > 0 {
            let filled = Paragraph::new("━".repeat(filled_width as usize))
                .style(Style::default().fg(self.theme.primary));
            frame.render_widget(filled, Rect::new(bar_x, area.y, filled_width, 1));
        }

        if area.height > 1 {
            let text_x = bar_x + bar_width.saturating_sub(text_width) / 2;
            let text =
                Paragraph::new(progress_text).style(Style::default().fg(self.theme.secondary));
            frame.render_widget(
                text,
                Rect::new(text_x, area.y + 1, text_width.min(bar_width), 1),
            );
        }
    }

    fn draw_question(&self, frame: &mut Frame, session: &Questionnaire, state: &WizardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Progress bar
                Constraint::Min(7),    // Content
                Constraint::Length(3), // Help
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0], &self.title);

        let (answered, total) = session.progress();
        self.draw_progress(frame, chunks[1], answered, total);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // Prompt
                Constraint::Length(3), // Input
            ])
            .split(chunks[2]);

        if let Some(prompt) = session.current_prompt() {
            let question = Paragraph::new(prompt.ask().to_string())
                .style(Style::default().fg(self.theme.text))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(self.theme.primary))
                        .title(" Question ")
                        .title_style(Style::default().fg(self.theme.highlight)),
                );
            frame.render_widget(question, content[0]);

            let pending = session.state().pending_input();
            let inner_width = content[1].width.saturating_sub(2);
            let column = state.cursor_column(pending);
            let offset = (column + 1).saturating_sub(inner_width);

            let input = if pending.is_empty() {
                Paragraph::new(prompt.placeholder().to_string())
                    .style(Style::default().fg(self.theme.placeholder).italic())
            } else {
                Paragraph::new(pending.to_string())
                    .style(Style::default().fg(self.theme.text))
                    .scroll((0, offset))
            };
            let input = input.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border))
                    .title(" Answer ")
                    .title_style(Style::default().fg(self.theme.secondary)),
            );
            frame.render_widget(input, content[1]);

            let cursor_x = content[1].x + 1 + column - offset;
            let cursor_y = content[1].y + 1;
            frame.set_cursor_position((cursor_x, cursor_y));
        }

        self.draw_help(
            frame,
            chunks[3],
            format!("Enter: {}  Esc: Cancel", session.submit_label()),
        );
    }

    fn draw_report(&self, frame: &mut Frame, report: &InlineReport, view: &ReportView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Sections
                Constraint::Length(3), // Help
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0], &report.heading);

        let mut lines = Vec::new();
        for section in &report.sections {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                section.title.clone(),
                Style::default().fg(self.theme.highlight).bold(),
            )));
            for item in &section.items {
                lines.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(self.theme.primary)),
                    Span::styled(item.clone(), Style::default().fg(self.theme.text)),
                ]));
            }
        }

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((view.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.success)),
            );
        frame.render_widget(body, chunks[1]);

        self.draw_help(
            frame,
            chunks[2],
            format!("Enter: {}  Esc: Quit  ↑/↓: Scroll", report.export_label),
        );
    }
}

/// What the question loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Finished,
    Cancelled,
}

/// Cursor for the answer being typed. The text itself lives in the
/// questionnaire's pending input.
#[derive(Debug, Default)]
struct WizardState {
    /// Cursor position in characters.
    cursor_pos: usize,
}

fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map_or(text.len(), |(index, _)| index)
}

/// Ctrl+C, which raw mode delivers as a plain key press.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

impl WizardState {
    fn new(session: &Questionnaire) -> Self {
        Self {
            cursor_pos: session.state().pending_input().chars().count(),
        }
    }

    fn handle_event(&mut self, session: &mut Questionnaire, key: KeyEvent) -> Flow {
        if is_interrupt(&key) {
            return Flow::Cancelled;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char(_)) {
            return Flow::Continue;
        }
        self.handle_key(session, key.code)
    }

    /// Display width of the text left of the cursor.
    fn cursor_column(&self, text: &str) -> u16 {
        let before = &text[..byte_index(text, self.cursor_pos)];
        u16::try_from(Span::raw(before).width()).unwrap_or(u16::MAX)
    }

    fn handle_key(&mut self, session: &mut Questionnaire, key: KeyCode) -> Flow {
        match key {
            KeyCode::Esc => Flow::Cancelled,
            KeyCode::Enter => self.submit(session),
            other => {
                self.edit(session, other);
                Flow::Continue
            }
        }
    }

    fn submit(&mut self, session: &mut Questionnaire) -> Flow {
        match session.submit_pending() {
            Ok(state) => {
                self.cursor_pos = 0;
                if state.is_complete() {
                    Flow::Finished
                } else {
                    Flow::Continue
                }
            }
            Err(QuestionnaireError::EmptyInput) => {
                trace!("ignoring blank submission");
                Flow::Continue
            }
            Err(QuestionnaireError::AlreadyComplete) => Flow::Finished,
        }
    }

    fn edit(&mut self, session: &mut Questionnaire, key: KeyCode) {
        let mut input = session.state().pending_input().to_string();
        let len = input.chars().count();

        match key {
            KeyCode::Char(c) => {
                input.insert(byte_index(&input, self.cursor_pos), c);
                self.cursor_pos += 1;
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                input.remove(byte_index(&input, self.cursor_pos));
            }
            KeyCode::Delete if self.cursor_pos < len => {
                input.remove(byte_index(&input, self.cursor_pos));
            }
            KeyCode::Left => self.cursor_pos = self.cursor_pos.saturating_sub(1),
            KeyCode::Right => self.cursor_pos = (self.cursor_pos + 1).min(len),
            KeyCode::Home => self.cursor_pos = 0,
            KeyCode::End => self.cursor_pos = len,
            _ => return,
        }

        session.set_pending_input(input);
    }
}

#[derive(Debug, Default)]
struct ReportView {
    scroll: u16,
}

impl ReportView {
    fn handle_key(&mut self, key: KeyCode) -> Option<ExportDecision> {
        match key {
            KeyCode::Enter | KeyCode::Char('d') => Some(ExportDecision::Export),
            KeyCode::Esc | KeyCode::Char('q') => Some(ExportDecision::Skip),
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }
}

impl Frontend for RatatuiWizard {
    type Error = RatatuiError;

    fn collect(&self, session: &mut Questionnaire) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.ask_all(&mut terminal, session);
        self.restore_terminal(&mut terminal)?;

        debug!(complete = session.is_complete(), "ratatui wizard closed");
        result
    }

    fn present(&self, report: &InlineReport) -> Result<ExportDecision, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.show_report(&mut terminal, report);
        self.restore_terminal(&mut terminal)?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_sizer::{Answers, PromptKey, Report};
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn type_text(state: &mut WizardState, session: &mut Questionnaire, text: &str) {
        for c in text.chars() {
            assert_eq!(state.handle_key(session, KeyCode::Char(c)), Flow::Continue);
        }
    }

    #[test]
    fn wizard_creation() {
        let wizard = RatatuiWizard::new();
        assert_eq!(wizard.title, "Infra Sizer Chatbot");
        let _with_title = RatatuiWizard::new().with_title("Test");
        let _with_theme = RatatuiWizard::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Questionnaire cancelled by user");
        assert!(SizerError::from(err).is_cancelled());

        let err = RatatuiError::Terminal("test error".to_string());
        assert_eq!(err.to_string(), "Terminal error: test error");
        assert!(!SizerError::from(err).is_cancelled());
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.placeholder, Color::DarkGray);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(Theme::plain().primary, Color::Reset);
    }

    #[test]
    fn typing_fills_pending_input() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        type_text(&mut state, &mut session, "Chatbt");
        state.handle_key(&mut session, KeyCode::Left);
        type_text(&mut state, &mut session, "o");
        assert_eq!(session.state().pending_input(), "Chatbot");

        state.handle_key(&mut session, KeyCode::Home);
        state.handle_key(&mut session, KeyCode::Delete);
        state.handle_key(&mut session, KeyCode::End);
        state.handle_key(&mut session, KeyCode::Backspace);
        assert_eq!(session.state().pending_input(), "hatbo");
        assert_eq!(state.cursor_pos, 5);
    }

    #[test]
    fn editing_handles_multibyte_characters() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        type_text(&mut state, &mut session, "größe");
        state.handle_key(&mut session, KeyCode::Left);
        state.handle_key(&mut session, KeyCode::Backspace);
        assert_eq!(session.state().pending_input(), "gröe");
    }

    #[test]
    fn enter_submits_and_advances() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        type_text(&mut state, &mut session, "Chatbot");
        assert_eq!(state.handle_key(&mut session, KeyCode::Enter), Flow::Continue);

        assert_eq!(session.answers().get(PromptKey::UseCase), Some("Chatbot"));
        assert_eq!(session.state().pending_input(), "");
        assert_eq!(state.cursor_pos, 0);
        assert_eq!(session.current_prompt().unwrap().key(), PromptKey::Workload);
    }

    #[test]
    fn blank_enter_is_ignored() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        type_text(&mut state, &mut session, "  ");
        assert_eq!(state.handle_key(&mut session, KeyCode::Enter), Flow::Continue);
        assert!(session.answers().is_empty());
        assert_eq!(session.state().current_index(), 0);
    }

    #[test]
    fn last_answer_finishes() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        let mut last = Flow::Continue;
        for key in PromptKey::ALL {
            type_text(&mut state, &mut session, key.as_str());
            last = state.handle_key(&mut session, KeyCode::Enter);
        }
        assert_eq!(last, Flow::Finished);
        assert!(session.is_complete());
    }

    #[test]
    fn escape_cancels() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);
        assert_eq!(state.handle_key(&mut session, KeyCode::Esc), Flow::Cancelled);
    }

    #[test]
    fn ctrl_c_cancels_without_typing() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        let other = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_event(&mut session, other), Flow::Continue);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_event(&mut session, ctrl_c), Flow::Cancelled);
        assert_eq!(session.state().pending_input(), "");

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&plain_c));
        assert_eq!(state.handle_event(&mut session, plain_c), Flow::Continue);
        assert_eq!(session.state().pending_input(), "c");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut session = Questionnaire::standard();
        let mut state = WizardState::new(&session);

        type_text(&mut state, &mut session, "日本語ab");
        assert_eq!(state.cursor_column(session.state().pending_input()), 8);

        state.handle_key(&mut session, KeyCode::Home);
        state.handle_key(&mut session, KeyCode::Right);
        assert_eq!(state.cursor_column(session.state().pending_input()), 2);
    }

    #[test]
    fn long_answer_scrolls_to_cursor() {
        let wizard = RatatuiWizard::new();
        let mut session = Questionnaire::standard();
        session.set_pending_input(format!("start{}END", "x".repeat(80)));
        let state = WizardState::new(&session);
        let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();

        terminal
            .draw(|frame| wizard.draw_question(frame, &session, &state))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("xxxEND"));
        assert!(!text.contains("start"));
    }

    #[test]
    fn report_keys_choose_decision() {
        let mut view = ReportView::default();
        assert_eq!(view.handle_key(KeyCode::Down), None);
        assert_eq!(view.scroll, 1);
        assert_eq!(view.handle_key(KeyCode::Up), None);
        assert_eq!(view.handle_key(KeyCode::Up), None);
        assert_eq!(view.scroll, 0);
        assert_eq!(view.handle_key(KeyCode::Enter), Some(ExportDecision::Export));
        assert_eq!(view.handle_key(KeyCode::Esc), Some(ExportDecision::Skip));
    }

    #[test]
    fn question_screen_shows_prompt_and_placeholder() {
        let wizard = RatatuiWizard::new();
        let session = Questionnaire::standard();
        let state = WizardState::new(&session);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| wizard.draw_question(frame, &session, &state))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Infra Sizer Chatbot"));
        assert!(text.contains(" 1 / 10 "));
        assert!(text.contains("Hey there! What is your use case?"));
        assert!(text.contains("Type your answer here..."));
        assert!(text.contains("Enter: Next"));
    }

    #[test]
    fn last_question_offers_finish() {
        let wizard = RatatuiWizard::new();
        let mut session = Questionnaire::standard();
        for key in &PromptKey::ALL[..9] {
            session.submit_answer(key.as_str()).unwrap();
        }
        session.set_pending_input("LLAMA3 8B");
        let state = WizardState::new(&session);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();

        terminal
            .draw(|frame| wizard.draw_question(frame, &session, &state))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains(" 10 / 10 "));
        assert!(text.contains("LLAMA3 8B"));
        assert!(!text.contains("Type your answer here..."));
        assert!(text.contains("Enter: Finish"));
    }

    #[test]
    fn report_screen_lists_sections() {
        let wizard = RatatuiWizard::new();
        let answers = PromptKey::ALL
            .iter()
            .fold(Answers::new(), |answers, key| answers.with(*key, "42"));
        let report = Report::from_answers(&answers).unwrap();
        let inline = InlineReport::new(report.sections());
        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();

        terminal
            .draw(|frame| wizard.draw_report(frame, &inline, &ReportView::default()))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Your Report is Ready!"));
        assert!(text.contains("Project Overview"));
        assert!(text.contains("Concurrent Users: 42"));
        assert!(text.contains("Enter: Download Report (PDF)"));
    }
}
