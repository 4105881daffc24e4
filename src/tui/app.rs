use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, InputResult, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::services::Services;
use super::sidebar;
use super::theme;
use super::views::flashcard::FlashcardState;
use super::views::grammar::GrammarState;
use super::views::word_list::WordListState;
use crate::core::catalog::HskLevel;
use crate::core::generated::ContentState;
use crate::core::navigation::DisplayMode;
use crate::core::study::StudySession;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const MAX_NOTIFICATIONS: usize = 3;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Catalog, navigation and mastery. All study mutations go through it.
    session: StudySession,
    flashcard: FlashcardState,
    word_list: WordListState,
    grammar: GrammarState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Whether the help modal is open.
    pub show_help: bool,
    tick_count: u64,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    services: Services,
}

impl AppState {
    pub fn new(
        session: StudySession,
        services: Services,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            running: true,
            session,
            flashcard: FlashcardState::new(),
            word_list: WordListState::new(),
            grammar: GrammarState::new(),
            notifications: Vec::new(),
            show_help: false,
            tick_count: 0,
            event_rx,
            services,
        }
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn flashcard(&self) -> &FlashcardState {
        &self.flashcard
    }

    pub fn word_list(&self) -> &WordListState {
        &self.word_list
    }

    pub fn grammar(&self) -> &GrammarState {
        &self.grammar
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    /// Wait for the next internal event (gateway results, notifications).
    #[cfg(test)]
    async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Active view
                match self.dispatch_view_input(&crossterm_event) {
                    Some(InputResult::Consumed) => return,
                    Some(InputResult::Dispatch(action)) => {
                        self.handle_action(action);
                        return;
                    }
                    None => {}
                }

                // Priority 3: Global keybindings
                if let Some(action) = self.map_input_to_action(crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Tick => self.on_tick(),
            AppEvent::ExampleReady { ticket, example } => {
                self.flashcard.on_example_ready(ticket, example);
            }
            AppEvent::LessonReady { ticket, lesson } => {
                self.grammar.on_lesson_ready(ticket, lesson);
            }
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
        }
    }

    fn dispatch_view_input(&mut self, event: &Event) -> Option<InputResult> {
        match self.session.mode() {
            DisplayMode::Flashcards => {
                self.flashcard.handle_input(event, &self.session, &self.services)
            }
            DisplayMode::WordList => {
                self.word_list.handle_input(event, &self.session, &self.services)
            }
            DisplayMode::Grammar => {
                self.grammar.handle_input(event, &self.session, &self.services)
            }
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::ToggleSidebar),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::NextMode),
                KeyCode::BackTab => Some(Action::PrevMode),
                KeyCode::Char(']') => Some(Action::NextLevel),
                KeyCode::Char('[') => Some(Action::PrevLevel),
                KeyCode::Char(c) => c
                    .to_digit(10)
                    .and_then(|n| u8::try_from(n).ok())
                    .and_then(HskLevel::from_number)
                    .map(Action::SetLevel),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let word_before = self.session.current_index();
        let mode_before = self.session.mode();
        let level_before = self.session.level();

        match action {
            Action::Quit => self.running = false,
            Action::SetLevel(level) => self.session.change_level(level),
            Action::NextLevel => self.session.change_level(level_before.next()),
            Action::PrevLevel => self.session.change_level(level_before.prev()),
            Action::SetMode(mode) => self.session.change_mode(mode),
            Action::NextMode => self.session.change_mode(mode_before.next()),
            Action::PrevMode => self.session.change_mode(mode_before.prev()),
            Action::SelectWord(index) => {
                if !self.session.select_from_list(index) {
                    tracing::debug!(index, "Ignoring selection outside the current level");
                }
            }
            Action::MarkWord { id, mastered } => {
                if let Err(e) = self.session.toggle_mastery(&id, mastered) {
                    self.push_notification(
                        format!("Progress not saved: {e}"),
                        NotificationLevel::Error,
                    );
                }
            }
            Action::NextWord => self.session.advance(),
            Action::ToggleSidebar => self.session.toggle_sidebar(),
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }

        self.after_transition(word_before, mode_before, level_before);
    }

    /// Discard view-scoped content that no longer matches what is shown.
    fn after_transition(
        &mut self,
        word_before: Option<usize>,
        mode_before: DisplayMode,
        level_before: HskLevel,
    ) {
        let view_changed =
            self.session.mode() != mode_before || self.session.level() != level_before;
        if view_changed || self.session.current_index() != word_before {
            self.flashcard.reset();
        }
        if view_changed {
            self.grammar.reset();
            self.word_list.reset();
            if self.session.mode() == DisplayMode::WordList {
                self.word_list.sync_to_current(&self.session);
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification::new(message, level));

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired, advance spinner.
    fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    fn spinner(&self) -> &'static str {
        SPINNER[(self.tick_count / 2) as usize % SPINNER.len()]
    }

    fn is_loading(&self) -> bool {
        matches!(self.flashcard.example(), ContentState::Loading)
            || matches!(self.grammar.lesson(), ContentState::Loading)
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let (layout, visibility) =
            AppLayout::compute(area, self.session.navigation().sidebar_visible);

        if let Some(sidebar_area) = layout.sidebar {
            sidebar::render(frame, sidebar_area, visibility, &self.session);
        }

        self.render_content(frame, layout.main);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let spinner = self.spinner();
        match self.session.mode() {
            DisplayMode::Flashcards => self.flashcard.render(frame, area, &self.session, spinner),
            DisplayMode::WordList => self.word_list.render(frame, area, &self.session),
            DisplayMode::Grammar => self.grammar.render(frame, area, &self.session, spinner),
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let level = self.session.level();
        let ai_status = if self.is_loading() {
            Span::styled(
                format!("{} generating", self.spinner()),
                Style::default().fg(theme::PRIMARY_LIGHT),
            )
        } else {
            Span::styled("ready", Style::default().fg(theme::TEXT_MUTED))
        };

        let status = Line::from(vec![
            Span::styled(" 汉 Hanzi Hero ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(format!(" {level} "), theme::level_badge(level)),
            Span::raw(" "),
            Span::styled(
                self.session.mode().label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("AI:", theme::key_hint()),
            Span::raw(" "),
            ai_status,
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":mode "),
            Span::styled("1-3", theme::key_hint()),
            Span::raw(":level "),
            Span::styled("Ctrl+B", theme::key_hint()),
            Span::raw(":sidebar "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1.min(area.height.saturating_sub(height));

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("Tab / Shift+Tab", "Next / previous mode"),
            ("1 / 2 / 3", "Switch to HSK level"),
            ("[ / ]", "Previous / next level"),
            ("Ctrl+B", "Toggle sidebar"),
            ("", ""),
            ("Flashcards:", ""),
            ("Space / Enter", "Flip card"),
            ("g", "Generate AI example (back side)"),
            ("s / e", "Speak word / example"),
            ("m / x", "Mastered / still learning, then next"),
            ("→ / n", "Next word"),
            ("", ""),
            ("Word List:", ""),
            ("f", "Cycle difficulty filter"),
            ("j/k", "Move selection"),
            ("s", "Speak word"),
            ("Enter", "Open as flashcard"),
            ("", ""),
            ("Grammar:", ""),
            ("j/k", "Choose topic / scroll lesson"),
            ("Enter", "Open lesson"),
            ("r", "Retry failed lesson"),
            ("Esc", "Back to topics"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::heading())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::heading())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused());

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
