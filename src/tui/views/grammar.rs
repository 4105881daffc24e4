//! Grammar view: topic list for the level, then an AI lesson for the
//! opened topic.
//!
//! Topics: j/k to move, Enter opens and requests the lesson.
//! Lesson: j/k scroll, 'r' retries after a failure, Esc/Backspace returns.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::catalog::GrammarTopic;
use crate::core::generated::{ContentState, ContentTicket, GeneratedContent};
use crate::core::study::StudySession;
use crate::tui::events::{AppEvent, InputResult};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::lesson::lesson_to_lines;

pub const EMPTY_MESSAGE: &str = "No grammar topics loaded for this level yet.";

pub struct GrammarState {
    /// Cursor in the topic list.
    selected: usize,
    /// Topic whose lesson is open.
    open: Option<GrammarTopic>,
    lesson: GeneratedContent<String>,
    scroll: u16,
}

impl GrammarState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            open: None,
            lesson: GeneratedContent::new(),
            scroll: 0,
        }
    }

    pub fn open_topic(&self) -> Option<&GrammarTopic> {
        self.open.as_ref()
    }

    pub fn lesson(&self) -> &ContentState<String> {
        self.lesson.state()
    }

    /// Back to the topic list; any in-flight lesson becomes stale.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.close();
    }

    fn close(&mut self) {
        self.open = None;
        self.lesson.reset();
        self.scroll = 0;
    }

    pub fn on_lesson_ready(&mut self, ticket: ContentTicket, lesson: Option<String>) {
        self.lesson.complete(ticket, lesson);
    }

    // ── Input handling ──────────────────────────────────────────────────

    pub fn handle_input(
        &mut self,
        event: &Event,
        session: &StudySession,
        services: &Services,
    ) -> Option<InputResult> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        if self.open.is_some() {
            self.handle_lesson_input(*code, *modifiers, services)
        } else {
            self.handle_topics_input(*code, *modifiers, session, services)
        }
    }

    fn handle_topics_input(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        session: &StudySession,
        services: &Services,
    ) -> Option<InputResult> {
        let topics = session.level_topics();
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                if !topics.is_empty() {
                    self.selected = (self.selected + 1).min(topics.len() - 1);
                }
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                if let Some(topic) = topics.get(self.selected) {
                    let topic = (*topic).clone();
                    self.close();
                    self.open = Some(topic);
                    self.request_lesson(services);
                }
                Some(InputResult::Consumed)
            }
            _ => None,
        }
    }

    fn handle_lesson_input(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        services: &Services,
    ) -> Option<InputResult> {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Backspace) => {
                self.close();
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.scroll = self.scroll.saturating_add(1);
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                if matches!(self.lesson.state(), ContentState::Unavailable) {
                    self.request_lesson(services);
                }
                Some(InputResult::Consumed)
            }
            _ => None,
        }
    }

    fn request_lesson(&mut self, services: &Services) {
        let Some(topic) = self.open.clone() else {
            return;
        };
        let Some(ticket) = self.lesson.begin() else {
            return;
        };
        tracing::debug!(topic = %topic.id, "Requesting grammar lesson");

        let gateway = Arc::clone(&services.gateway);
        let tx = services.event_tx.clone();
        tokio::spawn(async move {
            let lesson = gateway.generate_lesson(&topic).await;
            let _ = tx.send(AppEvent::LessonReady { ticket, lesson });
        });
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &StudySession, spinner: &str) {
        match &self.open {
            Some(topic) => self.render_lesson(frame, area, topic, spinner),
            None => self.render_topics(frame, area, session),
        }
    }

    fn render_topics(&self, frame: &mut Frame, area: Rect, session: &StudySession) {
        let level = session.level();
        let block = Block::default()
            .title(format!(" {level} Grammar "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::level_color(level)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let topics = session.level_topics();
        let mut lines = vec![
            Line::styled(" Select a topic to generate a lesson with AI.", theme::muted()),
            Line::raw(""),
        ];

        if topics.is_empty() {
            lines.push(Line::styled(EMPTY_MESSAGE, theme::muted()).alignment(Alignment::Center));
            frame.render_widget(Paragraph::new(lines), inner);
            return;
        }

        for (i, topic) in topics.iter().enumerate() {
            let selected = i == self.selected;
            let (prefix, title_style) = if selected {
                ("▸ ", theme::highlight())
            } else {
                ("  ", Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {prefix}"), title_style),
                Span::styled(topic.title.clone(), title_style),
            ]));
            lines.push(Line::styled(format!("     {}", topic.description), theme::muted()));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_lesson(&self, frame: &mut Frame, area: Rect, topic: &GrammarTopic, spinner: &str) {
        let block = Block::default()
            .title(format!(" {} ", topic.title))
            .title_bottom(Line::styled(
                " Esc:back  j/k:scroll  r:retry ",
                theme::key_hint(),
            ))
            .borders(Borders::ALL)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!(" Grammar Point • HSK {}", topic.level.number()),
                theme::muted(),
            )),
            chunks[0],
        );

        let body = match self.lesson.state() {
            ContentState::Ready(text) => {
                Paragraph::new(lesson_to_lines(text))
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll, 0))
            }
            ContentState::Loading | ContentState::Idle => Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    format!("{spinner} Asking AI Tutor to explain..."),
                    Style::default().fg(theme::PRIMARY_LIGHT),
                ),
            ])
            .alignment(Alignment::Center),
            ContentState::Unavailable => Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    "Failed to load explanation. Please check your API Key.",
                    Style::default().fg(theme::ERROR),
                ),
                Line::styled("Press r to retry.", theme::muted()),
            ])
            .alignment(Alignment::Center),
        };
        frame.render_widget(body, chunks[1]);
    }
}

impl Default for GrammarState {
    fn default() -> Self {
        Self::new()
    }
}
