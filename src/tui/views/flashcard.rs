//! Flashcard view: one word at a time, front (characters) and back
//! (pinyin, gloss, AI example).
//!
//! Space/Enter flips. On the back: 'g' generates an example, 's' speaks the
//! word, 'e' speaks the example. 'm' / 'x' mark mastered / still learning
//! and advance; →/'n' advance without changing mastery.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::catalog::Word;
use crate::core::gateway::ExampleSentence;
use crate::core::generated::{ContentState, ContentTicket, GeneratedContent};
use crate::core::study::StudySession;
use crate::tui::events::{Action, AppEvent, InputResult};
use crate::tui::services::Services;
use crate::tui::theme;

pub const EMPTY_MESSAGE: &str = "No words available for this level.";

pub struct FlashcardState {
    flipped: bool,
    example: GeneratedContent<ExampleSentence>,
}

impl FlashcardState {
    pub fn new() -> Self {
        Self {
            flipped: false,
            example: GeneratedContent::new(),
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn example(&self) -> &ContentState<ExampleSentence> {
        self.example.state()
    }

    /// The displayed word changed: show the front and forget the example.
    pub fn reset(&mut self) {
        self.flipped = false;
        self.example.reset();
    }

    pub fn on_example_ready(&mut self, ticket: ContentTicket, example: Option<ExampleSentence>) {
        self.example.complete(ticket, example);
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
        let word = session.current_word()?;

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Enter) => {
                self.flipped = !self.flipped;
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) if self.flipped => {
                self.request_example(word, services);
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('s')) => {
                services.speech.speak(&word.hanzi);
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('e')) => {
                if let Some(example) = self.example.ready() {
                    services.speech.speak(&example.sentence);
                }
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ ('m' | 'x'))) => {
                Some(InputResult::Dispatch(Action::MarkWord {
                    id: word.id.clone(),
                    mastered: c == 'm',
                }))
            }
            (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('n')) => {
                Some(InputResult::Dispatch(Action::NextWord))
            }
            _ => None,
        }
    }

    /// Ask the gateway for an example unless one is loading or present.
    fn request_example(&mut self, word: &Word, services: &Services) {
        let Some(ticket) = self.example.begin() else {
            return;
        };
        tracing::debug!(word = %word.id, "Requesting example sentence");

        let gateway = Arc::clone(&services.gateway);
        let tx = services.event_tx.clone();
        let word = word.clone();
        tokio::spawn(async move {
            let example = gateway.generate_example(&word).await;
            let _ = tx.send(AppEvent::ExampleReady { ticket, example });
        });
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &StudySession, spinner: &str) {
        let level = session.level();
        let block = Block::default()
            .title(format!(" {level} Flashcards "))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::level_color(level)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(word) = session.current_word() else {
            frame.render_widget(
                Paragraph::new(vec![Line::raw(""), Line::styled(EMPTY_MESSAGE, theme::muted())])
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        };
        let mastered = session.is_mastered(&word.id);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

        let badge = if mastered {
            Span::styled("✓ Mastered ", theme::mastered_badge())
        } else {
            Span::styled("Learning ", theme::learning_badge())
        };
        frame.render_widget(
            Paragraph::new(Line::from(badge)).alignment(Alignment::Right),
            chunks[0],
        );

        let body = if self.flipped {
            self.back_lines(word, spinner)
        } else {
            front_lines(word)
        };
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false }),
            chunks[1],
        );

        let hints = if self.flipped {
            "Space:flip  g:example  s:speak  e:speak example  x:still learning  m:mastered  n:next"
        } else {
            "Space:reveal  s:speak  x:still learning  m:mastered  n:next"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hints, theme::key_hint())).alignment(Alignment::Center),
            chunks[2],
        );
    }

    fn back_lines(&self, word: &Word, spinner: &str) -> Vec<Line<'static>> {
        let level = word.level;
        let mut lines = vec![
            Line::raw(""),
            Line::styled(
                word.hanzi.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(word.pinyin.clone(), theme::title(level)),
            Line::styled(
                word.english.clone(),
                theme::muted().add_modifier(Modifier::ITALIC),
            ),
            Line::raw(""),
            Line::styled("─".repeat(24), theme::dim()),
            Line::raw(""),
        ];

        match self.example.state() {
            ContentState::Ready(example) => {
                lines.push(Line::styled(
                    example.sentence.clone(),
                    Style::default().fg(theme::TEXT),
                ));
                lines.push(Line::styled(example.pinyin.clone(), theme::muted()));
                lines.push(Line::styled(
                    format!("\"{}\"", example.translation),
                    theme::dim().add_modifier(Modifier::ITALIC),
                ));
            }
            ContentState::Loading => {
                lines.push(Line::styled(
                    format!("{spinner} Creating example with AI..."),
                    theme::muted(),
                ));
            }
            ContentState::Unavailable => {
                lines.push(Line::styled(
                    "Example unavailable. Press g to retry.",
                    Style::default().fg(theme::WARNING),
                ));
            }
            ContentState::Idle => {
                lines.push(Line::styled(
                    "✦ Press g to generate an AI example",
                    Style::default().fg(theme::PRIMARY_LIGHT),
                ));
            }
        }
        lines
    }
}

impl Default for FlashcardState {
    fn default() -> Self {
        Self::new()
    }
}

fn front_lines(word: &Word) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::raw(""),
        Line::styled(
            word.hanzi.clone(),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled("Press Space to reveal", theme::dim()),
        Line::raw(""),
        Line::styled(
            format!("HSK LEVEL {}", word.level.number()),
            theme::dim(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_unflips_and_forgets_example() {
        let mut state = FlashcardState::new();
        state.flipped = true;
        let ticket = state.example.begin().unwrap();
        state.reset();
        assert!(!state.is_flipped());
        assert_eq!(state.example(), &ContentState::Idle);

        state.on_example_ready(
            ticket,
            Some(ExampleSentence {
                sentence: "旧".into(),
                pinyin: "jiù".into(),
                translation: "old".into(),
            }),
        );
        assert_eq!(state.example(), &ContentState::Idle);
    }

    #[test]
    fn test_failed_example_offers_retry() {
        let mut state = FlashcardState::new();
        let ticket = state.example.begin().unwrap();
        state.on_example_ready(ticket, None);
        assert_eq!(state.example(), &ContentState::Unavailable);
        assert!(state.example.begin().is_some());
    }
}
