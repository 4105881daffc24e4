//! Word list view: every word of the current level with a difficulty filter.
//!
//! 'f' cycles the filter, j/k move, 's' speaks, Enter opens the flashcard.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::catalog::{Word, WordIndex};
use crate::core::difficulty::DifficultyFilter;
use crate::core::study::StudySession;
use crate::tui::events::{Action, InputResult};
use crate::tui::services::Services;
use crate::tui::theme;

pub const EMPTY_MESSAGE: &str = "No words found matching your filter.";

pub struct WordListState {
    filter: DifficultyFilter,
    /// Row within the filtered list.
    selected: usize,
}

impl WordListState {
    pub fn new() -> Self {
        Self {
            filter: DifficultyFilter::All,
            selected: 0,
        }
    }

    pub fn filter(&self) -> DifficultyFilter {
        self.filter
    }

    pub fn reset(&mut self) {
        self.filter = DifficultyFilter::All;
        self.selected = 0;
    }

    /// Put the cursor on the current word if it passes the filter.
    pub fn sync_to_current(&mut self, session: &StudySession) {
        let Some(current) = session.current_index() else {
            return;
        };
        if let Some(pos) = session
            .filtered_words(self.filter)
            .iter()
            .position(|(i, _)| *i == current)
        {
            self.selected = pos;
        }
    }

    fn selected_entry<'a>(&self, session: &'a StudySession) -> Option<(WordIndex, &'a Word)> {
        session.filtered_words(self.filter).get(self.selected).copied()
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
        let count = session.filtered_words(self.filter).len();

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('f')) => {
                self.filter = self.filter.cycle();
                self.selected = 0;
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Char('s')) => {
                if let Some((_, word)) = self.selected_entry(session) {
                    services.speech.speak(&word.hanzi);
                }
                Some(InputResult::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Enter) => match self.selected_entry(session) {
                Some((index, _)) => Some(InputResult::Dispatch(Action::SelectWord(index))),
                None => Some(InputResult::Consumed),
            },
            _ => None,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &StudySession) {
        let level = session.level();
        let block = Block::default()
            .title(format!(" {level} Vocabulary List "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::level_color(level)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        let stats = session.list_stats(self.filter);
        let header = Line::from(vec![
            Span::styled(" Filter ", theme::key_hint()),
            Span::styled(format!("[f] {}", self.filter.label()), theme::highlight()),
            Span::raw("   "),
            Span::styled("✓ ", theme::mastered_badge()),
            Span::styled(format!("{}", stats.mastered), Style::default().fg(theme::TEXT)),
            Span::styled(" Mastered  ", theme::muted()),
            Span::styled("○ ", theme::learning_badge()),
            Span::styled(format!("{}", stats.learning), Style::default().fg(theme::TEXT)),
            Span::styled(" Learning", theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let words = session.filtered_words(self.filter);
        if words.is_empty() {
            frame.render_widget(
                Paragraph::new(vec![Line::raw(""), Line::styled(EMPTY_MESSAGE, theme::muted())])
                    .alignment(Alignment::Center),
                chunks[2],
            );
            return;
        }

        let current = session.current_index();
        let items: Vec<ListItem> = words
            .iter()
            .map(|(index, word)| {
                let mastered = session.is_mastered(&word.id);
                word_row(word, mastered, Some(*index) == current)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme::BG_SURFACE).add_modifier(Modifier::BOLD))
            .highlight_symbol("▸ ");
        let selected = self.selected.min(words.len() - 1);
        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }
}

impl Default for WordListState {
    fn default() -> Self {
        Self::new()
    }
}

fn word_row(word: &Word, mastered: bool, is_current: bool) -> ListItem<'static> {
    let hanzi_style = if mastered {
        Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::styled(format!("{:<6}", word.hanzi), hanzi_style),
        Span::styled(
            format!("{:<14}", word.pinyin),
            if is_current {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT)
            },
        ),
    ];
    if let Some(difficulty) = word.difficulty {
        spans.push(Span::styled(
            format!("{:<7}", difficulty.label()),
            Style::default().fg(theme::difficulty_color(difficulty)),
        ));
    }
    spans.push(Span::styled(word.english.clone(), theme::muted()));
    if mastered {
        spans.push(Span::styled("  ✓", theme::mastered_badge()));
    }
    ListItem::new(Line::from(spans))
}
