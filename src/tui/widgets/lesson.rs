//! Lesson blocks → ratatui Lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::lesson::{parse_lesson, LessonBlock};
use crate::tui::theme;

/// Convert generated lesson text to styled lines.
pub fn lesson_to_lines(text: &str) -> Vec<Line<'static>> {
    blocks_to_lines(&parse_lesson(text))
}

pub fn blocks_to_lines(blocks: &[LessonBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            LessonBlock::Heading1(text) => {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme::PRIMARY_LIGHT)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )));
            }
            LessonBlock::Heading2(text) => {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(text.clone(), theme::heading())));
            }
            LessonBlock::Heading3(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                )));
            }
            LessonBlock::ListItem(text) => {
                lines.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(theme::PRIMARY)),
                    Span::styled(text.clone(), Style::default().fg(theme::TEXT)),
                ]));
            }
            LessonBlock::Paragraph(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(theme::TEXT),
                )));
            }
        }
    }
    lines
}
