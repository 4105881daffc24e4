//! Level progress bar widget.
//!
//! Two rows: a label with the `mastered/total` count, then a filled bar
//! with the rounded percentage.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::study::LevelProgress;
use crate::tui::theme;

const FILLED: &str = "█";
const EMPTY: &str = "░";

pub struct ProgressBar<'a> {
    label: &'a str,
    progress: LevelProgress,
    color: Color,
}

impl<'a> ProgressBar<'a> {
    pub fn new(label: &'a str, progress: LevelProgress) -> Self {
        Self {
            label,
            progress,
            color: theme::EMERALD,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Number of filled cells for a bar `width` cells wide.
    fn filled_cells(&self, width: u16) -> u16 {
        if self.progress.total == 0 {
            return 0;
        }
        let mastered = self.progress.mastered.min(self.progress.total);
        let ratio = mastered as f64 / self.progress.total as f64;
        (ratio * width as f64).round() as u16
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let count = format!("{}/{}", self.progress.mastered, self.progress.total);
        let label_width = (area.width as usize).saturating_sub(count.chars().count() + 1);
        let header = Line::from(vec![
            Span::styled(
                format!("{:<width$}", self.label, width = label_width),
                theme::muted(),
            ),
            Span::raw(" "),
            Span::styled(count, Style::default().fg(theme::TEXT)),
        ]);
        buf.set_line(area.x, area.y, &header, area.width);

        if area.height < 2 {
            return;
        }

        let pct = format!(" {:>3}%", self.progress.percentage());
        let bar_width = area.width.saturating_sub(pct.len() as u16);
        let filled = self.filled_cells(bar_width);
        let bar = Line::from(vec![
            Span::styled(FILLED.repeat(filled as usize), Style::default().fg(self.color)),
            Span::styled(
                EMPTY.repeat(bar_width.saturating_sub(filled) as usize),
                theme::dim(),
            ),
            Span::styled(pct, theme::muted()),
        ]);
        buf.set_line(area.x, area.y + 1, &bar, area.width);
    }
}
