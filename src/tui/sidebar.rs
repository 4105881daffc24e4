//! Collapsible left sidebar: brand, level selector, modes and level progress.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout::SidebarVisibility;
use super::theme;
use super::widgets::progress::ProgressBar;
use crate::core::catalog::HskLevel;
use crate::core::navigation::DisplayMode;
use crate::core::study::StudySession;

/// Render the sidebar for the current session.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    visibility: SidebarVisibility,
    session: &StudySession,
) {
    match visibility {
        SidebarVisibility::Hidden => {}
        SidebarVisibility::Collapsed => render_collapsed(frame, area, session),
        SidebarVisibility::Expanded => render_expanded(frame, area, session),
    }
}

fn render_collapsed(frame: &mut Frame, area: Rect, session: &StudySession) {
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(" 汉", theme::brand_badge()))];
    lines.push(Line::raw(""));

    for level in HskLevel::ALL {
        let style = if level == session.level() {
            theme::title(level)
        } else {
            theme::muted()
        };
        lines.push(Line::from(Span::styled(format!(" {}", level.number()), style)));
    }
    lines.push(Line::raw(""));
    for mode in DisplayMode::ALL {
        let style = if mode == session.mode() {
            theme::highlight()
        } else {
            theme::muted()
        };
        let initial = mode.label().chars().next().unwrap_or(' ');
        lines.push(Line::from(Span::styled(format!(" {initial}"), style)));
    }

    lines.truncate(area.height as usize);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
        area,
    );
}

fn render_expanded(frame: &mut Frame, area: Rect, session: &StudySession) {
    let level = session.level();
    let width = area.width as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(" 汉 ", theme::brand_badge()),
            Span::styled(
                " Hanzi Hero",
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(" LEVEL", theme::heading())),
    ];

    for (i, l) in HskLevel::ALL.into_iter().enumerate() {
        let is_current = l == level;
        let (prefix, style) = if is_current {
            ("▸ ", theme::title(l))
        } else {
            ("  ", theme::muted())
        };
        let label = format!(" {prefix}{l}  [{}]", i + 1);
        lines.push(Line::from(Span::styled(format!("{label:<width$}"), style)));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(" MODE", theme::heading())));
    for mode in DisplayMode::ALL {
        let (prefix, style) = if mode == session.mode() {
            ("▸ ", theme::highlight())
        } else {
            ("  ", theme::muted())
        };
        let label = format!(" {prefix}{}", mode.label());
        lines.push(Line::from(Span::styled(format!("{label:<width$}"), style)));
    }

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(theme::BG_SURFACE)),
        chunks[1],
    );
    let bar_area = Rect {
        x: chunks[1].x + 1,
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(2),
        height: 2,
    }
    .intersection(chunks[1]);
    let label = format!("{level} Progress");
    frame.render_widget(
        ProgressBar::new(&label, session.level_progress()).color(theme::level_color(level)),
        bar_area,
    );
}
