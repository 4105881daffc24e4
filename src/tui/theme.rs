//! Centralized color theme for the Hanzi Hero TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::HskLevel;
use crate::core::difficulty::Difficulty;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo: primary accent, active items, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x63, 0x66, 0xF1);
/// Light indigo: highlights, hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x81, 0x8C, 0xF8);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Slate: base background.
pub const BG_BASE: Color = Color::Rgb(0x0F, 0x17, 0x2A);
/// Surface: elevated panels, sidebar.
pub const BG_SURFACE: Color = Color::Rgb(0x1E, 0x29, 0x3B);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
/// Muted text: secondary labels, borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const WARNING: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const INFO: Color = Color::Rgb(0x3B, 0x82, 0xF6);

// ── Domain ──────────────────────────────────────────────────────────────────

pub const EMERALD: Color = Color::Rgb(0x10, 0xB9, 0x81);
pub const BLUE: Color = Color::Rgb(0x3B, 0x82, 0xF6);
pub const AMBER: Color = Color::Rgb(0xF5, 0x9E, 0x0B);

/// Accent color for each HSK level.
pub fn level_color(level: HskLevel) -> Color {
    match level {
        HskLevel::Hsk1 => EMERALD,
        HskLevel::Hsk2 => BLUE,
        HskLevel::Hsk3 => AMBER,
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => SUCCESS,
        Difficulty::Medium => AMBER,
        Difficulty::Hard => ERROR,
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Bold title text in the level's color.
pub fn title(level: HskLevel) -> Style {
    Style::default()
        .fg(level_color(level))
        .add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Level badge in the status bar.
pub fn level_badge(level: HskLevel) -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(level_color(level))
        .add_modifier(Modifier::BOLD)
}

pub fn mastered_badge() -> Style {
    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

pub fn learning_badge() -> Style {
    Style::default().fg(TEXT_MUTED)
}
