/// HanziHero - HSK 1-3 Chinese Trainer (TUI Edition)
///
/// Core library providing the word catalog, mastery tracking, navigation,
/// AI-generated examples and lessons, and speech output for learners of
/// Mandarin vocabulary and grammar.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
