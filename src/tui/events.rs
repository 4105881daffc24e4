use crate::core::catalog::{HskLevel, WordIndex};
use crate::core::gateway::ExampleSentence;
use crate::core::generated::ContentTicket;
use crate::core::navigation::DisplayMode;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs and the loading spinner.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Example sentence request finished (`None` = unavailable).
    ExampleReady {
        ticket: ContentTicket,
        example: Option<ExampleSentence>,
    },
    /// Grammar lesson request finished (`None` = unavailable).
    LessonReady {
        ticket: ContentTicket,
        lesson: Option<String>,
    },
    /// Notification raised outside the event loop (e.g. at startup).
    Notification(Notification),
}

/// Intents emitted by key mapping and views. Every study-state mutation
/// goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Level
    SetLevel(HskLevel),
    NextLevel,
    PrevLevel,

    // Mode
    SetMode(DisplayMode),
    NextMode,
    PrevMode,

    // Words
    /// Pick a word from the list; opens it as a flashcard.
    SelectWord(WordIndex),
    MarkWord { id: String, mastered: bool },
    NextWord,

    // Modals
    ToggleSidebar,
    ShowHelp,
    CloseHelp,

    Quit,
}

/// Result of offering a key to the focused view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Handled entirely inside the view.
    Consumed,
    /// Handled, and the app must apply this action.
    Dispatch(Action),
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            ttl_ticks: 100,
        }
    }
}
