pub mod catalog;
pub mod difficulty;
pub mod logging;

// Study state: navigation + mastery, owned by the session
pub mod navigation;
pub mod progress;
pub mod study;

// Session-scoped AI content and the lesson formatter
pub mod gateway;
pub mod generated;
pub mod lesson;

pub mod speech;
