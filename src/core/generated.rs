//! Session-scoped AI content tied to the word or topic currently on screen.
//!
//! A slot requests its content at most once per view. Results arriving after
//! the view changed carry a stale ticket and are dropped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentState<T> {
    Idle,
    Loading,
    Ready(T),
    /// The last request failed; the user may retry.
    Unavailable,
}

/// Proof that a request was started for a particular view generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTicket(u64);

#[derive(Debug, Clone)]
pub struct GeneratedContent<T> {
    generation: u64,
    state: ContentState<T>,
}

impl<T> GeneratedContent<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ContentState::Idle,
        }
    }

    pub fn state(&self) -> &ContentState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ContentState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            ContentState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Start a request. Refused while loading or once content is present.
    pub fn begin(&mut self) -> Option<ContentTicket> {
        match self.state {
            ContentState::Idle | ContentState::Unavailable => {
                self.state = ContentState::Loading;
                Some(ContentTicket(self.generation))
            }
            ContentState::Loading | ContentState::Ready(_) => None,
        }
    }

    /// Apply a finished request. Returns false if the ticket is stale.
    pub fn complete(&mut self, ticket: ContentTicket, result: Option<T>) -> bool {
        if ticket.0 != self.generation || !self.is_loading() {
            tracing::debug!(
                ticket = ticket.0,
                generation = self.generation,
                "Discarding generated content for a previous view"
            );
            return false;
        }
        self.state = match result {
            Some(value) => ContentState::Ready(value),
            None => ContentState::Unavailable,
        };
        true
    }

    /// Forget any content and invalidate outstanding tickets.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = ContentState::Idle;
    }
}

impl<T> Default for GeneratedContent<T> {
    fn default() -> Self {
        Self::new()
    }
}
