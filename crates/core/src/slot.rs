//! The single "current story" slot.
//!
//! Only one story request matters at a time. Starting a new request bumps a
//! generation counter, and a result may only be stored if it was started under
//! the newest generation. Older in-flight requests become stale.

use crate::story::IllustratedStory;

/// Proof that a request was started, carrying the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A result arrived for a request that is no longer the newest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("request {stale} was superseded by request {current}")]
pub struct Superseded {
    pub stale: u64,
    pub current: u64,
}

#[derive(Debug, Default)]
pub struct StorySlot {
    generation: u64,
    current: Option<IllustratedStory>,
}

impl StorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request. The current story is dropped and every ticket
    /// issued before this one goes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.current = None;
        Ticket {
            generation: self.generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
    }

    /// Store the result of a request, unless a newer request has started.
    pub fn commit(&mut self, ticket: Ticket, story: IllustratedStory) -> Result<(), Superseded> {
        if !self.is_current(&ticket) {
            return Err(Superseded {
                stale: ticket.generation,
                current: self.generation,
            });
        }

        self.current = Some(story);
        Ok(())
    }

    pub fn current(&self) -> Option<&IllustratedStory> {
        self.current.as_ref()
    }

    /// Forget the current story and invalidate any request still in flight.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }
}
