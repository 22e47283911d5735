//! Per-round storage of posted offers or requests.
//!
//! Items are pushed during the posting phase and drained in one go when the
//! round is matched. Posting order becomes the vertex index on the
//! corresponding side of the matching graph.

use bazaar_types::{BazaarError, ParticipantId, Posted, Result, Side, constants};

/// Collects one side's posts for the current round.
#[derive(Debug, Clone)]
pub struct RoundBuffer<T> {
    /// Posts in arrival order.
    posts: Vec<Posted<T>>,
    /// Which graph side this buffer feeds, for error reporting.
    side: Side,
    /// Maximum number of posts per round.
    max_posts: usize,
}

impl<T> RoundBuffer<T> {
    /// Create an empty buffer with the default limit.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, constants::MAX_POSTS_PER_ROUND)
    }

    /// Create a buffer holding at most `max_posts` posts.
    #[must_use]
    pub fn with_capacity(side: Side, max_posts: usize) -> Self {
        Self {
            posts: Vec::new(),
            side,
            max_posts,
        }
    }

    /// Append a post.
    ///
    /// # Errors
    /// Returns `RoundFull` if the buffer already holds `max_posts` items.
    pub fn push(&mut self, item: T, source: ParticipantId) -> Result<()> {
        if self.posts.len() >= self.max_posts {
            return Err(BazaarError::RoundFull {
                side: self.side,
                limit: self.max_posts,
            });
        }
        self.posts.push(Posted::new(item, source));
        Ok(())
    }

    /// Take every post, leaving the buffer empty for the next round.
    pub fn drain(&mut self) -> Vec<Posted<T>> {
        std::mem::take(&mut self.posts)
    }

    /// Posts currently held, in arrival order.
    #[must_use]
    pub fn posts(&self) -> &[Posted<T>] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_posts
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }
}
