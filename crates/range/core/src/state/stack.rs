//! Bounded LIFO bullet containers.
//!
//! Magazine and chamber are the same abstraction at different capacities:
//! one generic stack parameterized by capacity, rather than two copies of
//! the container logic.

use arrayvec::ArrayVec;

use crate::config::RangeConfig;
use crate::error::ErrorSeverity;
use crate::state::{Bullet, BulletType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("container is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("container is empty")]
    Empty,
}

impl StackError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }
}

/// Ordered bullet storage with a hard capacity cap. Most recently loaded
/// round sits at the top and is the first one extracted.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulletStack<const CAP: usize> {
    rounds: ArrayVec<Bullet, CAP>,
}

/// Capacity-30 container loaded from an ammo box or a literal sequence.
pub type Magazine = BulletStack<{ RangeConfig::MAGAZINE_CAPACITY }>;

/// Single-slot container representing "ready to fire".
pub type Chamber = BulletStack<{ RangeConfig::CHAMBER_CAPACITY }>;

impl<const CAP: usize> BulletStack<CAP> {
    pub const CAPACITY: usize = CAP;

    pub fn new() -> Self {
        Self {
            rounds: ArrayVec::new(),
        }
    }

    /// Seats a round on top of the stack.
    ///
    /// Fails with [`StackError::Full`] at capacity and leaves the stack
    /// unchanged.
    pub fn push(&mut self, bullet: Bullet) -> Result<(), StackError> {
        self.rounds
            .try_push(bullet)
            .map_err(|_| StackError::Full { capacity: CAP })
    }

    /// Removes and returns the top round (last loaded, first extracted).
    pub fn pop(&mut self) -> Result<Bullet, StackError> {
        self.rounds.pop().ok_or(StackError::Empty)
    }

    /// Returns the top round without extracting it.
    pub fn peek(&self) -> Result<Bullet, StackError> {
        self.rounds.last().copied().ok_or(StackError::Empty)
    }

    /// Type of the top round, or `None` when empty. Never invents a
    /// sentinel type for the empty case.
    pub fn top_kind(&self) -> Option<BulletType> {
        self.rounds.last().map(|bullet| bullet.kind)
    }

    /// Discards every round and returns how many were removed. Unloading
    /// old rounds is bookkeeping; the cost of a clear never reaches
    /// session statistics.
    pub fn clear(&mut self) -> usize {
        let discarded = self.rounds.len();
        self.rounds.clear();
        discarded
    }

    /// Loads rounds from the front of `bullets` until the sequence is
    /// exhausted, `limit` rounds have been loaded, or the stack is full,
    /// whichever comes first. Returns how many were actually loaded;
    /// callers must not assume the whole sequence was consumed.
    pub fn fill_from(&mut self, bullets: &[Bullet], limit: usize) -> usize {
        let mut loaded = 0;
        for bullet in bullets.iter().take(limit) {
            if self.push(*bullet).is_err() {
                break;
            }
            loaded += 1;
        }
        loaded
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rounds.len() == CAP
    }
}
