//! Shoot-until-empty bulk protocol.
//!
//! A session generates a random ammunition batch, then alternates between
//! stocking the magazine from the batch front and emptying it, until the
//! batch is exhausted. Every random draw comes from the injected RNG
//! oracle through a seeded nonce sequence, so a session replays exactly.

use crate::config::RangeConfig;
use crate::env::{OracleError, RangeEnv, compute_seed};
use crate::error::ErrorSeverity;
use crate::events::EventSink;
use crate::state::Bullet;
use crate::stats::SessionStatistics;
use crate::weapon::{ReloadError, ShootError, Weapon};

// Draw contexts, so batch sizing and bullet typing never share a seed.
const CONTEXT_BATCH_SIZE: u32 = 0;
const CONTEXT_BULLET_KIND: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("oracle unavailable: {0}")]
    Oracle(#[from] OracleError),

    #[error("magazine loading failed: {0}")]
    Reload(#[from] ReloadError),

    #[error("firing failed: {0}")]
    Shoot(#[from] ShootError),
}

impl SessionError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Reload(err) => err.severity(),
            Self::Shoot(err) => err.severity(),
        }
    }
}

/// One bulk generate-load-fire run with its own statistics.
#[derive(Clone, Copy, Debug)]
pub struct FiringSession {
    seed: u64,
    nonce: u64,
}

impl FiringSession {
    pub fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn next_seed(&mut self, context: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, context);
        self.nonce += 1;
        seed
    }

    /// Runs the session to exhaustion and returns its statistics.
    ///
    /// The batch is drained by exactly the number of rounds each stocking
    /// actually seated, never re-derived from magazine state, so a tail
    /// batch smaller than the magazine needs no special casing and every
    /// generated round is fired exactly once.
    pub fn run(
        &mut self,
        config: &RangeConfig,
        weapon: &mut Weapon<'_>,
        env: &RangeEnv<'_>,
        sink: &mut dyn EventSink,
    ) -> Result<SessionStatistics, SessionError> {
        let rng = env.rng()?;

        let batch_size = rng.batch_size(
            self.next_seed(CONTEXT_BATCH_SIZE),
            config.batch_min,
            config.batch_max,
        );
        let mut batch: Vec<Bullet> = (0..batch_size)
            .map(|_| Bullet::new(rng.bullet_type(self.next_seed(CONTEXT_BULLET_KIND))))
            .collect();

        let mut stats = SessionStatistics::new();
        while !batch.is_empty() {
            let load = weapon.stock_magazine(env, &batch)?;
            stats.magazines_loaded += 1;
            stats.loading_cost += load.cost;

            let volley = weapon.empty_magazine(env, sink)?;
            stats.fired_count += volley.fired;
            stats.firing_cost += volley.cost;
            stats.counts.merge(&volley.counts);

            batch.drain(..load.loaded as usize);
        }

        Ok(stats)
    }
}
