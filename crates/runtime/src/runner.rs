//! High-level session runner.
//!
//! The runner owns the weapon state and the armory, wires the content
//! cost table and a PCG rng into a core environment, and republishes
//! every core event on the topic bus so presentation layers can follow
//! along without touching the core directly.

use range_core::{
    AmmoStore, Bullet, Env, FiringSession, FlatCosts, LoadReport, PcgRng, RangeConfig, RangeEnv,
    ReloadReport, SessionStatistics, ShotReport, VolleyReport, Weapon, WeaponState,
};

use crate::error::Result;
use crate::events::{BusSink, Event, EventBus, SessionEvent, Topic};

/// Runner configuration shared across sessions.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub range_config: RangeConfig,
    /// Cost table injected into the core environment.
    pub costs: FlatCosts,
    pub event_buffer_size: usize,
    /// Fixed replay seed; `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            range_config: RangeConfig::default(),
            costs: range_content::standard_costs(),
            event_buffer_size: 100,
            seed: None,
        }
    }
}

/// Owns one weapon's state and armory and drives the firing protocol.
///
/// Design: the runner owns the durable state; a [`Weapon`] orchestrator
/// is constructed transiently around each operation.
pub struct SessionRunner {
    config: RunnerConfig,
    state: WeaponState,
    ammo: AmmoStore,
    bus: EventBus,
    rng: PcgRng,
}

impl SessionRunner {
    /// Creates a runner over the standard preset armory.
    pub fn new(config: RunnerConfig) -> Self {
        let ammo = range_content::standard_ammo_store();
        Self::with_armory(config, ammo)
    }

    /// Creates a runner over a caller-supplied armory.
    pub fn with_armory(config: RunnerConfig, ammo: AmmoStore) -> Self {
        let bus = EventBus::with_capacity(config.event_buffer_size);
        Self {
            config,
            state: WeaponState::new(),
            ammo,
            bus,
            rng: PcgRng,
        }
    }

    /// Subscribe to events published for `topic`.
    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Current magazine/chamber state, for status displays.
    pub fn weapon_state(&self) -> &WeaponState {
        &self.state
    }

    /// The armory, for selection menus.
    pub fn ammo_boxes(&self) -> &AmmoStore {
        &self.ammo
    }

    /// Stocks the magazine from a literal bullet sequence.
    pub fn stock_magazine(&mut self, rounds: &[Bullet]) -> Result<LoadReport> {
        let costs = self.config.costs;
        let env: RangeEnv<'_> = Env::with_all(&self.rng, &costs);
        let mut weapon = Weapon::new(&mut self.state, &mut self.ammo);
        let report = weapon.stock_magazine(&env, rounds)?;
        tracing::debug!(loaded = report.loaded, "magazine stocked");
        Ok(report)
    }

    /// Reloads the magazine from the ammo box at `box_index`.
    pub fn reload(&mut self, box_index: usize) -> Result<ReloadReport> {
        let costs = self.config.costs;
        let env: RangeEnv<'_> = Env::with_all(&self.rng, &costs);
        let mut sink = BusSink::new(self.bus.clone());
        let mut weapon = Weapon::new(&mut self.state, &mut self.ammo);
        let report = weapon.reload(&env, &mut sink, box_index)?;
        tracing::debug!(kind = %report.kind, loaded = report.loaded, "magazine reloaded");
        Ok(report)
    }

    /// Fires a single round.
    pub fn shoot(&mut self) -> Result<ShotReport> {
        let costs = self.config.costs;
        let env: RangeEnv<'_> = Env::with_all(&self.rng, &costs);
        let mut sink = BusSink::new(self.bus.clone());
        let mut weapon = Weapon::new(&mut self.state, &mut self.ammo);
        let shot = weapon.shoot(&env, &mut sink)?;
        tracing::trace!(kind = %shot.kind, "round fired");
        Ok(shot)
    }

    /// Fires until the magazine runs dry.
    pub fn empty_magazine(&mut self) -> Result<VolleyReport> {
        let costs = self.config.costs;
        let env: RangeEnv<'_> = Env::with_all(&self.rng, &costs);
        let mut sink = BusSink::new(self.bus.clone());
        let mut weapon = Weapon::new(&mut self.state, &mut self.ammo);
        let volley = weapon.empty_magazine(&env, &mut sink)?;
        tracing::debug!(fired = volley.fired, "magazine emptied");
        Ok(volley)
    }

    /// Publishes one `Fired` event per bullet type, for presentation
    /// demos of the flight profiles.
    pub fn demonstrate(&self) {
        let mut sink = BusSink::new(self.bus.clone());
        Weapon::demonstrate(&mut sink);
    }

    /// Runs one bulk firing session to exhaustion and returns its
    /// statistics.
    pub fn run_session(&mut self) -> Result<SessionStatistics> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let span = tracing::info_span!("firing_session", seed);
        let _enter = span.enter();

        self.bus
            .publish(Event::Session(SessionEvent::Started { seed }));

        let costs = self.config.costs;
        let rng = self.rng;
        let env: RangeEnv<'_> = Env::with_all(&rng, &costs);
        let mut sink = BusSink::new(self.bus.clone());
        let mut weapon = Weapon::new(&mut self.state, &mut self.ammo);

        match FiringSession::new(seed).run(&self.config.range_config, &mut weapon, &env, &mut sink)
        {
            Ok(stats) => {
                tracing::info!(%stats, "session complete");
                self.bus
                    .publish(Event::Session(SessionEvent::Completed { stats }));
                Ok(stats)
            }
            Err(err) => {
                tracing::warn!(error = %err, "session aborted");
                self.bus.publish(Event::Session(SessionEvent::Failed {
                    message: err.to_string(),
                }));
                Err(err.into())
            }
        }
    }
}
