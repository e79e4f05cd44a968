//! The weapon orchestrator: reload and firing protocols.
//!
//! [`WeaponState`] carries the containers between operations; [`Weapon`]
//! is the authoritative mediator constructed over borrowed state for every
//! cross-container transfer: box → magazine on reload, magazine → chamber
//! → fired on shoot. No caller moves bullets between containers directly,
//! which is what keeps the single-owner chain intact — a bullet lives in
//! exactly one container until firing consumes it.

use crate::env::RangeEnv;
use crate::error::ErrorSeverity;
use crate::events::{EventSink, WeaponEvent};
use crate::state::{AmmoStore, Bullet, BulletType, Chamber, Magazine, Millis};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReloadError {
    #[error("ammo box selection {index} out of range ({available} boxes)")]
    InvalidSelection { index: usize, available: usize },

    #[error("ammo box {index} is out of bullets")]
    EmptyBox { index: usize },

    #[error("cost oracle not available")]
    MissingCosts,
}

impl ReloadError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyBox { .. } => ErrorSeverity::Recoverable,
            Self::InvalidSelection { .. } | Self::MissingCosts => ErrorSeverity::Validation,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShootError {
    #[error("magazine is empty")]
    MagazineEmpty,

    #[error("chamber already holds a round")]
    ChamberOccupied,

    #[error("chamber lost its round mid-cycle")]
    ChamberDesync,

    #[error("cost oracle not available")]
    MissingCosts,
}

impl ShootError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MagazineEmpty => ErrorSeverity::Recoverable,
            Self::ChamberOccupied | Self::MissingCosts => ErrorSeverity::Validation,
            Self::ChamberDesync => ErrorSeverity::Internal,
        }
    }
}

/// Outcome of stocking the magazine from a literal bullet sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    /// Rounds actually seated; may be fewer than offered.
    pub loaded: u32,
    pub cost: Millis,
}

/// Outcome of a reload from an ammo box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadReport {
    /// Type of every round now in the magazine.
    pub kind: BulletType,
    pub loaded: u32,
    pub cost: Millis,
}

/// Outcome of a single shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotReport {
    pub kind: BulletType,
    pub cost: Millis,
}

/// Outcome of emptying the magazine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VolleyReport {
    pub fired: u32,
    pub cost: Millis,
    pub counts: crate::stats::TypeCounts,
}

/// Containers a weapon carries between operations: one magazine, one
/// chamber.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponState {
    pub magazine: Magazine,
    pub chamber: Chamber,
}

impl WeaponState {
    /// Empty magazine and chamber.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the magazine pre-filled from a literal sequence, up to
    /// capacity.
    pub fn with_magazine(rounds: &[Bullet]) -> Self {
        let mut state = Self::new();
        state.magazine.fill_from(rounds, Magazine::CAPACITY);
        state
    }

    pub fn magazine_rounds(&self) -> usize {
        self.magazine.len()
    }

    pub fn chamber_rounds(&self) -> usize {
        self.chamber.len()
    }

    /// Type of the round on top of the magazine, or `None` when empty.
    pub fn magazine_bullet_type(&self) -> Option<BulletType> {
        self.magazine.top_kind()
    }

    /// Type of the chambered round, or `None` when the chamber is empty.
    pub fn chamber_bullet_type(&self) -> Option<BulletType> {
        self.chamber.top_kind()
    }
}

/// Orchestrator over borrowed weapon state and a caller-owned ammo store.
///
/// Constructed transiently around each operation or session; the state and
/// the store outlive it.
pub struct Weapon<'a> {
    state: &'a mut WeaponState,
    ammo: &'a mut AmmoStore,
}

impl<'a> Weapon<'a> {
    pub fn new(state: &'a mut WeaponState, ammo: &'a mut AmmoStore) -> Self {
        Self { state, ammo }
    }

    /// Type of the round on top of the magazine, or `None` when empty.
    pub fn magazine_bullet_type(&self) -> Option<BulletType> {
        self.state.magazine_bullet_type()
    }

    /// Type of the chambered round, or `None` when the chamber is empty.
    pub fn chamber_bullet_type(&self) -> Option<BulletType> {
        self.state.chamber_bullet_type()
    }

    /// Read-only view of the ammo boxes, for selection menus.
    pub fn ammo_boxes(&self) -> &AmmoStore {
        self.ammo
    }

    /// Discards whatever the magazine holds and restocks it from the
    /// front of `rounds`, up to capacity. The discard is bookkeeping and
    /// carries no cost; only the seated rounds do.
    pub fn stock_magazine(
        &mut self,
        env: &RangeEnv<'_>,
        rounds: &[Bullet],
    ) -> Result<LoadReport, ReloadError> {
        let costs = env.costs().map_err(|_| ReloadError::MissingCosts)?;
        self.state.magazine.clear();
        let loaded = self.state.magazine.fill_from(rounds, Magazine::CAPACITY) as u32;
        Ok(LoadReport {
            loaded,
            cost: costs.load_cost() * u64::from(loaded),
        })
    }

    /// Reloads the magazine from the ammo box at `box_index`.
    ///
    /// A non-empty magazine is discarded first — reloading replaces the
    /// current load rather than topping it up. The selected box yields up
    /// to a full magazine; a short box is drained to zero and the
    /// magazine simply ends up partial.
    ///
    /// # Errors
    ///
    /// `InvalidSelection` for an out-of-range index, `EmptyBox` when the
    /// selected box has no bullets left. Both are reported conditions the
    /// caller can retry with a different selection; the matching
    /// [`WeaponEvent`] is emitted for user feedback.
    pub fn reload(
        &mut self,
        env: &RangeEnv<'_>,
        sink: &mut dyn EventSink,
        box_index: usize,
    ) -> Result<ReloadReport, ReloadError> {
        let costs = env.costs().map_err(|_| ReloadError::MissingCosts)?;
        self.state.magazine.clear();

        let available = self.ammo.len();
        let Some(selected) = self.ammo.get_mut(box_index) else {
            sink.emit(WeaponEvent::ReloadDenied {
                index: box_index,
                available,
            });
            return Err(ReloadError::InvalidSelection {
                index: box_index,
                available,
            });
        };
        if !selected.has_bullets() {
            sink.emit(WeaponEvent::BoxExhausted {
                index: box_index,
                kind: selected.kind(),
            });
            return Err(ReloadError::EmptyBox { index: box_index });
        }

        let kind = selected.kind();
        let withdrawn = selected.withdraw(Magazine::CAPACITY as u32);
        let mut loaded = 0u32;
        for _ in 0..withdrawn {
            if self.state.magazine.push(Bullet::new(kind)).is_err() {
                break;
            }
            loaded += 1;
        }

        Ok(ReloadReport {
            kind,
            loaded,
            cost: costs.load_cost() * u64::from(loaded),
        })
    }

    /// Fires one round: magazine → chamber → consumed.
    ///
    /// The round leaves the model entirely; firing is the unique
    /// destructor of a bullet. Emits [`WeaponEvent::Fired`] on success.
    ///
    /// # Errors
    ///
    /// `MagazineEmpty` when there is nothing to chamber (the chamber is
    /// left untouched). `ChamberOccupied` when a round is already seated;
    /// the chambered round is never overwritten and the magazine keeps
    /// its rounds.
    pub fn shoot(
        &mut self,
        env: &RangeEnv<'_>,
        sink: &mut dyn EventSink,
    ) -> Result<ShotReport, ShootError> {
        let costs = env.costs().map_err(|_| ShootError::MissingCosts)?;
        if self.state.magazine.is_empty() {
            return Err(ShootError::MagazineEmpty);
        }
        if self.state.chamber.is_full() {
            return Err(ShootError::ChamberOccupied);
        }

        let round = self
            .state
            .magazine
            .pop()
            .map_err(|_| ShootError::MagazineEmpty)?;
        let mut cost = costs.extract_cost();
        if self.state.chamber.push(round).is_err() {
            // Put the round back rather than dropping it.
            let _ = self.state.magazine.push(round);
            return Err(ShootError::ChamberOccupied);
        }
        cost += costs.load_cost();

        let fired = self
            .state
            .chamber
            .pop()
            .map_err(|_| ShootError::ChamberDesync)?;
        cost += costs.extract_cost();

        sink.emit(WeaponEvent::Fired { kind: fired.kind });
        Ok(ShotReport {
            kind: fired.kind,
            cost,
        })
    }

    /// Shoots until the magazine runs dry.
    ///
    /// `MagazineEmpty` is the natural loop terminator; any other failure
    /// propagates immediately.
    pub fn empty_magazine(
        &mut self,
        env: &RangeEnv<'_>,
        sink: &mut dyn EventSink,
    ) -> Result<VolleyReport, ShootError> {
        let mut report = VolleyReport::default();
        loop {
            match self.shoot(env, sink) {
                Ok(shot) => {
                    report.fired += 1;
                    report.cost += shot.cost;
                    report.counts.record(shot.kind);
                }
                Err(ShootError::MagazineEmpty) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(report)
    }

    /// Emits one `Fired` event per bullet type without touching any
    /// container — a presentation demo of every flight profile.
    pub fn demonstrate(sink: &mut dyn EventSink) {
        for kind in BulletType::ALL {
            sink.emit(WeaponEvent::Fired { kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Env, FlatCosts, PcgRng};
    use crate::events::MemorySink;
    use crate::state::AmmoBox;

    const COSTS: FlatCosts = FlatCosts::new(Millis(10), Millis(300));
    const RNG: PcgRng = PcgRng;

    fn env() -> RangeEnv<'static> {
        Env::with_all(&RNG, &COSTS)
    }

    fn store(boxes: &[AmmoBox]) -> AmmoStore {
        let mut store = AmmoStore::new();
        for ammo_box in boxes {
            store.push(*ammo_box).expect("store capacity");
        }
        store
    }

    #[test]
    fn reload_from_short_box_loads_what_is_left() {
        let mut ammo = store(&[
            AmmoBox::new(BulletType::Regular, 10),
            AmmoBox::new(BulletType::Tracer, 5),
        ]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        let report = weapon.reload(&env(), &mut sink, 1).expect("reload");
        assert_eq!(report.kind, BulletType::Tracer);
        assert_eq!(report.loaded, 5);
        assert_eq!(report.cost, Millis(50));
        assert_eq!(state.magazine_rounds(), 5);
        assert_eq!(ammo.get(1).unwrap().remaining(), 0);
    }

    #[test]
    fn volley_after_partial_reload_fires_exactly_the_loaded_rounds() {
        let mut ammo = store(&[
            AmmoBox::new(BulletType::Regular, 10),
            AmmoBox::new(BulletType::Tracer, 5),
        ]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        weapon.reload(&env(), &mut sink, 1).expect("reload");
        let volley = weapon.empty_magazine(&env(), &mut sink).expect("volley");

        assert_eq!(volley.fired, 5);
        assert_eq!(volley.counts.get(BulletType::Tracer), 5);
        assert_eq!(volley.counts.get(BulletType::Regular), 0);
        assert_eq!(volley.cost, Millis(5 * (300 + 10 + 300)));
        assert_eq!(state.magazine_rounds(), 0);
        assert_eq!(state.chamber_rounds(), 0);
        assert_eq!(sink.fired(), 5);
    }

    #[test]
    fn full_box_fills_the_magazine_to_capacity() {
        let mut ammo = store(&[AmmoBox::new(BulletType::Subsonic, 100)]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        let report = weapon.reload(&env(), &mut sink, 0).expect("reload");
        assert_eq!(report.loaded, Magazine::CAPACITY as u32);
        assert_eq!(state.magazine_rounds(), Magazine::CAPACITY);
        assert_eq!(ammo.get(0).unwrap().remaining(), 70);
    }

    #[test]
    fn reload_discards_stale_rounds() {
        let mut ammo = store(&[AmmoBox::new(BulletType::Subsonic, 40)]);
        let starter = [Bullet::new(BulletType::Regular); 3];
        let mut state = WeaponState::with_magazine(&starter);
        assert_eq!(state.magazine_bullet_type(), Some(BulletType::Regular));

        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();
        weapon.reload(&env(), &mut sink, 0).expect("reload");

        assert_eq!(state.magazine_bullet_type(), Some(BulletType::Subsonic));
        assert_eq!(state.magazine_rounds(), Magazine::CAPACITY);
    }

    #[test]
    fn reload_rejects_out_of_range_selection() {
        let mut ammo = store(&[AmmoBox::new(BulletType::Regular, 10)]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        let err = weapon.reload(&env(), &mut sink, 3).unwrap_err();
        assert_eq!(
            err,
            ReloadError::InvalidSelection {
                index: 3,
                available: 1
            }
        );
        assert_eq!(
            sink.events,
            vec![WeaponEvent::ReloadDenied {
                index: 3,
                available: 1
            }]
        );
    }

    #[test]
    fn reload_rejects_exhausted_box_but_recoverably() {
        let mut ammo = store(&[AmmoBox::new(BulletType::Tracer, 0)]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        let err = weapon.reload(&env(), &mut sink, 0).unwrap_err();
        assert_eq!(err, ReloadError::EmptyBox { index: 0 });
        assert!(err.severity().is_recoverable());
        assert_eq!(
            sink.events,
            vec![WeaponEvent::BoxExhausted {
                index: 0,
                kind: BulletType::Tracer
            }]
        );
    }

    #[test]
    fn shoot_on_empty_magazine_leaves_chamber_untouched() {
        let mut ammo = store(&[]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        let err = weapon.shoot(&env(), &mut sink).unwrap_err();
        assert_eq!(err, ShootError::MagazineEmpty);
        assert_eq!(state.chamber_rounds(), 0);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn shoot_refuses_to_overwrite_a_chambered_round() {
        let mut ammo = store(&[]);
        let starter = [Bullet::new(BulletType::Regular); 2];
        let mut state = WeaponState::with_magazine(&starter);
        state
            .chamber
            .push(Bullet::new(BulletType::Tracer))
            .expect("seat round");

        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();
        let err = weapon.shoot(&env(), &mut sink).unwrap_err();
        assert_eq!(err, ShootError::ChamberOccupied);

        assert_eq!(state.magazine_rounds(), 2);
        assert_eq!(state.chamber_bullet_type(), Some(BulletType::Tracer));
    }

    #[test]
    fn shot_cost_is_extract_load_extract() {
        let mut ammo = store(&[]);
        let starter = [Bullet::new(BulletType::Subsonic)];
        let mut state = WeaponState::with_magazine(&starter);
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();

        let shot = weapon.shoot(&env(), &mut sink).expect("shot");
        assert_eq!(shot.kind, BulletType::Subsonic);
        assert_eq!(shot.cost, Millis(300 + 10 + 300));
        assert_eq!(
            sink.events,
            vec![WeaponEvent::Fired {
                kind: BulletType::Subsonic
            }]
        );
    }

    #[test]
    fn demonstrate_emits_one_fired_event_per_type() {
        let mut sink = MemorySink::new();
        Weapon::demonstrate(&mut sink);
        assert_eq!(sink.fired(), BulletType::ALL.len());
    }

    #[test]
    fn stock_magazine_reports_actual_count_and_cost() {
        let mut ammo = store(&[]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let rounds: Vec<Bullet> = (0..40).map(|_| Bullet::new(BulletType::Regular)).collect();

        let report = weapon.stock_magazine(&env(), &rounds).expect("stock");
        assert_eq!(report.loaded, Magazine::CAPACITY as u32);
        assert_eq!(report.cost, Millis(10) * Magazine::CAPACITY as u64);
        assert_eq!(state.magazine_rounds(), Magazine::CAPACITY);
    }

    #[test]
    fn missing_cost_oracle_is_rejected_up_front() {
        let mut ammo = store(&[AmmoBox::new(BulletType::Regular, 10)]);
        let mut state = WeaponState::new();
        let mut weapon = Weapon::new(&mut state, &mut ammo);
        let mut sink = MemorySink::new();
        let env: RangeEnv<'_> = Env::empty();

        assert_eq!(
            weapon.reload(&env, &mut sink, 0).unwrap_err(),
            ReloadError::MissingCosts
        );
        assert_eq!(
            weapon.shoot(&env, &mut sink).unwrap_err(),
            ShootError::MissingCosts
        );
    }
}
