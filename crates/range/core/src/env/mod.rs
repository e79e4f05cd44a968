//! Traits describing injected capabilities.
//!
//! Oracles supply randomness and per-operation cost tables. The [`Env`]
//! aggregate bundles them so the weapon and session code can access
//! everything they need without hard coupling to concrete implementations.
mod costs;
mod error;
mod rng;

pub use costs::{CostOracle, FlatCosts};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates the read-only oracles required by the firing protocol.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, R, C>
where
    R: RngOracle + ?Sized,
    C: CostOracle + ?Sized,
{
    rng: Option<&'a R>,
    costs: Option<&'a C>,
}

pub type RangeEnv<'a> = Env<'a, dyn RngOracle + 'a, dyn CostOracle + 'a>;

impl<'a, R, C> Env<'a, R, C>
where
    R: RngOracle + ?Sized,
    C: CostOracle + ?Sized,
{
    pub fn new(rng: Option<&'a R>, costs: Option<&'a C>) -> Self {
        Self { rng, costs }
    }

    pub fn with_all(rng: &'a R, costs: &'a C) -> Self {
        Self::new(Some(rng), Some(costs))
    }

    pub fn empty() -> Self {
        Self {
            rng: None,
            costs: None,
        }
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the CostOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CostsNotAvailable` if no cost oracle was provided.
    pub fn costs(&self) -> Result<&'a C, OracleError> {
        self.costs.ok_or(OracleError::CostsNotAvailable)
    }
}
