//! `BlackVolTermStructure` — Black-volatility term structures and the flat
//! `BlackConstantVol`.

use crate::term_structure::{impl_term_structure, TermStructure, TermStructureData};
use jd_core::{Real, Time, Volatility};
use jd_time::{Date, DayCounter};
use std::sync::Arc;

/// A Black-volatility term structure.
///
/// Implementors provide at least one of
/// [`black_vol_impl`](BlackVolTermStructure::black_vol_impl) (σ(t, K)) and
/// [`black_variance_impl`](BlackVolTermStructure::black_variance_impl) (σ²·t).
pub trait BlackVolTermStructure: TermStructure {
    /// Black volatility for time `t` and `strike`.
    fn black_vol_impl(&self, t: Time, strike: Real) -> Volatility {
        if t <= 0.0 {
            return 0.0;
        }
        (self.black_variance_impl(t, strike) / t).sqrt()
    }

    /// Black variance `σ²·t` for time `t` and `strike`.
    fn black_variance_impl(&self, t: Time, strike: Real) -> Real {
        let vol = self.black_vol_impl(t, strike);
        vol * vol * t
    }

    /// Black volatility for a date and strike.
    fn black_vol(&self, date: Date, strike: Real) -> Volatility {
        self.black_vol_impl(self.time_from_reference(date), strike)
    }

    /// Black variance for a date and strike.
    fn black_variance(&self, date: Date, strike: Real) -> Real {
        self.black_variance_impl(self.time_from_reference(date), strike)
    }

    /// Black volatility for a time and strike.
    fn black_vol_time(&self, t: Time, strike: Real) -> Volatility {
        self.black_vol_impl(t, strike)
    }
}

/// A flat Black volatility: `σ(t, K) = σ` for every time and strike.
#[derive(Debug, Clone)]
pub struct BlackConstantVol {
    data: TermStructureData,
    volatility: Volatility,
}

impl BlackConstantVol {
    /// Create a constant Black vol surface.
    pub fn new(
        reference_date: Date,
        volatility: Volatility,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            data: TermStructureData::new(reference_date, day_counter),
            volatility,
        }
    }

    /// Create a constant surface reusing a shared day counter.
    pub fn with_shared_day_counter(
        reference_date: Date,
        volatility: Volatility,
        day_counter: Arc<dyn DayCounter>,
    ) -> Self {
        Self {
            data: TermStructureData::shared(reference_date, day_counter),
            volatility,
        }
    }

    /// The constant volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl_term_structure!(BlackConstantVol);

impl BlackVolTermStructure for BlackConstantVol {
    fn black_vol_impl(&self, _t: Time, _strike: Real) -> Volatility {
        self.volatility
    }

    fn black_variance_impl(&self, t: Time, _strike: Real) -> Real {
        self.volatility * self.volatility * t
    }
}
