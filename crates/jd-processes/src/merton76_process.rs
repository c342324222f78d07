//! Merton (1976) jump-diffusion process.
//!
//! ```text
//! dS/S = (r − q − λ·k) dt + σ dW + (J − 1) dN
//! ```
//!
//! `N` is a Poisson process with intensity `λ`, `ln J ~ N(μ, σ_J²)` and
//! `k = E[J − 1] = exp(μ + σ_J²/2) − 1` is the jump compensator.

use crate::black_scholes_process::GeneralizedBlackScholesProcess;
use jd_core::{errors::Error, Real, Result};
use std::sync::Arc;

/// A Merton jump-diffusion process: a Black-Scholes diffusion plus
/// lognormally sized Poisson jumps.
#[derive(Debug, Clone)]
pub struct Merton76Process {
    diffusion: Arc<GeneralizedBlackScholesProcess>,
    jump_intensity: Real,
    log_jump_mean: Real,
    log_jump_vol: Real,
}

impl Merton76Process {
    /// Create a jump-diffusion process.
    ///
    /// * `diffusion` — spot, dividend, risk-free and volatility market data
    /// * `jump_intensity` — λ, expected jumps per year
    /// * `log_jump_mean` — μ, mean of the log jump size
    /// * `log_jump_vol` — σ_J, standard deviation of the log jump size
    ///
    /// # Errors
    /// `Error::OutOfDomain` if any jump parameter is not finite, or if
    /// `jump_intensity` or `log_jump_vol` is negative.
    pub fn new(
        diffusion: Arc<GeneralizedBlackScholesProcess>,
        jump_intensity: Real,
        log_jump_mean: Real,
        log_jump_vol: Real,
    ) -> Result<Self> {
        if !(jump_intensity.is_finite() && log_jump_mean.is_finite() && log_jump_vol.is_finite())
        {
            return Err(Error::OutOfDomain(format!(
                "jump parameters must be finite (intensity {jump_intensity}, \
                 mean {log_jump_mean}, vol {log_jump_vol})"
            )));
        }
        if jump_intensity < 0.0 {
            return Err(Error::OutOfDomain(format!(
                "negative jump intensity {jump_intensity}"
            )));
        }
        if log_jump_vol < 0.0 {
            return Err(Error::OutOfDomain(format!(
                "negative log-jump volatility {log_jump_vol}"
            )));
        }
        Ok(Self {
            diffusion,
            jump_intensity,
            log_jump_mean,
            log_jump_vol,
        })
    }

    /// The diffusion part (spot, curves, volatility).
    pub fn diffusion(&self) -> &Arc<GeneralizedBlackScholesProcess> {
        &self.diffusion
    }

    /// Jump intensity λ.
    pub fn jump_intensity(&self) -> Real {
        self.jump_intensity
    }

    /// Mean μ of the log jump size.
    pub fn log_jump_mean(&self) -> Real {
        self.log_jump_mean
    }

    /// Volatility σ_J of the log jump size.
    pub fn log_jump_vol(&self) -> Real {
        self.log_jump_vol
    }

    /// Compensator `k = exp(μ + σ_J²/2) − 1`.
    pub fn jump_compensator(&self) -> Real {
        (self.log_jump_mean + 0.5 * self.log_jump_vol * self.log_jump_vol).exp_m1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use jd_quotes::SimpleQuote;
    use jd_termstructures::{BlackConstantVol, FlatForward};
    use jd_time::{Actual365Fixed, Date};

    fn diffusion() -> Arc<GeneralizedBlackScholesProcess> {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        Arc::new(crate::black_scholes_process::black_scholes_process(
            Arc::new(SimpleQuote::new(100.0)),
            Arc::new(FlatForward::continuous(ref_date, 0.05, Actual365Fixed)),
            Arc::new(BlackConstantVol::new(ref_date, 0.20, Actual365Fixed)),
        ))
    }

    #[test]
    fn merton_compensator() {
        let m = Merton76Process::new(diffusion(), 1.0, -0.1, 0.15).unwrap();
        let expected = (-0.1 + 0.5 * 0.0225_f64).exp() - 1.0;
        assert_abs_diff_eq!(m.jump_compensator(), expected, epsilon = 1e-15);
        assert_abs_diff_eq!(m.jump_intensity(), 1.0);
        assert_abs_diff_eq!(m.log_jump_mean(), -0.1);
        assert_abs_diff_eq!(m.log_jump_vol(), 0.15);
    }

    #[test]
    fn zero_jump_size_has_zero_compensator() {
        let m = Merton76Process::new(diffusion(), 0.5, 0.0, 0.0).unwrap();
        assert_eq!(m.jump_compensator(), 0.0);
    }

    #[test]
    fn rejects_negative_jump_vol() {
        let err = Merton76Process::new(diffusion(), 0.1, -0.1, -0.01).unwrap_err();
        assert!(matches!(err, Error::OutOfDomain(_)), "{err:?}");
    }

    #[test]
    fn rejects_negative_or_nan_intensity() {
        assert!(Merton76Process::new(diffusion(), -1.0, 0.0, 0.1).is_err());
        assert!(Merton76Process::new(diffusion(), f64::NAN, 0.0, 0.1).is_err());
    }
}
