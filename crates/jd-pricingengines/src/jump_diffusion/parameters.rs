//! Scalars derived from a Merton process for one option expiry.

use jd_core::{fail, Real, Result, Size, Time};
use jd_processes::{GeneralizedBlackScholesProcess, Merton76Process};
use jd_termstructures::{BlackConstantVol, BlackVolTermStructure, FlatForward, YieldTermStructure};
use jd_time::{Date, DayCounter};
use std::sync::Arc;

use super::convergence::IterationTerm;

/// Jump parameters and the diffusion data the series needs, read once per
/// calculation.
#[derive(Debug, Clone)]
pub struct JumpDiffusionParameters {
    /// λ, the jump intensity under the pricing measure.
    pub jump_intensity: Real,
    /// σ_J².
    pub jump_square_vol: Real,
    /// μ + σ_J²/2.
    pub mu_plus_half_square_vol: Real,
    /// Jump compensator `k = exp(μ + σ_J²/2) − 1`.
    pub k: Real,
    /// Intensity of the jump-size-weighted counting measure, `(k + 1)·λ`.
    pub lambda: Real,
    /// Black variance of the volatility curve at the last exercise date.
    pub variance: Real,
    /// Year fraction from the volatility curve's reference date to the last
    /// exercise date, in the volatility curve's day count.
    pub t: Time,
    /// Continuous rate implied by the risk-free discount at the last date.
    pub risk_free_rate: Real,
    /// Anchor of the per-term flat curves.
    pub rate_reference_date: Date,
    /// Day counter of the per-term flat curves.
    pub day_counter: Arc<dyn DayCounter>,
    /// Mean `lambda·t` of the Poisson weights.
    pub poisson_mean: Real,
}

impl JumpDiffusionParameters {
    /// Read the jump parameters and the diffusion curves of `process` for an
    /// option whose last exercise date is `last_date`.
    ///
    /// # Errors
    /// `Error::InvalidArguments` if `last_date` is not after the volatility
    /// curve's reference date, or if the implied risk-free rate is not finite.
    pub fn from_process(process: &Merton76Process, last_date: Date) -> Result<Self> {
        let diffusion = process.diffusion();
        let vol_ts = diffusion.black_volatility();
        let risk_free = diffusion.risk_free_rate();

        let jump_intensity = process.jump_intensity();
        let jump_square_vol = process.log_jump_vol() * process.log_jump_vol();
        let mu_plus_half_square_vol = process.log_jump_mean() + 0.5 * jump_square_vol;
        let k = mu_plus_half_square_vol.exp() - 1.0;
        let lambda = (k + 1.0) * jump_intensity;

        // the strike is irrelevant here
        let variance = vol_ts.black_variance(last_date, 1.0);
        let day_counter = vol_ts.shared_day_counter();
        let t = day_counter.year_fraction(vol_ts.reference_date(), last_date);
        if t <= 0.0 {
            fail!(
                "option expired: last exercise date {last_date} is not after {}",
                vol_ts.reference_date()
            );
        }
        let risk_free_rate = -risk_free.discount_date(last_date).ln() / t;
        if !risk_free_rate.is_finite() {
            fail!("risk-free discount at {last_date} implies a non-finite rate");
        }

        Ok(Self {
            jump_intensity,
            jump_square_vol,
            mu_plus_half_square_vol,
            k,
            lambda,
            variance,
            t,
            risk_free_rate,
            rate_reference_date: risk_free.reference_date(),
            day_counter,
            poisson_mean: lambda * t,
        })
    }

    /// Volatility of the diffusion conditional on `i` jumps.
    pub fn term_volatility(&self, i: Size) -> Real {
        ((self.variance + i as Real * self.jump_square_vol) / self.t).sqrt()
    }

    /// Risk-free rate of the diffusion conditional on `i` jumps.
    pub fn term_rate(&self, i: Size) -> Real {
        self.risk_free_rate - self.jump_intensity * self.k
            + i as Real * self.mu_plus_half_square_vol / self.t
    }

    /// `diffusion` with its risk-free curve and volatility surface replaced
    /// by flat curves at the term's rate and volatility.
    pub fn term_process(
        &self,
        diffusion: &GeneralizedBlackScholesProcess,
        term: &IterationTerm,
    ) -> GeneralizedBlackScholesProcess {
        let risk_free: Arc<dyn YieldTermStructure> = Arc::new(FlatForward::with_shared_day_counter(
            self.rate_reference_date,
            term.rate,
            Arc::clone(&self.day_counter),
        ));
        let black_vol: Arc<dyn BlackVolTermStructure> =
            Arc::new(BlackConstantVol::with_shared_day_counter(
                self.rate_reference_date,
                term.volatility,
                Arc::clone(&self.day_counter),
            ));
        diffusion.with_curves(risk_free, black_vol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use jd_core::Error;
    use jd_processes::black_scholes_process;
    use jd_quotes::SimpleQuote;
    use jd_time::Actual365Fixed;

    fn merton(intensity: Real) -> Merton76Process {
        let today = Date::from_ymd(2025, 1, 2).unwrap();
        let bs = black_scholes_process(
            Arc::new(SimpleQuote::new(100.0)),
            Arc::new(FlatForward::continuous(today, 0.05, Actual365Fixed)),
            Arc::new(BlackConstantVol::new(today, 0.20, Actual365Fixed)),
        );
        Merton76Process::new(Arc::new(bs), intensity, -0.1, 0.15).unwrap()
    }

    #[test]
    fn derived_scalars() {
        let expiry = Date::from_ymd(2026, 1, 2).unwrap();
        let p = JumpDiffusionParameters::from_process(&merton(0.1), expiry).unwrap();
        assert_abs_diff_eq!(p.t, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.variance, 0.04, epsilon = 1e-15);
        assert_abs_diff_eq!(p.risk_free_rate, 0.05, epsilon = 1e-14);
        assert_abs_diff_eq!(p.jump_square_vol, 0.0225, epsilon = 1e-15);
        assert_abs_diff_eq!(p.mu_plus_half_square_vol, -0.08875, epsilon = 1e-15);
        assert_abs_diff_eq!(p.k, (-0.08875_f64).exp() - 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.lambda, 0.1 * (-0.08875_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(p.poisson_mean, p.lambda, epsilon = 1e-15);
    }

    #[test]
    fn term_volatility_and_rate() {
        let expiry = Date::from_ymd(2026, 1, 2).unwrap();
        let p = JumpDiffusionParameters::from_process(&merton(0.1), expiry).unwrap();
        assert_abs_diff_eq!(p.term_volatility(0), 0.2, epsilon = 1e-14);
        assert_abs_diff_eq!(p.term_volatility(2), (0.04_f64 + 0.045).sqrt(), epsilon = 1e-14);
        let r0 = 0.05 - 0.1 * p.k;
        assert_abs_diff_eq!(p.term_rate(0), r0, epsilon = 1e-14);
        assert_abs_diff_eq!(p.term_rate(3), r0 + 3.0 * -0.08875, epsilon = 1e-14);
    }

    #[test]
    fn term_process_uses_flat_curves() {
        let expiry = Date::from_ymd(2026, 1, 2).unwrap();
        let m = merton(0.1);
        let p = JumpDiffusionParameters::from_process(&m, expiry).unwrap();
        let term = IterationTerm {
            index: 1,
            volatility: 0.3,
            rate: 0.02,
            weight: 0.5,
        };
        let proc_1 = p.term_process(m.diffusion(), &term);
        assert_abs_diff_eq!(proc_1.black_volatility().black_vol(expiry, 100.0), 0.3);
        assert_abs_diff_eq!(
            proc_1.risk_free_rate().discount_date(expiry),
            (-0.02_f64).exp(),
            epsilon = 1e-15
        );
        assert!(Arc::ptr_eq(proc_1.state_variable(), m.diffusion().state_variable()));
    }

    #[test]
    fn expired_option_is_rejected() {
        let today = Date::from_ymd(2025, 1, 2).unwrap();
        let err = JumpDiffusionParameters::from_process(&merton(0.1), today).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)), "{err:?}");
    }
}
