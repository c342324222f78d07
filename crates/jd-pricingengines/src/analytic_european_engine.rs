//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Prices European vanilla options under a diffusion-only process with the
//! closed-form Black-Scholes-Merton formula, returning the value and the six
//! first/second-order sensitivities.

use jd_core::{errors::Error, fail, Real, Result};
use jd_instruments::{
    ExerciseType, GenericEngine, OneAssetOptionResults, OptionType, PricingEngine,
    VanillaOptionArguments,
};
use jd_math::distributions::{normal_cdf, normal_pdf};
use jd_processes::EquityProcess;

/// Black-Scholes price and Greeks of a European option.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlackScholesGreeks {
    /// Option price.
    pub price: Real,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ, per unit of volatility.
    pub vega: Real,
    /// ∂V/∂t, per year.
    pub theta: Real,
    /// ∂V/∂r, per unit of rate.
    pub rho: Real,
    /// ∂V/∂q, per unit of dividend yield.
    pub dividend_rho: Real,
}

/// Compute Black-Scholes price and Greeks for a European option.
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.
///
/// A non-positive `time_to_expiry` returns the intrinsic value with zero
/// sensitivities.
pub fn black_scholes_merton(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Real,
    dividend_yield: Real,
    volatility: Real,
    time_to_expiry: Real,
) -> BlackScholesGreeks {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        return BlackScholesGreeks {
            price: (phi * (spot - strike)).max(0.0),
            ..BlackScholesGreeks::default()
        };
    }

    let r = risk_free_rate;
    let q = dividend_yield;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();
    let fwd = spot * df_q / df_r;

    let (d1, d2) = if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
        (d1, d1 - std_dev)
    } else {
        let big = if fwd > strike { 1e15 } else { -1e15 };
        (big, big)
    };

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let price = phi * (spot * df_q * nd1 - strike * df_r * nd2);
    let delta = phi * df_q * nd1;
    let gamma = if std_dev > 1e-15 {
        df_q * npd1 / (spot * std_dev)
    } else {
        0.0
    };
    let vega = spot * df_q * npd1 * sqrt_t;
    let theta = -(spot * df_q * npd1 * sigma) / (2.0 * sqrt_t) - phi * r * strike * df_r * nd2
        + phi * q * spot * df_q * nd1;
    let rho = phi * strike * t * df_r * nd2;
    let dividend_rho = -phi * spot * t * df_q * nd1;

    BlackScholesGreeks {
        price,
        delta,
        gamma,
        vega,
        theta,
        rho,
        dividend_rho,
    }
}

/// Analytic pricing engine for European vanilla options.
///
/// Accepts only a diffusion process and a European exercise. Rates, dividend
/// yield and volatility are read off the curves at the exercise date and
/// expressed as continuous equivalents over the risk-free curve's time.
#[derive(Debug, Default)]
pub struct AnalyticEuropeanEngine {
    engine: GenericEngine<VanillaOptionArguments, OneAssetOptionResults>,
}

impl AnalyticEuropeanEngine {
    /// Create an engine with empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    fn price(&self) -> Result<BlackScholesGreeks> {
        let args = &self.engine.arguments;
        let payoff = args.payoff()?;
        let expiry = args.exercise()?.last_date();
        let process = match args.process()? {
            EquityProcess::Diffusion(p) => p,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "diffusion",
                    found: other.kind(),
                })
            }
        };

        let spot = process.spot()?;
        let strike = payoff.strike();
        let risk_free = process.risk_free_rate();
        let t = risk_free.time_from_reference(expiry);
        if t <= 0.0 {
            return Ok(black_scholes_merton(
                payoff.option_type(),
                spot,
                strike,
                0.0,
                0.0,
                0.0,
                t,
            ));
        }

        let variance = process.black_volatility().black_variance(expiry, strike);
        if variance.is_nan() || variance < 0.0 {
            fail!("negative or undefined Black variance ({variance}) at {expiry}");
        }
        let r = -risk_free.discount_date(expiry).ln() / t;
        let q = -process.dividend_yield().discount_date(expiry).ln() / t;
        let sigma = (variance / t).sqrt();

        Ok(black_scholes_merton(
            payoff.option_type(),
            spot,
            strike,
            r,
            q,
            sigma,
            t,
        ))
    }
}

impl PricingEngine<VanillaOptionArguments, OneAssetOptionResults> for AnalyticEuropeanEngine {
    fn reset(&mut self) {
        self.engine.reset();
    }

    fn arguments(&self) -> &VanillaOptionArguments {
        &self.engine.arguments
    }

    fn arguments_mut(&mut self) -> &mut VanillaOptionArguments {
        &mut self.engine.arguments
    }

    fn validate(&self) -> Result<()> {
        let args = &self.engine.arguments;
        args.validate()?;
        let exercise = args.exercise()?;
        if exercise.exercise_type() != ExerciseType::European {
            fail!("not a European option: {exercise}");
        }
        if let EquityProcess::JumpDiffusion(_) = args.process()? {
            return Err(Error::TypeMismatch {
                expected: "diffusion",
                found: "jump-diffusion",
            });
        }
        Ok(())
    }

    fn calculate(&mut self) -> Result<()> {
        let greeks = match self.price() {
            Ok(greeks) => greeks,
            Err(e) => {
                self.engine.reset();
                return Err(e);
            }
        };
        let results = &mut self.engine.results;
        results.value = greeks.price;
        results.delta = greeks.delta;
        results.gamma = greeks.gamma;
        results.theta = greeks.theta;
        results.vega = greeks.vega;
        results.rho = greeks.rho;
        results.dividend_rho = greeks.dividend_rho;
        Ok(())
    }

    fn results(&self) -> &OneAssetOptionResults {
        &self.engine.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use jd_instruments::{Exercise, VanillaOption};
    use jd_processes::{black_scholes_process, GeneralizedBlackScholesProcess, Merton76Process};
    use jd_quotes::SimpleQuote;
    use jd_termstructures::{BlackConstantVol, FlatForward};
    use jd_time::{Actual365Fixed, Date};
    use std::sync::Arc;

    fn bs(spot: Real, r: Real, q: Real, vol: Real) -> Arc<GeneralizedBlackScholesProcess> {
        let ref_date = Date::from_ymd(2025, 1, 15).unwrap();
        Arc::new(GeneralizedBlackScholesProcess::new(
            Arc::new(SimpleQuote::new(spot)),
            Arc::new(FlatForward::continuous(ref_date, q, Actual365Fixed)),
            Arc::new(FlatForward::continuous(ref_date, r, Actual365Fixed)),
            Arc::new(BlackConstantVol::new(ref_date, vol, Actual365Fixed)),
        ))
    }

    #[test]
    fn bs_call_price() {
        let g = black_scholes_merton(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
        assert_abs_diff_eq!(g.price, 10.4506, epsilon = 1e-4);
        assert!(g.delta > 0.5 && g.delta < 0.8, "delta = {}", g.delta);
        assert!(g.gamma > 0.0);
        assert!(g.vega > 0.0);
        assert!(g.rho > 0.0);
        assert!(g.dividend_rho < 0.0);
    }

    #[test]
    fn bs_put_call_parity_with_dividends() {
        let (s, k, r, q, sigma, t) = (100.0, 105.0, 0.08, 0.03, 0.25, 0.5);
        let call = black_scholes_merton(OptionType::Call, s, k, r, q, sigma, t);
        let put = black_scholes_merton(OptionType::Put, s, k, r, q, sigma, t);
        let parity = call.price - s * (-q * t).exp() + k * (-r * t).exp();
        assert_abs_diff_eq!(put.price, parity, epsilon = 1e-10);
        // Δ_call − Δ_put = e^{−qT}
        assert_abs_diff_eq!(call.delta - put.delta, (-q * t).exp(), epsilon = 1e-12);
    }

    #[test]
    fn bs_zero_vol_call() {
        let g = black_scholes_merton(OptionType::Call, 100.0, 95.0, 0.05, 0.0, 0.0, 1.0);
        let expected = 100.0 - 95.0 * (-0.05_f64).exp();
        assert_abs_diff_eq!(g.price, expected, epsilon = 1e-10);
        assert_eq!(g.gamma, 0.0);
    }

    #[test]
    fn expired_option_pays_intrinsic() {
        let g = black_scholes_merton(OptionType::Put, 90.0, 100.0, 0.05, 0.0, 0.2, 0.0);
        assert_eq!(g.price, 10.0);
        assert_eq!(g.delta, 0.0);
    }

    #[test]
    fn dividend_rho_matches_finite_difference() {
        let h = 1e-6;
        let up = black_scholes_merton(OptionType::Call, 100.0, 95.0, 0.05, 0.02 + h, 0.3, 0.75);
        let dn = black_scholes_merton(OptionType::Call, 100.0, 95.0, 0.05, 0.02 - h, 0.3, 0.75);
        let mid = black_scholes_merton(OptionType::Call, 100.0, 95.0, 0.05, 0.02, 0.3, 0.75);
        assert_relative_eq!(mid.dividend_rho, (up.price - dn.price) / (2.0 * h), max_relative = 1e-6);
    }

    #[test]
    fn engine_prices_through_option() {
        let expiry = Date::from_ymd(2026, 1, 15).unwrap();
        let option = VanillaOption::european(OptionType::Call, 100.0, expiry);
        let mut engine = AnalyticEuropeanEngine::new();
        let res = option
            .price(&mut engine, EquityProcess::Diffusion(bs(100.0, 0.05, 0.0, 0.20)))
            .unwrap();
        assert_abs_diff_eq!(res.value, 10.4506, epsilon = 1e-3);
        assert!(res.vega > 0.0);
    }

    #[test]
    fn engine_rejects_american_exercise() {
        let today = Date::from_ymd(2025, 1, 15).unwrap();
        let expiry = Date::from_ymd(2026, 1, 15).unwrap();
        let option = VanillaOption::new(
            Arc::new(jd_instruments::PlainVanillaPayoff::new(OptionType::Put, 100.0)),
            Exercise::american(today, expiry),
        );
        let mut engine = AnalyticEuropeanEngine::new();
        let err = option
            .price(&mut engine, EquityProcess::Diffusion(bs(100.0, 0.05, 0.0, 0.2)))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)), "{err:?}");
    }

    #[test]
    fn engine_rejects_jump_process() {
        let expiry = Date::from_ymd(2026, 1, 15).unwrap();
        let option = VanillaOption::european(OptionType::Call, 100.0, expiry);
        let jumps = Merton76Process::new(bs(100.0, 0.05, 0.0, 0.2), 0.1, -0.1, 0.15).unwrap();
        let mut engine = AnalyticEuropeanEngine::new();
        let err = option.price(&mut engine, jumps.into()).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TypeMismatch {
                    expected: "diffusion",
                    found: "jump-diffusion"
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn unset_spot_resets_results() {
        let ref_date = Date::from_ymd(2025, 1, 15).unwrap();
        let expiry = Date::from_ymd(2026, 1, 15).unwrap();
        let process = black_scholes_process(
            Arc::new(SimpleQuote::empty()),
            Arc::new(FlatForward::continuous(ref_date, 0.05, Actual365Fixed)),
            Arc::new(BlackConstantVol::new(ref_date, 0.2, Actual365Fixed)),
        );
        let option = VanillaOption::european(OptionType::Call, 100.0, expiry);
        let mut engine = AnalyticEuropeanEngine::new();
        engine.engine.results.value = 1.0;
        assert!(option.price(&mut engine, process.into()).is_err());
        assert_eq!(engine.results(), &OneAssetOptionResults::default());
    }
}
