//! Generalized Black-Scholes process.
//!
//! `dS/S = (r(t) − q(t)) dt + σ(t, S) dW`
//!
//! The process is a bundle of market data: a spot quote, a risk-free curve, a
//! dividend-yield curve and a Black-volatility surface. All four are shared
//! handles; building a new process around different curves never copies the
//! others.

use jd_core::{Real, Result};
use jd_quotes::Quote;
use jd_termstructures::{BlackVolTermStructure, FlatForward, YieldTermStructure};
use jd_time::Actual365Fixed;
use std::sync::Arc;

/// A generalized Black-Scholes (diffusion-only) process.
#[derive(Debug, Clone)]
pub struct GeneralizedBlackScholesProcess {
    state_variable: Arc<dyn Quote>,
    dividend_yield: Arc<dyn YieldTermStructure>,
    risk_free_rate: Arc<dyn YieldTermStructure>,
    black_vol: Arc<dyn BlackVolTermStructure>,
}

impl GeneralizedBlackScholesProcess {
    /// Create a process from its four market-data components.
    pub fn new(
        state_variable: Arc<dyn Quote>,
        dividend_yield: Arc<dyn YieldTermStructure>,
        risk_free_rate: Arc<dyn YieldTermStructure>,
        black_vol: Arc<dyn BlackVolTermStructure>,
    ) -> Self {
        Self {
            state_variable,
            dividend_yield,
            risk_free_rate,
            black_vol,
        }
    }

    /// A copy of this process with the risk-free curve and volatility surface
    /// replaced; the spot and dividend curve stay shared.
    pub fn with_curves(
        &self,
        risk_free_rate: Arc<dyn YieldTermStructure>,
        black_vol: Arc<dyn BlackVolTermStructure>,
    ) -> Self {
        Self {
            state_variable: Arc::clone(&self.state_variable),
            dividend_yield: Arc::clone(&self.dividend_yield),
            risk_free_rate,
            black_vol,
        }
    }

    /// The spot quote.
    pub fn state_variable(&self) -> &Arc<dyn Quote> {
        &self.state_variable
    }

    /// Current spot value.
    ///
    /// # Errors
    /// `Error::InvalidArguments` if the spot quote is empty.
    pub fn spot(&self) -> Result<Real> {
        self.state_variable.checked_value()
    }

    /// The dividend-yield curve.
    pub fn dividend_yield(&self) -> &Arc<dyn YieldTermStructure> {
        &self.dividend_yield
    }

    /// The risk-free curve.
    pub fn risk_free_rate(&self) -> &Arc<dyn YieldTermStructure> {
        &self.risk_free_rate
    }

    /// The Black volatility surface.
    pub fn black_volatility(&self) -> &Arc<dyn BlackVolTermStructure> {
        &self.black_vol
    }
}

/// A Black-Scholes process with no dividends (`q = 0`).
///
/// The zero dividend curve is anchored at the risk-free curve's reference
/// date.
pub fn black_scholes_process(
    state_variable: Arc<dyn Quote>,
    risk_free_rate: Arc<dyn YieldTermStructure>,
    black_vol: Arc<dyn BlackVolTermStructure>,
) -> GeneralizedBlackScholesProcess {
    let zero_yield: Arc<dyn YieldTermStructure> = Arc::new(FlatForward::continuous(
        risk_free_rate.reference_date(),
        0.0,
        Actual365Fixed,
    ));
    GeneralizedBlackScholesProcess::new(state_variable, zero_yield, risk_free_rate, black_vol)
}
