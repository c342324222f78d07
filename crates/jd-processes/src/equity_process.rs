//! The single-asset processes an option engine can be bound to.

use crate::black_scholes_process::GeneralizedBlackScholesProcess;
use crate::merton76_process::Merton76Process;
use std::sync::Arc;

/// An equity process, either diffusion-only or with Poisson jumps.
///
/// Engines match on the variant they support and report
/// `Error::TypeMismatch` with [`kind`](EquityProcess::kind) otherwise.
#[derive(Debug, Clone)]
pub enum EquityProcess {
    /// Generalized Black-Scholes diffusion.
    Diffusion(Arc<GeneralizedBlackScholesProcess>),
    /// Merton (1976) jump diffusion.
    JumpDiffusion(Arc<Merton76Process>),
}

impl EquityProcess {
    /// Name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            EquityProcess::Diffusion(_) => "diffusion",
            EquityProcess::JumpDiffusion(_) => "jump-diffusion",
        }
    }

    /// The diffusion market data; for a jump process, its continuous part.
    pub fn diffusion(&self) -> &Arc<GeneralizedBlackScholesProcess> {
        match self {
            EquityProcess::Diffusion(p) => p,
            EquityProcess::JumpDiffusion(p) => p.diffusion(),
        }
    }
}

impl From<GeneralizedBlackScholesProcess> for EquityProcess {
    fn from(p: GeneralizedBlackScholesProcess) -> Self {
        EquityProcess::Diffusion(Arc::new(p))
    }
}

impl From<Merton76Process> for EquityProcess {
    fn from(p: Merton76Process) -> Self {
        EquityProcess::JumpDiffusion(Arc::new(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jd_quotes::SimpleQuote;
    use jd_termstructures::{BlackConstantVol, FlatForward};
    use jd_time::{Actual365Fixed, Date};

    #[test]
    fn kind_and_diffusion_part() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let bs = Arc::new(crate::black_scholes_process::black_scholes_process(
            Arc::new(SimpleQuote::new(100.0)),
            Arc::new(FlatForward::continuous(ref_date, 0.05, Actual365Fixed)),
            Arc::new(BlackConstantVol::new(ref_date, 0.20, Actual365Fixed)),
        ));
        let plain = EquityProcess::Diffusion(Arc::clone(&bs));
        assert_eq!(plain.kind(), "diffusion");

        let jumpy: EquityProcess = Merton76Process::new(Arc::clone(&bs), 0.1, -0.1, 0.15)
            .unwrap()
            .into();
        assert_eq!(jumpy.kind(), "jump-diffusion");
        assert!(Arc::ptr_eq(jumpy.diffusion(), &bs));
    }
}
