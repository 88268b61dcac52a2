// self
use crate::{obs::StrategyOutcome, session::StrategyKind};

/// Records a strategy outcome via the global metrics recorder (when enabled).
pub fn record_strategy_outcome(kind: StrategyKind, outcome: StrategyOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"authcode_relay_strategy_total",
			"strategy" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
