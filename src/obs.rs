//! Optional observability helpers for acquisition strategies.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap each acquisition in an `authcode_relay.acquire` span and to emit
//!   debug events for recoverable strategy failures (still gated by the session's `debug` flag).
//! - Enable `metrics` to increment the `authcode_relay_strategy_total` counter for every strategy
//!   evaluation, labeled by `strategy` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded per strategy evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyOutcome {
	/// An enabled strategy is about to run.
	Attempt,
	/// The strategy produced a code or started the redirect navigation.
	Success,
	/// The strategy is disabled and was not attempted.
	Skipped,
	/// The strategy ran and failed.
	Failure,
}
impl StrategyOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StrategyOutcome::Attempt => "attempt",
			StrategyOutcome::Success => "success",
			StrategyOutcome::Skipped => "skipped",
			StrategyOutcome::Failure => "failure",
		}
	}
}
impl Display for StrategyOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
