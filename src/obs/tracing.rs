// self
use crate::{_prelude::*, session::StrategyKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedAcquire<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedAcquire<F> = F;

/// A span builder wrapping one acquisition call.
#[derive(Clone, Debug)]
pub struct AcquireSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl AcquireSpan {
	/// Creates a new span tagged with the requesting client identifier.
	pub fn new(client_id: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("authcode_relay.acquire", client = client_id);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = client_id;

			Self {}
		}
	}

	/// Instruments the acquisition future without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedAcquire<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event for a recoverable strategy failure.
///
/// Events fire only when the session's `debug` flag is set, and compile away
/// entirely without the `tracing` feature; either way the failure itself is never
/// surfaced to the caller.
pub fn debug_failure(debug: bool, kind: StrategyKind, reason: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		if debug {
			tracing::debug!(strategy = kind.as_str(), error = %reason, "Strategy failed; falling through.");
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (debug, kind, reason);
	}
}
