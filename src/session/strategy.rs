//! Ordered strategy descriptors evaluated by the acquisition fold.

// self
use crate::{
	_prelude::*,
	config::SessionConfig,
	provider::{AuthCode, ProviderError},
};

/// Acquisition strategies in their fixed fallback order.
///
/// The order never changes; configuration can only remove entries from
/// consideration via the per-strategy flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
	/// Silent, no-UI acquisition (`prompt=none`).
	Background,
	/// Interactive popup window.
	Popup,
	/// Full-page redirect to the authorization endpoint.
	Redirect,
}
impl StrategyKind {
	/// Fixed evaluation order: background, then popup, then redirect.
	pub const ORDER: [Self; 3] = [Self::Background, Self::Popup, Self::Redirect];

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StrategyKind::Background => "background",
			StrategyKind::Popup => "popup",
			StrategyKind::Redirect => "redirect",
		}
	}

	/// Whether the session configuration enables this strategy.
	pub fn enabled(self, config: &SessionConfig) -> bool {
		match self {
			StrategyKind::Background => config.use_background,
			StrategyKind::Popup => config.use_popup_fallback,
			StrategyKind::Redirect => config.use_redirect_fallback,
		}
	}
}
impl Display for StrategyKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Tagged outcome of one strategy evaluation.
///
/// The orchestrator folds over [`StrategyKind::ORDER`], short-circuiting on
/// [`Success`](Self::Success) or [`Navigated`](Self::Navigated); everything else
/// falls through to the next descriptor.
#[derive(Debug)]
pub enum StrategyAttempt {
	/// The strategy produced a code; remaining strategies are skipped.
	Success(AuthCode),
	/// A full-page navigation was started; no code arrives on this page.
	Navigated,
	/// The strategy is disabled by configuration and was not attempted.
	Skipped,
	/// The strategy ran and failed.
	Failed(ProviderError),
}
