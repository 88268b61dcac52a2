//! Acquisition orchestration: cache fast path, then background → popup → redirect.

pub mod strategy;

pub use strategy::*;

// self
use crate::{
	_prelude::*,
	config::{CallerConfig, SessionConfig},
	detect::{FragmentLocation, RedirectState},
	obs::{self, AcquireSpan, StrategyOutcome},
	provider::{AuthCode, AuthorizeRequest, Prompt, ProviderClient},
	state::{AppStateProvider, CompositeState, NoAppState},
};

/// Outcome of one acquisition call.
#[derive(Debug)]
pub enum Acquisition {
	/// An authorization code was obtained on this page.
	Issued(AuthCode),
	/// A full-page redirect was started; the code arrives on the next page load,
	/// where it is recovered by redirect detection.
	NavigationInitiated,
}
impl Acquisition {
	/// Returns the issued code, if this outcome carries one.
	pub fn code(&self) -> Option<&AuthCode> {
		match self {
			Acquisition::Issued(code) => Some(code),
			Acquisition::NavigationInitiated => None,
		}
	}
}

/// Coordinates authorization-code acquisition for every frontend in a host session.
///
/// The session owns the provider client, the immutable per-session configuration,
/// the app-state hook, and the redirect state shared by detection and the
/// pending-code cache. Hosts construct one session per page load, run
/// [`initialize_from_location`](Self::initialize_from_location) during bootstrap,
/// and then hand clones to their frontends; there is no ambient global state.
pub struct Session<P>
where
	P: ?Sized + ProviderClient,
{
	/// Identity-provider SDK used by every acquisition strategy.
	pub provider: Arc<P>,
	/// Immutable per-session configuration.
	pub config: SessionConfig,
	/// Host hook computing the opaque state preserved across redirects.
	pub app_state_provider: Arc<dyn AppStateProvider>,
	redirect: Arc<RedirectState>,
}
impl<P> Session<P>
where
	P: ?Sized + ProviderClient,
{
	/// Creates a session around the provided SDK client and configuration.
	pub fn new(provider: impl Into<Arc<P>>, config: SessionConfig) -> Self {
		Self {
			provider: provider.into(),
			config,
			app_state_provider: Arc::new(NoAppState),
			redirect: Arc::new(RedirectState::default()),
		}
	}

	/// Sets or replaces the app-state provider consulted before a redirect.
	pub fn with_app_state_provider(mut self, provider: Arc<dyn AppStateProvider>) -> Self {
		self.app_state_provider = provider;

		self
	}

	/// Runs redirect detection against the host location, at most once per page load.
	///
	/// Returns the restored app state so the bootstrap can re-establish its
	/// navigation immediately; later invocations are no-ops.
	pub fn initialize_from_location(&self, location: &dyn FragmentLocation) -> Option<&str> {
		self.redirect.initialize_from_location(location);

		self.redirect.app_state()
	}

	/// Host navigation state recovered from this page's redirect return, if any.
	pub fn restored_app_state(&self) -> Option<&str> {
		self.redirect.app_state()
	}

	/// Code captured for the client by a prior redirect round-trip, if any.
	pub fn pending_code(&self, client_id: &str) -> Option<AuthCode> {
		self.redirect.pending_code(client_id)
	}

	/// Resolves an authorization code for the caller.
	///
	/// Checks the pending-code cache first, then evaluates the enabled strategies
	/// in fixed order. Background and popup failures are swallowed and fall
	/// through; a redirect that starts successfully ends this page's lifetime and
	/// is reported as [`Acquisition::NavigationInitiated`]. When every enabled
	/// strategy is exhausted the call fails with [`Error::AllFallbacksFailed`].
	pub async fn acquire(&self, caller: CallerConfig) -> Result<Acquisition> {
		caller.validate()?;

		let span = AcquireSpan::new(&caller.client_id);

		span.instrument(self.acquire_validated(caller)).await
	}

	async fn acquire_validated(&self, caller: CallerConfig) -> Result<Acquisition> {
		if let Some(code) = self.redirect.pending_code(&caller.client_id) {
			return Ok(Acquisition::Issued(code));
		}

		for kind in StrategyKind::ORDER {
			match self.attempt(kind, &caller).await {
				StrategyAttempt::Success(code) => {
					self.redirect.publish_code(caller.client_id.clone(), code.clone());
					obs::record_strategy_outcome(kind, StrategyOutcome::Success);

					return Ok(Acquisition::Issued(code));
				},
				StrategyAttempt::Navigated => {
					obs::record_strategy_outcome(kind, StrategyOutcome::Success);

					return Ok(Acquisition::NavigationInitiated);
				},
				StrategyAttempt::Skipped => {
					obs::record_strategy_outcome(kind, StrategyOutcome::Skipped);
				},
				StrategyAttempt::Failed(reason) => {
					obs::record_strategy_outcome(kind, StrategyOutcome::Failure);
					obs::debug_failure(self.config.debug, kind, reason.as_ref());

					// No fallback remains after the redirect; its failure is terminal.
					if kind == StrategyKind::Redirect {
						return Err(Error::RedirectStart { source: reason });
					}
				},
			}
		}

		Err(Error::AllFallbacksFailed)
	}

	async fn attempt(&self, kind: StrategyKind, caller: &CallerConfig) -> StrategyAttempt {
		if !kind.enabled(&self.config) {
			return StrategyAttempt::Skipped;
		}

		obs::record_strategy_outcome(kind, StrategyOutcome::Attempt);

		match kind {
			StrategyKind::Background => {
				let request = self.authorize_request(caller, Some(Prompt::None), None);

				match self.provider.acquire_silent(request).await {
					Ok(code) => StrategyAttempt::Success(code),
					Err(reason) => StrategyAttempt::Failed(reason),
				}
			},
			StrategyKind::Popup => {
				let request = self.authorize_request(caller, None, None);

				match self.provider.acquire_popup(request).await {
					Ok(code) => StrategyAttempt::Success(code),
					Err(reason) => StrategyAttempt::Failed(reason),
				}
			},
			StrategyKind::Redirect => {
				let state = CompositeState::new(
					caller.client_id.clone(),
					self.app_state_provider.app_state(caller),
				);
				let request = self.authorize_request(caller, None, Some(state.encode()));

				match self.provider.start_redirect(request) {
					Ok(()) => StrategyAttempt::Navigated,
					Err(reason) => StrategyAttempt::Failed(reason),
				}
			},
		}
	}

	fn authorize_request(
		&self,
		caller: &CallerConfig,
		prompt: Option<Prompt>,
		state: Option<String>,
	) -> AuthorizeRequest {
		AuthorizeRequest {
			issuer: caller.issuer.clone(),
			client_id: caller.client_id.clone(),
			redirect_uri: self.config.redirect_uri.clone(),
			scopes: self.config.scopes.clone(),
			state,
			prompt,
		}
	}
}
impl<P> Clone for Session<P>
where
	P: ?Sized + ProviderClient,
{
	fn clone(&self) -> Self {
		Self {
			provider: self.provider.clone(),
			config: self.config.clone(),
			app_state_provider: self.app_state_provider.clone(),
			redirect: self.redirect.clone(),
		}
	}
}
impl<P> Debug for Session<P>
where
	P: ?Sized + ProviderClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("config", &self.config)
			.field("detect_phase", &self.redirect.phase())
			.finish()
	}
}
