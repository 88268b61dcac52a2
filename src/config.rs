//! Session and caller configuration values threaded through the orchestrator.

// self
use crate::_prelude::*;

/// Per-call acquisition parameters supplied by an embedded frontend.
///
/// The pair is transient: it is not retained beyond one acquisition call except
/// implicitly through the pending-code cache key derived from `client_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerConfig {
	/// Authorization-server URL the code must be obtained from.
	pub issuer: String,
	/// OAuth 2.0 client identifier registered with the issuer.
	pub client_id: String,
}
impl CallerConfig {
	/// Creates a caller configuration for the provided issuer + client pair.
	pub fn new(issuer: impl Into<String>, client_id: impl Into<String>) -> Self {
		Self { issuer: issuer.into(), client_id: client_id.into() }
	}

	/// Rejects callers that omit either required field, with one error per field.
	///
	/// The issuer is checked first; validation runs before any strategy executes.
	pub fn validate(&self) -> Result<()> {
		if self.issuer.is_empty() {
			return Err(Error::MissingIssuer);
		}
		if self.client_id.is_empty() {
			return Err(Error::MissingClientId);
		}

		Ok(())
	}
}

/// Immutable per-session orchestrator configuration.
///
/// Constructed once by the host and handed to [`Session`](crate::session::Session).
/// All three strategy flags default to enabled so a fresh session degrades from
/// silent acquisition down to a full-page redirect without further setup; disable
/// individual flags to pin the session to specific strategies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
	/// Redirect URI registered with the identity provider.
	pub redirect_uri: Url,
	/// Scopes requested on every acquisition, in order.
	pub scopes: Vec<String>,
	/// Attempts silent background acquisition first.
	pub use_background: bool,
	/// Falls back to an interactive popup window.
	pub use_popup_fallback: bool,
	/// Falls back to a full-page redirect as last resort.
	pub use_redirect_fallback: bool,
	/// Emits debug events for recoverable strategy failures.
	pub debug: bool,
}
impl SessionConfig {
	/// Creates a configuration with every strategy enabled and no scopes.
	pub fn new(redirect_uri: Url) -> Self {
		Self {
			redirect_uri,
			scopes: Vec::new(),
			use_background: true,
			use_popup_fallback: true,
			use_redirect_fallback: true,
			debug: false,
		}
	}

	/// Replaces the requested scopes.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Overrides the background strategy flag.
	pub fn with_background(mut self, enabled: bool) -> Self {
		self.use_background = enabled;

		self
	}

	/// Overrides the popup fallback flag.
	pub fn with_popup_fallback(mut self, enabled: bool) -> Self {
		self.use_popup_fallback = enabled;

		self
	}

	/// Overrides the redirect fallback flag.
	pub fn with_redirect_fallback(mut self, enabled: bool) -> Self {
		self.use_redirect_fallback = enabled;

		self
	}

	/// Overrides the debug logging flag.
	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;

		self
	}
}
