//! Relay-level error types surfaced by the acquisition orchestrator.

// self
use crate::{_prelude::*, provider::ProviderError};

/// Relay-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical relay error exposed by public APIs.
///
/// Recoverable strategy failures (background or popup acquisition) never appear here;
/// they are swallowed by the fallthrough logic and only reach the debug log. The
/// variants below are the failures a caller can actually observe.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller configuration omitted the authorization-server issuer.
	#[error("Caller configuration is missing the issuer.")]
	MissingIssuer,
	/// Caller configuration omitted the OAuth 2.0 client identifier.
	#[error("Caller configuration is missing the client id.")]
	MissingClientId,
	/// Every enabled strategy was exhausted without producing a code or a navigation.
	#[error("All fallbacks failed.")]
	AllFallbacksFailed,
	/// The redirect navigation could not be started.
	///
	/// Unlike background and popup failures there is no further fallback after the
	/// redirect, so the provider's error is re-raised instead of swallowed.
	#[error("Redirect navigation could not be started.")]
	RedirectStart {
		/// Provider failure raised synchronously while invoking the redirect.
		#[source]
		source: ProviderError,
	},
}
