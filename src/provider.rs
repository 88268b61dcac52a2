//! Identity-provider SDK contract consumed by the orchestrator.
//!
//! The SDK is a black box: the relay only needs its three acquisition operations
//! ("acquire silently", "acquire via popup", "acquire via full-page redirect") and
//! treats every SDK failure as opaque. Hosts adapt whatever vendor client they
//! already ship by implementing [`ProviderClient`] on a thin wrapper.

// self
use crate::_prelude::*;

/// Opaque failure surfaced by an SDK operation.
pub type ProviderError = Box<dyn StdError + Send + Sync>;

/// Boxed future returned by asynchronous SDK operations.
pub type ProviderFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, ProviderError>> + 'a + Send>>;

/// Prompt behavior requested from the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
	/// Never show UI; fail instead of prompting (`prompt=none`).
	None,
}
impl Prompt {
	/// Returns the OpenID Connect parameter value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Prompt::None => "none",
		}
	}
}
impl Display for Prompt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Authorization request data handed to every SDK operation.
///
/// The orchestrator owns construction so the wire contract stays uniform across
/// strategies: response type [`AuthorizeRequest::RESPONSE_TYPE`], response mode
/// [`AuthorizeRequest::RESPONSE_MODE`], no PKCE.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeRequest {
	/// Authorization-server URL.
	pub issuer: String,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Redirect URI registered with the provider.
	pub redirect_uri: Url,
	/// Requested scopes, in configured order.
	pub scopes: Vec<String>,
	/// Composite `state` parameter; set only by the redirect strategy.
	pub state: Option<String>,
	/// Prompt behavior; set only for silent acquisition.
	pub prompt: Option<Prompt>,
}
impl AuthorizeRequest {
	/// OAuth response type requested by every strategy.
	pub const RESPONSE_TYPE: &'static str = "code";
	/// Response mode requested so the provider returns code + state in the URL
	/// fragment, matching what redirect detection parses on the next page load.
	pub const RESPONSE_MODE: &'static str = "fragment";
}

/// Redacted authorization code wrapper keeping the credential out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCode(String);
impl AuthCode {
	/// Wraps a new authorization code.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner code value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AuthCode {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AuthCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthCode").field(&"<redacted>").finish()
	}
}
impl Display for AuthCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Acquisition operations exposed by the identity-provider SDK.
///
/// Implementations must be `Send + Sync` so one session can serve every frontend in
/// the host. Timeout handling is delegated entirely to the SDK; the orchestrator
/// awaits each operation to completion before moving to the next strategy.
pub trait ProviderClient
where
	Self: Send + Sync,
{
	/// Attempts a silent, no-UI acquisition backed by the provider's session cookie.
	fn acquire_silent(&self, request: AuthorizeRequest) -> ProviderFuture<'_, AuthCode>;

	/// Acquires a code through an interactive popup that opens and closes itself.
	fn acquire_popup(&self, request: AuthorizeRequest) -> ProviderFuture<'_, AuthCode>;

	/// Starts a full-page navigation to the provider's authorization endpoint.
	///
	/// Returning `Ok` means the current page lifetime is ending; no code is ever
	/// delivered to this call. Failures are raised synchronously, before any
	/// navigation happens.
	fn start_redirect(&self, request: AuthorizeRequest) -> Result<(), ProviderError>;
}
