// std
use std::sync::Mutex;
// self
use authcode_relay::{
	config::{CallerConfig, SessionConfig},
	detect::FragmentLocation,
	provider::{AuthCode, AuthorizeRequest, ProviderClient, ProviderError, ProviderFuture},
	session::Session,
	url::Url,
};

/// Location double standing in for the host's routing layer.
struct HostLocation(Mutex<Option<String>>);
impl HostLocation {
	fn new(fragment: &str) -> Self {
		Self(Mutex::new(Some(fragment.to_owned())))
	}

	fn current(&self) -> Option<String> {
		self.0.lock().expect("Location lock should never be poisoned.").clone()
	}
}
impl FragmentLocation for HostLocation {
	fn fragment(&self) -> Option<String> {
		self.0.lock().expect("Location lock should never be poisoned.").clone()
	}

	fn clear_fragment(&self) {
		*self.0.lock().expect("Location lock should never be poisoned.") = None;
	}
}

/// Provider double for page loads where no acquisition traffic is expected.
struct OfflineProvider;
impl ProviderClient for OfflineProvider {
	fn acquire_silent(&self, _: AuthorizeRequest) -> ProviderFuture<'_, AuthCode> {
		panic!("Recovered codes must be served without contacting the provider.")
	}

	fn acquire_popup(&self, _: AuthorizeRequest) -> ProviderFuture<'_, AuthCode> {
		panic!("Recovered codes must be served without contacting the provider.")
	}

	fn start_redirect(&self, _: AuthorizeRequest) -> Result<(), ProviderError> {
		panic!("Recovered codes must be served without contacting the provider.")
	}
}

fn session() -> Session<OfflineProvider> {
	let redirect_uri = Url::parse("https://host.example.com/auth/callback")
		.expect("Redirect URI fixture should parse successfully.");

	Session::new(OfflineProvider, SessionConfig::new(redirect_uri))
}

#[test]
fn bootstrap_recovers_code_and_app_state() {
	let session = session();
	let location = HostLocation::new("code=AUTHCODE123&state=abc%2CS1");
	let restored = session.initialize_from_location(&location);

	assert_eq!(restored, Some("S1"));
	assert_eq!(session.restored_app_state(), Some("S1"));
	assert_eq!(
		session.pending_code("abc").map(|code| code.expose().to_owned()),
		Some("AUTHCODE123".into())
	);
	assert_eq!(location.current(), None, "The fragment must be cleared after capture.");

	// Simulated double-invocation of the bootstrap is a no-op.
	let late = HostLocation::new("code=OTHER&state=xyz%2CS2");
	let restored = session.initialize_from_location(&late);

	assert_eq!(restored, Some("S1"));
	assert!(session.pending_code("xyz").is_none());
	assert!(late.current().is_some());
}

#[tokio::test]
async fn recovered_codes_resolve_without_any_strategy() {
	let session = session();
	let location = HostLocation::new("code=AUTHCODE123&state=abc%2CS1");

	session.initialize_from_location(&location);

	// Every strategy is enabled, yet the offline provider is never touched.
	for _ in 0..2 {
		let outcome = session
			.acquire(CallerConfig::new("https://idp.example.com", "abc"))
			.await
			.expect("The recovered code should resolve the call.");

		assert_eq!(outcome.code().map(AuthCode::expose), Some("AUTHCODE123"));
	}
}

#[test]
fn fragment_without_code_is_ignored() {
	let session = session();
	let location = HostLocation::new("state=abc%2CS1");

	assert_eq!(session.initialize_from_location(&location), None);
	assert!(session.pending_code("abc").is_none());
	assert!(location.current().is_some(), "Unrecognized fragments are left in place.");
}

#[test]
fn comma_less_state_is_dropped_silently() {
	let session = session();
	let location = HostLocation::new("code=AUTHCODE123&state=malformed-no-comma");

	assert_eq!(session.initialize_from_location(&location), None);
	assert!(session.pending_code("malformed-no-comma").is_none());
	assert_eq!(session.restored_app_state(), None);
}
