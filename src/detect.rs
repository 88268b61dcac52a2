//! Redirect-return detection and the session-scoped pending stores.
//!
//! When the provider redirects back, the authorization code and composite state
//! arrive in the URL fragment. [`RedirectState::initialize_from_location`] inspects
//! the fragment exactly once per page load, captures the code for the owning client
//! plus the host's opaque navigation state, and clears the fragment so the code
//! never lingers in the visible location.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, provider::AuthCode, state::CompositeState};

/// Host navigation environment the detector inspects once per page load.
///
/// Hosts adapt their routing layer (browser location, webview shim, test fixture)
/// to this trait; the relay never touches the location otherwise.
pub trait FragmentLocation
where
	Self: Send + Sync,
{
	/// Current URL fragment without the leading `#`, if any.
	fn fragment(&self) -> Option<String>;

	/// Clears the fragment from the visible location.
	fn clear_fragment(&self);
}

/// Detector lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectPhase {
	/// The fragment has not been inspected yet.
	#[default]
	Uninitialized,
	/// The fragment was inspected; later invocations are no-ops.
	Parsed,
}

/// Session-scoped redirect state: pending codes, restored app state, detector phase.
///
/// Pending codes are never evicted. Once a client's code is captured it is returned
/// for every later acquisition within the page lifetime, and a repeated publish of
/// the same key is harmless, so interleaved acquisitions for different clients need
/// no coordination beyond the locks here.
#[derive(Debug, Default)]
pub struct RedirectState {
	codes: RwLock<HashMap<String, AuthCode>>,
	app_state: OnceLock<String>,
	phase: Mutex<DetectPhase>,
}
impl RedirectState {
	/// Inspects the fragment for a returned code/state pair, at most once per page load.
	///
	/// The one-shot phase trips on the first invocation regardless of outcome, so a
	/// second call is a no-op even if the fragment changed in between. A fragment
	/// without a `code` parameter, or with a comma-less `state`, captures nothing
	/// and raises nothing; the fragment is cleared only after a successful capture.
	pub fn initialize_from_location(&self, location: &dyn FragmentLocation) {
		{
			let mut phase = self.phase.lock();

			if *phase == DetectPhase::Parsed {
				return;
			}

			*phase = DetectPhase::Parsed;
		}

		let Some(fragment) = location.fragment() else { return };
		let Some((code, composite)) = parse_return(&fragment) else { return };

		self.publish_code(composite.client_id, code);
		// First writer wins; the slot holds at most one value per page load.
		let _ = self.app_state.set(composite.app_state);

		location.clear_fragment();
	}

	/// Returns the code captured for the client by a prior redirect round-trip or
	/// strategy success, if any.
	pub fn pending_code(&self, client_id: &str) -> Option<AuthCode> {
		self.codes.read().get(client_id).cloned()
	}

	/// Host navigation state recovered from the composite token, if any.
	pub fn app_state(&self) -> Option<&str> {
		self.app_state.get().map(String::as_str)
	}

	/// Current detector phase.
	pub fn phase(&self) -> DetectPhase {
		*self.phase.lock()
	}

	pub(crate) fn publish_code(&self, client_id: impl Into<String>, code: AuthCode) {
		self.codes.write().insert(client_id.into(), code);
	}
}

/// Parses a fragment as a query string and extracts the code + composite state.
fn parse_return(fragment: &str) -> Option<(AuthCode, CompositeState)> {
	let mut code = None;
	let mut state = None;

	for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
		match key.as_ref() {
			"code" => code = Some(value.into_owned()),
			"state" => state = Some(value.into_owned()),
			_ => {},
		}
	}

	let code = AuthCode::new(code?);
	let composite = CompositeState::parse(state.as_deref()?)?;

	Some((code, composite))
}
