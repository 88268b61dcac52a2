//! Host app-state capture and the composite `state` token round-tripped via the provider.

// self
use crate::{_prelude::*, config::CallerConfig};

/// Computes the opaque navigation state preserved across a full-page redirect.
///
/// The host injects an implementation when it wants its routing state restored
/// after the provider redirects back; [`NoAppState`] keeps the opaque portion
/// empty. The value is captured immediately before the redirect starts and
/// recovered on the next page load via
/// [`Session::restored_app_state`](crate::session::Session::restored_app_state).
pub trait AppStateProvider
where
	Self: Send + Sync,
{
	/// Returns the opaque state snapshot for the caller about to be redirected.
	fn app_state(&self, caller: &CallerConfig) -> String;
}

/// Default provider that preserves no host state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAppState;
impl AppStateProvider for NoAppState {
	fn app_state(&self, _: &CallerConfig) -> String {
		String::new()
	}
}

/// Composite `state` parameter of the form `"<clientId>,<opaqueState>"`.
///
/// The client identifier travels in front of the first comma so the redirect
/// detector can tell which frontend a returned code belongs to; everything after
/// the first comma is the host's opaque payload (which may itself contain commas).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeState {
	/// Client identifier the redirect response belongs to.
	pub client_id: String,
	/// Opaque host navigation state captured at redirect time.
	pub app_state: String,
}
impl CompositeState {
	/// Builds a composite token for the provided client + opaque state pair.
	pub fn new(client_id: impl Into<String>, app_state: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), app_state: app_state.into() }
	}

	/// Parses a returned `state` value by splitting on the first comma.
	///
	/// Comma-less values are not recognized; such a redirect is treated as foreign
	/// and dropped without error rather than rejected loudly.
	pub fn parse(raw: &str) -> Option<Self> {
		raw.split_once(',').map(|(client_id, app_state)| Self {
			client_id: client_id.to_owned(),
			app_state: app_state.to_owned(),
		})
	}

	/// Encodes the wire form `"<clientId>,<opaqueState>"`.
	pub fn encode(&self) -> String {
		format!("{},{}", self.client_id, self.app_state)
	}
}
impl Display for CompositeState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{},{}", self.client_id, self.app_state)
	}
}
