//! Multi-strategy OAuth 2.0 authorization-code acquisition for micro-frontend hosts—silent
//! background acquisition, popup fallback, and full-page redirect fallback, plus recovery of
//! per-client codes and host navigation state after the redirect returns.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod detect;
pub mod error;
pub mod obs;
pub mod provider;
pub mod session;
pub mod state;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::{Arc, OnceLock},
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
