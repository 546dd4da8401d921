//! Tixngo bridge library.
//!
//! Host-side bridge to the embedded Tixngo ticketing mini-app: the
//! channel's dispatch table, the payload codec and the [`TixngoBridge`]
//! facade. The host supplies the embedding runtime, the channel transport
//! and the presenter through the traits in [`app::ports`] and
//! [`rpc::transport`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod rpc;

pub use app::handle::BridgeHandle;
pub use app::handlers::HostHandlers;
pub use app::service::TixngoBridge;
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use model::{Address, Environment, Gender, Profile, PushNotification};
pub use rpc::reply::PendingReply;
