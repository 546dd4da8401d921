//! Host callbacks installed at initialization.

use crate::rpc::reply::PendingReply;

type InitializedFn = Box<dyn FnMut(bool)>;
type TokenExpiredFn = Box<dyn FnMut(PendingReply<bool>)>;
type TokenRequestFn = Box<dyn FnMut(PendingReply<Option<String>>)>;
type CloseFn = Box<dyn FnMut()>;

/// Callbacks the embedded app reaches through inbound calls.
///
/// The three request callbacks receive a [`PendingReply`]; the host may
/// keep it and resolve it later from any thread once its own network or
/// storage work is done.
pub struct HostHandlers {
    /// The embedded app started; argument is whether it is authenticated.
    pub on_initialized: InitializedFn,
    /// Credentials expired; resolve with whether the host will refresh them
    /// in advance.
    pub on_token_expired: TokenExpiredFn,
    /// The embedded app needs the current JWT (or `None`).
    pub on_get_jwt_token: TokenRequestFn,
    /// The embedded app needs the push device token (or `None`).
    pub on_get_device_token: TokenRequestFn,
    /// The user tapped close; the host should return to its own UI.
    pub on_close: CloseFn,
}

impl HostHandlers {
    pub fn new(
        on_initialized: impl FnMut(bool) + 'static,
        on_token_expired: impl FnMut(PendingReply<bool>) + 'static,
        on_get_jwt_token: impl FnMut(PendingReply<Option<String>>) + 'static,
        on_get_device_token: impl FnMut(PendingReply<Option<String>>) + 'static,
        on_close: impl FnMut() + 'static,
    ) -> Self {
        Self {
            on_initialized: Box::new(on_initialized),
            on_token_expired: Box::new(on_token_expired),
            on_get_jwt_token: Box::new(on_get_jwt_token),
            on_get_device_token: Box::new(on_get_device_token),
            on_close: Box::new(on_close),
        }
    }
}
