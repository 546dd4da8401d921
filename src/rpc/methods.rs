//! Dispatch table: the channel's method names.
//!
//! ```text
//!   host ──── OutboundMethod ────▶ embedded app
//!   host ◀─── InboundMethod  ───── embedded app
//! ```
//!
//! The two sets never share a name. An inbound call carrying an outbound
//! name is treated like any other unknown inbound method.

/// Name of the single channel connecting host and embedded app.
pub const CHANNEL_NAME: &str = "io.tixngo.sdk";

/// Requests the host sends to the embedded app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutboundMethod {
    OpenHomePage,
    OpenMyEventPage,
    OpenTransferredTicketPage,
    OpenPendingTicketPage,
    SetProfile,
    SetEnvironment,
    SignOut,
    SignIn,
    GetAuthStatus,
    ProcessPushMessage,
    ProcessPushDeviceToken,
}

impl OutboundMethod {
    pub const ALL: [Self; 11] = [
        Self::OpenHomePage,
        Self::OpenMyEventPage,
        Self::OpenTransferredTicketPage,
        Self::OpenPendingTicketPage,
        Self::SetProfile,
        Self::SetEnvironment,
        Self::SignOut,
        Self::SignIn,
        Self::GetAuthStatus,
        Self::ProcessPushMessage,
        Self::ProcessPushDeviceToken,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenHomePage => "sdk.open_home_page",
            Self::OpenMyEventPage => "sdk.open_my_event_page",
            Self::OpenTransferredTicketPage => "sdk.open_transferred_ticket_page",
            Self::OpenPendingTicketPage => "sdk.open_pending_ticket_page",
            Self::SetProfile => "sdk.set_profile",
            Self::SetEnvironment => "sdk.set_environment",
            Self::SignOut => "sdk.do_sign_out",
            Self::SignIn => "sdk.do_sign_in",
            Self::GetAuthStatus => "sdk.get_auth_status",
            Self::ProcessPushMessage => "sdk.process_push_message",
            Self::ProcessPushDeviceToken => "sdk.process_push_device_token",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

/// Requests and notifications the embedded app sends to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InboundMethod {
    /// Credentials expired; answer with "refresh in advance?" (bool).
    TokenExpired,
    /// User tapped the embedded close button.
    CloseButtonPressed,
    /// Embedded app needs the host's JWT (string or null).
    GetJwtToken,
    /// Embedded app needs the push device token (string or null).
    GetDeviceToken,
    /// Embedded app finished starting; carries `isAuthenticated` (bool).
    Initialized,
    /// Free-form diagnostic message.
    Debug,
}

impl InboundMethod {
    pub const ALL: [Self; 6] = [
        Self::TokenExpired,
        Self::CloseButtonPressed,
        Self::GetJwtToken,
        Self::GetDeviceToken,
        Self::Initialized,
        Self::Debug,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TokenExpired => "sdk.on_token_expired",
            Self::CloseButtonPressed => "sdk.on_close_button_pressed",
            Self::GetJwtToken => "sdk.get_jwt_token",
            Self::GetDeviceToken => "sdk.get_device_token",
            Self::Initialized => "sdk.initialized",
            Self::Debug => "sdk.debug",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

/// Embedded pages the host can open directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    MyEvents,
    TransferredTickets,
    PendingTickets,
}

impl Page {
    pub const fn method(self) -> OutboundMethod {
        match self {
            Self::Home => OutboundMethod::OpenHomePage,
            Self::MyEvents => OutboundMethod::OpenMyEventPage,
            Self::TransferredTickets => OutboundMethod::OpenTransferredTicketPage,
            Self::PendingTickets => OutboundMethod::OpenPendingTicketPage,
        }
    }
}
