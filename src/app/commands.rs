//! Outbound requests to the embedded app.
//!
//! Each facade operation becomes one [`BridgeRequest`], which knows its
//! method name and how to encode its arguments with the
//! [`codec`](crate::rpc::codec).

use serde_json::Value;

use crate::error::Result;
use crate::model::{Environment, Profile, PushNotification};
use crate::rpc::codec;
use crate::rpc::methods::{OutboundMethod, Page};

/// Requests the host can send into the embedded app.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeRequest {
    SignIn(Profile),
    SignOut,
    SetProfile(Profile),
    GetAuthStatus,
    ProcessPushMessage(PushNotification),
    /// Raw push device token.
    ProcessPushDeviceToken(String),
    SetEnvironment(Environment),
    OpenPage(Page),
}

impl BridgeRequest {
    pub fn method(&self) -> OutboundMethod {
        match self {
            Self::SignIn(_) => OutboundMethod::SignIn,
            Self::SignOut => OutboundMethod::SignOut,
            Self::SetProfile(_) => OutboundMethod::SetProfile,
            Self::GetAuthStatus => OutboundMethod::GetAuthStatus,
            Self::ProcessPushMessage(_) => OutboundMethod::ProcessPushMessage,
            Self::ProcessPushDeviceToken(_) => OutboundMethod::ProcessPushDeviceToken,
            Self::SetEnvironment(_) => OutboundMethod::SetEnvironment,
            Self::OpenPage(page) => page.method(),
        }
    }

    /// Channel arguments; `null` for requests without any.
    pub fn arguments(&self) -> Result<Value> {
        match self {
            Self::SignIn(profile) | Self::SetProfile(profile) => codec::profile_to_value(profile),
            Self::ProcessPushMessage(push) => codec::push_to_value(push),
            Self::ProcessPushDeviceToken(token) => Ok(Value::String(token.clone())),
            Self::SetEnvironment(env) => Ok(codec::environment_to_value(*env)),
            Self::SignOut | Self::GetAuthStatus | Self::OpenPage(_) => Ok(Value::Null),
        }
    }
}
