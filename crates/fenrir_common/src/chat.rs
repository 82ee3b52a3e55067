//! Chat invocation policy.
//!
//! Decides, per user message, whether the chat panel answers from the
//! offline protocol bank or hands the message to the remote assistant.
//! The remote assistant itself lives outside this crate.

use crate::offline::{classify, ProtocolCategory};
use crate::signal::NetworkQuality;
use tracing::debug;

/// Reply used when offline and no protocol keyword matched
pub const OFFLINE_FALLBACK_MESSAGE: &str =
    "CONEXIÓN OFFLINE: Se recomienda consultar los protocolos médicos locales hasta restablecer señal.";

/// What the chat panel should do with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRoute {
    /// Blank input, nothing is sent
    Ignored,
    /// Answer locally; `category` is `None` for the generic fallback
    Offline {
        category: Option<ProtocolCategory>,
        reply: &'static str,
    },
    /// Forward to the remote assistant
    Remote,
}

impl ChatRoute {
    pub fn reply(&self) -> Option<&'static str> {
        match self {
            ChatRoute::Offline { reply, .. } => Some(*reply),
            _ => None,
        }
    }
}

/// Route one message given the current link quality
pub fn route_message(quality: NetworkQuality, text: &str) -> ChatRoute {
    if text.trim().is_empty() {
        return ChatRoute::Ignored;
    }

    if !quality.is_offline() {
        debug!("Chat route: remote ({})", quality);
        return ChatRoute::Remote;
    }

    let category = classify(text);
    let reply = category
        .map(|c| c.protocol())
        .unwrap_or(OFFLINE_FALLBACK_MESSAGE);

    debug!(
        "Chat route: offline ({})",
        category.map(|c| c.name()).unwrap_or("fallback")
    );
    ChatRoute::Offline { category, reply }
}
