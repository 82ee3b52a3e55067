//! Fenrir Common - offline survival guidance core
//!
//! Everything here works with zero connectivity: the medical triage tree,
//! the offline protocol router and the chat fallback policy.

pub mod chat;
pub mod config;
pub mod error;
pub mod offline;
pub mod render;
pub mod signal;
pub mod triage;
pub mod weather;

pub use chat::{route_message, ChatRoute, OFFLINE_FALLBACK_MESSAGE};
pub use config::{ColorMode, FenrirConfig};
pub use error::{FenrirError, GraphViolation};
pub use offline::{classify, offline_protocol, ProtocolCategory};
pub use signal::NetworkQuality;
pub use triage::{
    medical_tree, DecisionNode, NavigationMode, Severity, TraversalState, TriageGraph, ROOT_ID,
};
pub use weather::{weather_tip, WeatherCategory};
