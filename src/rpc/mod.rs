//! Transport-agnostic channel subsystem.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     Channel Stack                          │
//! │                                                            │
//! │  ┌───────────┐   ┌──────────┐   ┌───────────────────────┐ │
//! │  │ Transport │──▶│ MainQueue│──▶│  Engine (dispatcher)  │ │
//! │  │ (trait)   │   │(channels)│   │  → HostHandlers       │ │
//! │  └───────────┘   └──────────┘   └───────────────────────┘ │
//! │       ▲                                    │              │
//! │       │              ┌─────────────────────┘              │
//! │       │              ▼                                    │
//! │  ┌───────────┐   ┌──────────┐                             │
//! │  │ Transport │◀──│  Reply   │   (exactly-once answers)    │
//! │  │ (answer)  │   │          │                             │
//! │  └───────────┘   └──────────┘                             │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payloads are [`serde_json::Value`]s; [`codec`] builds them from the
//! domain model and [`value`] reads them back with typed coercions.

pub mod channels;
pub mod codec;
pub mod engine;
pub mod methods;
pub mod reply;
pub mod transport;
pub mod value;
