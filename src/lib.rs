//! # audio-mixer-core
//!
//! Platform-agnostic audio mixer abstraction.
//!
//! A mixer device exposes controllable *tracks* ("Line-in", "Microphone",
//! "Master") and discrete-choice *options groups* (input source selectors
//! and the like). This crate defines the contract a device implements —
//! enumeration, per-channel volume, mute/record toggles, option selection —
//! plus the synchronous notification bus that broadcasts every state change
//! to interested observers, whether the change came from a caller or from
//! the hardware itself. Concrete backends (ALSA, OSS, platform APIs) live
//! in sibling crates and implement the `MixerDevice` trait.
//!
//! ## Architecture
//!
//! ```text
//! audio-mixer-core (this crate)
//! ├── traits/  ← MixerDevice: the capability contract with safe fallbacks
//! ├── models/  ← Track, Options, opaque ids, MixerError
//! ├── notify/  ← NotificationBus, MixerEvent: dual-scope synchronous pub/sub
//! ├── facade   ← MixerFacade: the generic client entry point
//! └── device/  ← SoftwareMixer: in-memory reference device
//! ```
//!
//! Every capability call is safe to make against any device: unimplemented
//! capabilities fall back to documented defaults instead of erroring.
//! Notifications are delivered device-scope first, then entity-scope, fully
//! synchronously — when a `set_*` call returns, all observers have run.

pub mod device;
pub mod facade;
pub mod models;
pub mod notify;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use device::software::SoftwareMixer;
pub use facade::MixerFacade;
pub use models::error::MixerError;
pub use models::ids::{DeviceId, OptionsId, TrackId};
pub use models::options::Options;
pub use models::track::{Track, TrackDirection, Volume};
pub use notify::bus::{NotificationBus, SubscriptionId};
pub use notify::event::{EventKind, MixerCallback, MixerEvent, Scope};
pub use traits::mixer_device::{MixerDevice, MixerKind};
