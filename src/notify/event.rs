use std::sync::Arc;

use crate::models::ids::{DeviceId, OptionsId, TrackId};
use crate::models::options::Options;
use crate::models::track::{Track, Volume};

/// Observer callback invoked for every delivered mixer event.
///
/// Callbacks run synchronously on the thread that triggered the change,
/// while the triggering `set_*` call is still on the stack — keep them
/// short. A panicking callback is isolated and logged; it never reaches
/// other observers or the emitting device.
pub type MixerCallback = Arc<dyn Fn(&MixerEvent) + Send + Sync + 'static>;

/// The four kinds of state change a device broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MuteToggled,
    RecordToggled,
    VolumeChanged,
    OptionChanged,
}

/// What a subscription listens to: every change on one device, or changes
/// on one specific track / options group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Device(DeviceId),
    Track(TrackId),
    Options(OptionsId),
}

/// A state change, carrying the mutated entity and its new value.
#[derive(Debug, Clone)]
pub enum MixerEvent {
    MuteToggled { track: Track, mute: bool },
    RecordToggled { track: Track, record: bool },
    VolumeChanged { track: Track, volumes: Vec<Volume> },
    OptionChanged { options: Options, value: String },
}

impl MixerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MuteToggled { .. } => EventKind::MuteToggled,
            Self::RecordToggled { .. } => EventKind::RecordToggled,
            Self::VolumeChanged { .. } => EventKind::VolumeChanged,
            Self::OptionChanged { .. } => EventKind::OptionChanged,
        }
    }
}
