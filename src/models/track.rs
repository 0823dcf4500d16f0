use serde::{Deserialize, Serialize};

use super::error::MixerError;
use super::ids::TrackId;

/// Volume of a single channel, in device-defined units.
pub type Volume = i32;

/// Whether a track carries audio into or out of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackDirection {
    Input,
    Output,
}

/// One controllable audio stream unit on a mixer device, such as
/// "Line-in", "Microphone" or "Master".
///
/// A track is composed of one or more channels: a stereo track has two.
/// Tracks are passive — they describe what a device exposes, while the
/// current volume/mute/record state lives in the device that owns them.
/// Clones of a track act as non-owning handles for addressing mixer
/// operations and entity-scoped notification subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    id: TrackId,
    label: String,
    num_channels: u16,
    direction: TrackDirection,
    has_mute: bool,
    has_record: bool,
    min_volume: Volume,
    max_volume: Volume,
}

impl Track {
    /// Create a track with a fresh handle and no mute/record capability.
    ///
    /// The default volume range is `0..=100`; adjust with
    /// [`with_volume_range`](Self::with_volume_range).
    pub fn new(
        label: impl Into<String>,
        num_channels: u16,
        direction: TrackDirection,
    ) -> Result<Self, MixerError> {
        if num_channels == 0 {
            return Err(MixerError::InvalidTrack(
                "a track needs at least one channel".into(),
            ));
        }
        Ok(Self {
            id: TrackId::new(),
            label: label.into(),
            num_channels,
            direction,
            has_mute: false,
            has_record: false,
            min_volume: 0,
            max_volume: 100,
        })
    }

    /// Mark the track as mute-capable.
    pub fn with_mute(mut self) -> Self {
        self.has_mute = true;
        self
    }

    /// Mark the track as record-capable. Only meaningful on input tracks.
    pub fn with_record(mut self) -> Self {
        self.has_record = true;
        self
    }

    /// Set the device-defined volume range. Swaps the bounds if given in
    /// the wrong order.
    pub fn with_volume_range(mut self, min: Volume, max: Volume) -> Self {
        if min <= max {
            self.min_volume = min;
            self.max_volume = max;
        } else {
            self.min_volume = max;
            self.max_volume = min;
        }
        self
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of mono sub-streams in this track. Always at least 1.
    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    pub fn direction(&self) -> TrackDirection {
        self.direction
    }

    pub fn is_input(&self) -> bool {
        self.direction == TrackDirection::Input
    }

    pub fn is_output(&self) -> bool {
        self.direction == TrackDirection::Output
    }

    pub fn has_mute(&self) -> bool {
        self.has_mute
    }

    pub fn has_record(&self) -> bool {
        self.has_record
    }

    pub fn min_volume(&self) -> Volume {
        self.min_volume
    }

    pub fn max_volume(&self) -> Volume {
        self.max_volume
    }
}
