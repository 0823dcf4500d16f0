use std::collections::HashMap;
use std::sync::Arc;

use crate::models::error::MixerError;
use crate::models::ids::{DeviceId, OptionsId, TrackId};
use crate::models::options::Options;
use crate::models::track::{Track, Volume};
use crate::notify::bus::NotificationBus;
use crate::traits::mixer_device::{MixerDevice, MixerKind};

/// Per-track mutable state. Volumes always hold exactly
/// `track.num_channels()` entries.
struct TrackState {
    volumes: Vec<Volume>,
    muted: bool,
    recording: bool,
}

/// A pure in-memory mixer device.
///
/// Implements every capability against internal state, making it both the
/// reference for backend authors and a stand-in device for tests and
/// pipelines without hardware. The notification bus is injected at
/// construction; every honored mutation emits exactly one event through
/// it, with no deduplication of repeated identical values.
///
/// Handles the device did not issue, volume arrays of the wrong length,
/// and option values outside the legal set are rejected defensively: the
/// call is logged and becomes a no-op, and nothing is emitted.
pub struct SoftwareMixer {
    id: DeviceId,
    label: String,
    bus: Arc<NotificationBus>,
    tracks: Vec<Track>,
    track_states: HashMap<TrackId, TrackState>,
    options: Vec<Options>,
    option_values: HashMap<OptionsId, String>,
}

impl SoftwareMixer {
    pub fn new(label: impl Into<String>, bus: Arc<NotificationBus>) -> Self {
        Self {
            id: DeviceId::new(),
            label: label.into(),
            bus,
            tracks: Vec::new(),
            track_states: HashMap::new(),
            options: Vec::new(),
            option_values: HashMap::new(),
        }
    }

    /// Register a track. Volume state starts at the track's minimum on
    /// every channel, with mute and record off. Returns a clone of the
    /// track to use as the handle for later calls.
    pub fn add_track(&mut self, track: Track) -> Track {
        self.track_states.insert(
            track.id(),
            TrackState {
                volumes: vec![track.min_volume(); track.num_channels() as usize],
                muted: false,
                recording: false,
            },
        );
        self.tracks.push(track.clone());
        track
    }

    /// Register an options group with its initial selection.
    ///
    /// The initial value must be in the group's legal set.
    pub fn add_options(
        &mut self,
        options: Options,
        initial: impl Into<String>,
    ) -> Result<Options, MixerError> {
        let initial = initial.into();
        if !options.contains(&initial) {
            return Err(MixerError::InvalidOptions(format!(
                "initial value {:?} is not in the legal set of {:?}",
                initial,
                options.label()
            )));
        }
        self.option_values.insert(options.id(), initial);
        self.options.push(options.clone());
        Ok(options)
    }

    /// Current mute state of a track, for callers that polled state
    /// instead of subscribing.
    pub fn is_muted(&self, track: &Track) -> bool {
        self.track_states
            .get(&track.id())
            .map(|s| s.muted)
            .unwrap_or(false)
    }

    /// Current record state of a track.
    pub fn is_recording(&self, track: &Track) -> bool {
        self.track_states
            .get(&track.id())
            .map(|s| s.recording)
            .unwrap_or(false)
    }

    fn state_mut<'a>(
        states: &'a mut HashMap<TrackId, TrackState>,
        track: &Track,
    ) -> Result<&'a mut TrackState, MixerError> {
        states
            .get_mut(&track.id())
            .ok_or_else(|| MixerError::UnknownHandle(format!("track {:?}", track.label())))
    }
}

impl MixerDevice for SoftwareMixer {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> MixerKind {
        MixerKind::Software
    }

    fn list_tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }

    fn list_options(&self) -> Vec<Options> {
        self.options.clone()
    }

    fn set_volume(&mut self, track: &Track, volumes: &[Volume]) {
        let state = match Self::state_mut(&mut self.track_states, track) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("{}: set_volume rejected: {}", self.label, e);
                return;
            }
        };
        if volumes.len() != track.num_channels() as usize {
            log::warn!(
                "{}: set_volume rejected: {}",
                self.label,
                MixerError::ChannelMismatch {
                    expected: track.num_channels(),
                    got: volumes.len(),
                }
            );
            return;
        }

        let (min, max) = (track.min_volume(), track.max_volume());
        for (slot, &v) in state.volumes.iter_mut().zip(volumes) {
            *slot = v.clamp(min, max);
        }
        let effective = state.volumes.clone();
        self.bus.volume_changed(self.id, track, &effective);
    }

    fn get_volume(&self, track: &Track, volumes: &mut [Volume]) {
        match self.track_states.get(&track.id()) {
            Some(state) => {
                for (slot, &v) in volumes.iter_mut().zip(&state.volumes) {
                    *slot = v;
                }
            }
            None => {
                log::warn!(
                    "{}: get_volume on a foreign handle, reporting silence",
                    self.label
                );
                for v in volumes.iter_mut().take(track.num_channels() as usize) {
                    *v = 0;
                }
            }
        }
    }

    fn set_mute(&mut self, track: &Track, mute: bool) {
        if !track.has_mute() {
            log::debug!("{}: track {:?} has no mute switch", self.label, track.label());
            return;
        }
        let state = match Self::state_mut(&mut self.track_states, track) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("{}: set_mute rejected: {}", self.label, e);
                return;
            }
        };
        state.muted = mute;
        self.bus.mute_toggled(self.id, track, mute);
    }

    fn set_record(&mut self, track: &Track, record: bool) {
        if !track.is_input() || !track.has_record() {
            log::debug!(
                "{}: track {:?} cannot record",
                self.label,
                track.label()
            );
            return;
        }
        let state = match Self::state_mut(&mut self.track_states, track) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("{}: set_record rejected: {}", self.label, e);
                return;
            }
        };
        state.recording = record;
        self.bus.record_toggled(self.id, track, record);
    }

    fn set_option(&mut self, options: &Options, value: &str) {
        if !self.option_values.contains_key(&options.id()) {
            log::warn!(
                "{}: set_option rejected: {}",
                self.label,
                MixerError::UnknownHandle(format!("options {:?}", options.label()))
            );
            return;
        }
        if !options.contains(value) {
            log::warn!(
                "{}: {:?} is not a legal value of {:?}",
                self.label,
                value,
                options.label()
            );
            return;
        }
        self.option_values
            .insert(options.id(), value.to_string());
        self.bus.option_changed(self.id, options, value);
    }

    fn get_option(&self, options: &Options) -> Option<String> {
        self.option_values.get(&options.id()).cloned()
    }
}
