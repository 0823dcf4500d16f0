use crate::models::ids::DeviceId;
use crate::models::options::Options;
use crate::models::track::{Track, Volume};

/// Whether a device controls real hardware or an in-process software state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixerKind {
    Hardware,
    Software,
}

/// Interface for audio elements that expose controllable mixer tracks.
///
/// A device implements a capability by overriding the corresponding method;
/// every method carries a default body with the documented fallback, so an
/// unimplemented capability is never an error — calling it is always safe,
/// it just has no effect. Callers that care about efficacy should inspect
/// the capability flags on [`Track`] / [`Options`] first.
///
/// Implementations that mutate state are responsible for emitting the
/// matching event on the [`NotificationBus`] they were composed with,
/// exactly once per discrete change — including changes triggered outside
/// this interface, e.g. by a physical button on the hardware.
///
/// [`NotificationBus`]: crate::notify::bus::NotificationBus
pub trait MixerDevice: Send + Sync {
    /// Identity of this device, the scope key for device-level
    /// subscriptions.
    fn id(&self) -> DeviceId;

    /// Human-readable device name.
    fn label(&self) -> &str;

    fn kind(&self) -> MixerKind {
        MixerKind::Software
    }

    /// The tracks this device exposes, in device order.
    ///
    /// A sink element is allowed to list only its output tracks, and a
    /// source element only its input tracks, even when the underlying
    /// hardware has both directions. An empty list is a valid answer.
    fn list_tracks(&self) -> Vec<Track> {
        Vec::new()
    }

    /// The options groups this device exposes, in device order.
    fn list_options(&self) -> Vec<Options> {
        Vec::new()
    }

    /// Set the volume of each channel in a track.
    ///
    /// `volumes` must hold exactly `track.num_channels()` values; index `i`
    /// addresses the i-th logical channel in the order the device reports
    /// them.
    fn set_volume(&mut self, _track: &Track, _volumes: &[Volume]) {}

    /// Read the current volume of each channel in a track into the
    /// caller-provided buffer of `track.num_channels()` slots.
    ///
    /// Unimplemented: every channel reads as zero.
    fn get_volume(&self, track: &Track, volumes: &mut [Volume]) {
        for v in volumes.iter_mut().take(track.num_channels() as usize) {
            *v = 0;
        }
    }

    /// Mute or unmute a track. Check `track.has_mute()` for efficacy.
    fn set_mute(&mut self, _track: &Track, _mute: bool) {}

    /// Enable or disable recording on a track. Only input tracks can
    /// record; check `track.has_record()` for efficacy.
    fn set_record(&mut self, _track: &Track, _record: bool) {}

    /// Select a value in a name/value options group.
    fn set_option(&mut self, _options: &Options, _value: &str) {}

    /// The currently selected value of an options group, or `None` when
    /// the device does not implement option queries.
    fn get_option(&self, _options: &Options) -> Option<String> {
        None
    }
}
