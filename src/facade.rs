use std::sync::Arc;

use crate::models::ids::DeviceId;
use crate::models::options::Options;
use crate::models::track::{Track, Volume};
use crate::notify::bus::{NotificationBus, SubscriptionId};
use crate::notify::event::{EventKind, MixerCallback, Scope};
use crate::traits::mixer_device::MixerDevice;

/// Generic entry point for controlling any [`MixerDevice`].
///
/// Binds the shared [`NotificationBus`] that devices composed with it emit
/// on, and forwards each operation to the concrete device. Calls against a
/// capability the device does not implement are always safe; they fall back
/// to the trait's documented defaults (empty enumeration, zero volumes,
/// `None` option value, silent no-ops for setters).
///
/// Every notification triggered by a `set_*` call here is fully delivered —
/// device-scoped observers first, then entity-scoped — before the call
/// returns.
pub struct MixerFacade {
    bus: Arc<NotificationBus>,
}

impl MixerFacade {
    pub fn new() -> Self {
        Self {
            bus: Arc::new(NotificationBus::new()),
        }
    }

    /// Build a facade around an existing bus, for callers that compose the
    /// bus into devices themselves.
    pub fn with_bus(bus: Arc<NotificationBus>) -> Self {
        Self { bus }
    }

    /// The bus devices controlled through this facade should emit on.
    pub fn bus(&self) -> &Arc<NotificationBus> {
        &self.bus
    }

    /// The tracks `device` exposes. Empty when enumeration is
    /// unimplemented, and possibly restricted to one direction by the
    /// device's own policy.
    pub fn list_tracks(&self, device: &dyn MixerDevice) -> Vec<Track> {
        device.list_tracks()
    }

    /// The options groups `device` exposes.
    pub fn list_options(&self, device: &dyn MixerDevice) -> Vec<Options> {
        device.list_options()
    }

    /// Set the volume of each channel in `track`. `volumes` must hold
    /// exactly `track.num_channels()` values.
    pub fn set_volume(&self, device: &mut dyn MixerDevice, track: &Track, volumes: &[Volume]) {
        log::trace!("set_volume on {:?} of {:?}", track.label(), device.label());
        device.set_volume(track, volumes);
    }

    /// Read current channel volumes into the caller's pre-sized buffer.
    pub fn get_volume(&self, device: &dyn MixerDevice, track: &Track, volumes: &mut [Volume]) {
        device.get_volume(track, volumes);
    }

    /// Mute or unmute `track`.
    pub fn set_mute(&self, device: &mut dyn MixerDevice, track: &Track, mute: bool) {
        log::trace!("set_mute({}) on {:?} of {:?}", mute, track.label(), device.label());
        device.set_mute(track, mute);
    }

    /// Enable or disable recording on `track`.
    pub fn set_record(&self, device: &mut dyn MixerDevice, track: &Track, record: bool) {
        log::trace!(
            "set_record({}) on {:?} of {:?}",
            record,
            track.label(),
            device.label()
        );
        device.set_record(track, record);
    }

    /// Select `value` in `options`.
    pub fn set_option(&self, device: &mut dyn MixerDevice, options: &Options, value: &str) {
        log::trace!(
            "set_option({:?}) on {:?} of {:?}",
            value,
            options.label(),
            device.label()
        );
        device.set_option(options, value);
    }

    /// The current value of `options`, or `None` when the device does not
    /// implement option queries.
    pub fn get_option(&self, device: &dyn MixerDevice, options: &Options) -> Option<String> {
        device.get_option(options)
    }

    /// Observe every event of `kind` on `device`, regardless of which
    /// track or options group changed.
    pub fn observe_device(
        &self,
        device: DeviceId,
        kind: EventKind,
        callback: MixerCallback,
    ) -> SubscriptionId {
        self.bus.register(kind, Scope::Device(device), callback)
    }

    /// Observe events of `kind` on one specific track.
    pub fn observe_track(
        &self,
        track: &Track,
        kind: EventKind,
        callback: MixerCallback,
    ) -> SubscriptionId {
        self.bus.register(kind, Scope::Track(track.id()), callback)
    }

    /// Observe events of `kind` on one specific options group.
    pub fn observe_options(
        &self,
        options: &Options,
        kind: EventKind,
        callback: MixerCallback,
    ) -> SubscriptionId {
        self.bus
            .register(kind, Scope::Options(options.id()), callback)
    }

    /// Drop a subscription made through any of the observe methods.
    pub fn unobserve(&self, id: SubscriptionId) -> bool {
        self.bus.unregister(id)
    }
}

impl Default for MixerFacade {
    fn default() -> Self {
        Self::new()
    }
}
