use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::ids::DeviceId;
use crate::models::options::Options;
use crate::models::track::{Track, Volume};

use super::event::{EventKind, MixerCallback, MixerEvent, Scope};

/// Handle returned by [`NotificationBus::register`], consumed by
/// [`NotificationBus::unregister`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    scope: Scope,
    callback: MixerCallback,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

/// Synchronous publish/subscribe registry for mixer state changes.
///
/// Devices emit through the four `*_toggled` / `*_changed` helpers after
/// mutating state. Every emission is delivered twice: first to observers
/// of the owning device, then to observers of the specific track or
/// options group. Within each scope, observers run in registration order,
/// all on the emitting thread, before the emission helper returns. Events
/// are never queued and never replayed to late subscribers; with no
/// matching subscriptions an emission is a no-op.
///
/// Delivery cannot fail: a panic inside one observer is caught and logged,
/// and the remaining observers still run.
#[derive(Default)]
pub struct NotificationBus {
    inner: Mutex<BusInner>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `callback` to events of `kind` within `scope`.
    pub fn register(&self, kind: EventKind, scope: Scope, callback: MixerCallback) -> SubscriptionId {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscriptions.push(Subscription {
            id,
            kind,
            scope,
            callback,
        });
        id
    }

    /// Drop a subscription. Returns `false` if the handle was already gone.
    pub fn unregister(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subscriptions.len();
        inner.subscriptions.retain(|s| s.id != id);
        inner.subscriptions.len() != before
    }

    /// Broadcast that `track` on `device` was muted or unmuted.
    ///
    /// Called by the device implementation after every discrete change,
    /// whether triggered through [`MixerDevice::set_mute`] or externally.
    ///
    /// [`MixerDevice::set_mute`]: crate::traits::mixer_device::MixerDevice::set_mute
    pub fn mute_toggled(&self, device: DeviceId, track: &Track, mute: bool) {
        let event = MixerEvent::MuteToggled {
            track: track.clone(),
            mute,
        };
        self.broadcast(device, Scope::Track(track.id()), event);
    }

    /// Broadcast that recording on `track` was enabled or disabled.
    pub fn record_toggled(&self, device: DeviceId, track: &Track, record: bool) {
        let event = MixerEvent::RecordToggled {
            track: track.clone(),
            record,
        };
        self.broadcast(device, Scope::Track(track.id()), event);
    }

    /// Broadcast the new per-channel volumes of `track`.
    pub fn volume_changed(&self, device: DeviceId, track: &Track, volumes: &[Volume]) {
        let event = MixerEvent::VolumeChanged {
            track: track.clone(),
            volumes: volumes.to_vec(),
        };
        self.broadcast(device, Scope::Track(track.id()), event);
    }

    /// Broadcast the newly selected value of `options`.
    pub fn option_changed(&self, device: DeviceId, options: &Options, value: &str) {
        let event = MixerEvent::OptionChanged {
            options: options.clone(),
            value: value.to_string(),
        };
        self.broadcast(device, Scope::Options(options.id()), event);
    }

    /// Deliver `event` device-scoped first, then entity-scoped.
    fn broadcast(&self, device: DeviceId, entity: Scope, event: MixerEvent) {
        let kind = event.kind();
        self.deliver(kind, Scope::Device(device), &event);
        self.deliver(kind, entity, &event);
    }

    fn deliver(&self, kind: EventKind, scope: Scope, event: &MixerEvent) {
        // Clone matching callbacks out of the lock so observers may
        // re-enter the bus (subscribe/unsubscribe) from their handler.
        let callbacks: Vec<MixerCallback> = {
            let inner = self.inner.lock();
            inner
                .subscriptions
                .iter()
                .filter(|s| s.kind == kind && s.scope == scope)
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };

        for callback in callbacks {
            if catch_unwind(AssertUnwindSafe(|| callback(event))).is_err() {
                log::warn!("observer panicked during {:?} delivery, skipping it", kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::track::TrackDirection;
    use parking_lot::Mutex as PlMutex;

    fn master() -> Track {
        Track::new("Master", 2, TrackDirection::Output)
            .unwrap()
            .with_mute()
    }

    /// Shared log of observer invocations, recorded in delivery order.
    fn recorder(log: &Arc<PlMutex<Vec<String>>>, tag: &str) -> MixerCallback {
        let log = Arc::clone(log);
        let tag = tag.to_string();
        Arc::new(move |event| {
            log.lock().push(format!("{}:{:?}", tag, event.kind()));
        })
    }

    #[test]
    fn no_subscribers_is_a_no_op() {
        let bus = NotificationBus::new();
        bus.mute_toggled(DeviceId::new(), &master(), true);
    }

    #[test]
    fn device_scope_delivered_before_entity_scope() {
        let bus = NotificationBus::new();
        let device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        // Entity observer registered first; device scope must still win.
        bus.register(
            EventKind::VolumeChanged,
            Scope::Track(track.id()),
            recorder(&log, "entity"),
        );
        bus.register(
            EventKind::VolumeChanged,
            Scope::Device(device),
            recorder(&log, "device"),
        );

        bus.volume_changed(device, &track, &[80, 90]);

        assert_eq!(
            *log.lock(),
            vec!["device:VolumeChanged", "entity:VolumeChanged"]
        );
    }

    #[test]
    fn registration_order_within_scope() {
        let bus = NotificationBus::new();
        let device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            bus.register(
                EventKind::MuteToggled,
                Scope::Device(device),
                recorder(&log, tag),
            );
        }

        bus.mute_toggled(device, &track, true);

        assert_eq!(
            *log.lock(),
            vec!["a:MuteToggled", "b:MuteToggled", "c:MuteToggled"]
        );
    }

    #[test]
    fn kind_and_scope_filtering() {
        let bus = NotificationBus::new();
        let device = DeviceId::new();
        let other_device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        bus.register(
            EventKind::MuteToggled,
            Scope::Device(device),
            recorder(&log, "mute"),
        );
        bus.register(
            EventKind::VolumeChanged,
            Scope::Device(other_device),
            recorder(&log, "foreign"),
        );

        bus.volume_changed(device, &track, &[1, 2]);
        assert!(log.lock().is_empty());

        bus.mute_toggled(device, &track, true);
        assert_eq!(*log.lock(), vec!["mute:MuteToggled"]);
    }

    #[test]
    fn unregister_stops_delivery() {
        let bus = NotificationBus::new();
        let device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        let sub = bus.register(
            EventKind::MuteToggled,
            Scope::Device(device),
            recorder(&log, "a"),
        );

        bus.mute_toggled(device, &track, true);
        assert!(bus.unregister(sub));
        assert!(!bus.unregister(sub));
        bus.mute_toggled(device, &track, false);

        assert_eq!(*log.lock(), vec!["a:MuteToggled"]);
    }

    #[test]
    fn panicking_observer_does_not_block_later_ones() {
        let bus = NotificationBus::new();
        let device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        bus.register(
            EventKind::MuteToggled,
            Scope::Device(device),
            Arc::new(|_| panic!("observer bug")),
        );
        bus.register(
            EventKind::MuteToggled,
            Scope::Device(device),
            recorder(&log, "b"),
        );

        // Must not propagate out of the emission.
        bus.mute_toggled(device, &track, true);

        assert_eq!(*log.lock(), vec!["b:MuteToggled"]);
    }

    #[test]
    fn events_are_not_deduplicated() {
        let bus = NotificationBus::new();
        let device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        bus.register(
            EventKind::MuteToggled,
            Scope::Device(device),
            recorder(&log, "a"),
        );

        bus.mute_toggled(device, &track, true);
        bus.mute_toggled(device, &track, true);

        assert_eq!(log.lock().len(), 2);
    }

    #[test]
    fn observer_can_resubscribe_from_its_handler() {
        let bus = Arc::new(NotificationBus::new());
        let device = DeviceId::new();
        let track = master();
        let log = Arc::new(PlMutex::new(Vec::new()));

        let bus2 = Arc::clone(&bus);
        let log2 = Arc::clone(&log);
        bus.register(
            EventKind::MuteToggled,
            Scope::Device(device),
            Arc::new(move |_| {
                log2.lock().push("outer".to_string());
                // Re-entrant registration must not deadlock; the new
                // subscription only sees later emissions.
                let log3 = Arc::clone(&log2);
                bus2.register(
                    EventKind::MuteToggled,
                    Scope::Device(device),
                    Arc::new(move |_| log3.lock().push("inner".to_string())),
                );
            }),
        );

        bus.mute_toggled(device, &track, true);
        assert_eq!(*log.lock(), vec!["outer"]);
    }
}
