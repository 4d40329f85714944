//! Event subscription for embedding code.
//!
//! Callers can observe what happens on the overlay via [`EventController`].
//! Each event carries a set of [`EventKind`] flags so that a single occurrence
//! can match multiple categories (the second click of a pair is both a
//! `POINT_CAPTURED` and a `MEASUREMENT_COMPLETE` event).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about. The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::measurement::Measurement;
use crate::data::ruler::{Point, Slot};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// The pointer moved over the overlay.
    pub const POINTER_MOVED: Self = Self(1 << 0);
    /// A click captured point A or point B.
    pub const POINT_CAPTURED: Self = Self(1 << 1);
    /// Both points are set and a measurement is available.
    pub const MEASUREMENT_COMPLETE: Self = Self(1 << 2);
    /// The overlay surface was resized.
    pub const RESIZE: Self = Self(1 << 3);
    /// "About" was chosen from the context menu.
    pub const ABOUT_REQUESTED: Self = Self(1 << 4);
    /// "Exit" was chosen or the window is closing.
    pub const EXIT_REQUESTED: Self = Self(1 << 5);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::POINTER_MOVED, "POINTER_MOVED"),
            (EventKind::POINT_CAPTURED, "POINT_CAPTURED"),
            (EventKind::MEASUREMENT_COMPLETE, "MEASUREMENT_COMPLETE"),
            (EventKind::RESIZE, "RESIZE"),
            (EventKind::ABOUT_REQUESTED, "ABOUT_REQUESTED"),
            (EventKind::EXIT_REQUESTED, "EXIT_REQUESTED"),
        ];

        let mut names = Vec::new();
        let mut known_bits = 0u32;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RulerEvent
// ─────────────────────────────────────────────────────────────────────────────

/// Which slot a click wrote, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureMeta {
    pub slot: Slot,
    pub point: Point,
}

/// An event emitted by the ruler controller.
#[derive(Debug, Clone)]
pub struct RulerEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created; set on emit.
    pub timestamp: f64,
    /// Cursor position at the time of the event.
    pub cursor: Point,
    pub captured: Option<CaptureMeta>,
    pub measurement: Option<Measurement>,
    /// New surface size in logical pixels.
    pub resize: Option<[f32; 2]>,
}

impl RulerEvent {
    pub fn new(kinds: EventKind, cursor: Point) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            cursor,
            captured: None,
            measurement: None,
            resize: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// OR-mask selecting which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &RulerEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<RulerEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Collects ruler events and distributes them to subscribers.
///
/// Attach it to [`RulerConfig`](crate::config::RulerConfig) before launching
/// the overlay, then call [`subscribe`](Self::subscribe) to receive events on
/// an `mpsc` channel. Receivers may live on any thread.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<RulerEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<RulerEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Number of live subscribers (dead ones are pruned on emit).
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    /// Emit an event to all matching subscribers.
    ///
    /// Subscribers whose receiver was dropped are removed the next time an
    /// event matching their filter is sent.
    pub fn emit(&self, mut event: RulerEvent) {
        let mut inner = self.lock();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    // A subscriber panicking mid-send cannot leave the list inconsistent.
    fn lock(&self) -> MutexGuard<'_, EventCtrlInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventController")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
