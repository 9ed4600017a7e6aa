use crate::contacts::ContactPoint;

/// Receives the contact points of the contacts being evaluated.
///
/// The reported [`ContactPoint`] is reused from one call to the next and cannot be
/// retained past the callback. All the methods do nothing by default.
pub trait ContactListener {
    /// Called for each contact point that did not exist at the previous step.
    fn add(&mut self, point: &ContactPoint) {
        let _ = point;
    }

    /// Called for each contact point that already existed at the previous step.
    fn persist(&mut self, point: &ContactPoint) {
        let _ = point;
    }

    /// Called for each contact point of the previous step that no longer exists.
    fn remove(&mut self, point: &ContactPoint) {
        let _ = point;
    }
}

/// The kind of a [`ContactEvent`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactEventKind {
    /// See [`ContactListener::add`].
    Add,
    /// See [`ContactListener::persist`].
    Persist,
    /// See [`ContactListener::remove`].
    Remove,
}

/// A recorded call to a [`ContactListener`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactEvent {
    /// The method that was called.
    pub kind: ContactEventKind,
    /// A copy of the reported point.
    pub point: ContactPoint,
}

/// A listener that records every event it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct ContactEventRecorder {
    events: Vec<ContactEvent>,
}

impl ContactEventRecorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in the order they were received.
    pub fn events(&self) -> &[ContactEvent] {
        &self.events
    }

    /// The number of recorded events of the given kind.
    pub fn count(&self, kind: ContactEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Forgets all the recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Sends all the recorded events, in order, to another listener.
    pub fn replay(&self, listener: &mut dyn ContactListener) {
        for event in &self.events {
            match event.kind {
                ContactEventKind::Add => listener.add(&event.point),
                ContactEventKind::Persist => listener.persist(&event.point),
                ContactEventKind::Remove => listener.remove(&event.point),
            }
        }
    }

    fn record(&mut self, kind: ContactEventKind, point: &ContactPoint) {
        self.events.push(ContactEvent {
            kind,
            point: *point,
        });
    }
}

impl ContactListener for ContactEventRecorder {
    fn add(&mut self, point: &ContactPoint) {
        self.record(ContactEventKind::Add, point);
    }

    fn persist(&mut self, point: &ContactPoint) {
        self.record(ContactEventKind::Persist, point);
    }

    fn remove(&mut self, point: &ContactPoint) {
        self.record(ContactEventKind::Remove, point);
    }
}

/// Reborrows an optional listener for a single call.
#[inline]
pub(crate) fn reborrow<'a>(
    listener: &'a mut Option<&mut dyn ContactListener>,
) -> Option<&'a mut dyn ContactListener> {
    match listener {
        Some(listener) => Some(&mut **listener as &mut dyn ContactListener),
        None => None,
    }
}
