use crate::contacts::listener::reborrow;
use crate::contacts::{Contact, ContactListener, ContactPair, ContactSettings, ScratchPool};
use crate::dynamics::{ColliderHandle, ColliderSet, RigidBodyHandle, RigidBodySet};
use crate::query::Unsupported;
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{Arena, ArenaIndex, SortedPair};
use smallvec::SmallVec;

/// The handle of a contact inserted into a [`ContactSet`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactHandle(pub(crate) ArenaIndex);

impl ContactHandle {
    /// The slot index and generation of this handle.
    pub const fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }
}

/// A contact, seen from one of the two rigid-bodies it involves.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContactEdge {
    /// The other rigid-body of the contact.
    pub other: RigidBodyHandle,
    /// The contact.
    pub contact: ContactHandle,
}

/// Error indicating that a contact could not be inserted into a [`ContactSet`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactSetError {
    /// No contact can be computed between the shapes of the colliders.
    #[error(transparent)]
    Unsupported(#[from] Unsupported),
    /// A contact between these colliders already exists.
    #[error("a contact already exists between these colliders: {0:?}")]
    DuplicatePair(ContactHandle),
    /// The collider is not part of the collider set.
    #[error("the collider {0:?} does not exist")]
    InvalidCollider(ColliderHandle),
    /// Both colliders are attached to the same rigid-body.
    #[error("both colliders are attached to the rigid-body {0:?}")]
    SameBody(RigidBodyHandle),
}

#[derive(Clone, Debug)]
struct ContactSlot {
    contact: Contact,
    body1: RigidBodyHandle,
    body2: RigidBodyHandle,
}

/// The contacts of a world.
///
/// Each contact is indexed by its pair of colliders and listed in the contact edges of
/// both its rigid-bodies. Contacts are always evaluated by increasing handle.
#[derive(Clone, Debug, Default)]
pub struct ContactSet {
    contacts: Arena<ContactSlot>,
    pairs: HashMap<SortedPair<ColliderHandle>, ContactHandle>,
    body_edges: HashMap<RigidBodyHandle, SmallVec<[ContactEdge; 4]>>,
    settings: ContactSettings,
}

impl ContactSet {
    /// An empty contact set with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty contact set with the given settings.
    pub fn with_settings(settings: ContactSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The settings of this contact set.
    pub fn settings(&self) -> &ContactSettings {
        &self.settings
    }

    /// The number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The contact with the given handle.
    pub fn get(&self, handle: ContactHandle) -> Option<&Contact> {
        self.contacts.get(handle.0).map(|slot| &slot.contact)
    }

    /// The contact with the given handle, mutably.
    pub fn get_mut(&mut self, handle: ContactHandle) -> Option<&mut Contact> {
        self.contacts.get_mut(handle.0).map(|slot| &mut slot.contact)
    }

    /// The contact between two colliders, given in any order.
    pub fn contact_between(
        &self,
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    ) -> Option<(ContactHandle, &Contact)> {
        let handle = *self.pairs.get(&SortedPair::new(collider1, collider2))?;
        self.get(handle).map(|contact| (handle, contact))
    }

    /// Iterates through all the contacts, by increasing handle.
    pub fn iter(&self) -> impl Iterator<Item = (ContactHandle, &Contact)> {
        self.contacts
            .iter()
            .map(|(i, slot)| (ContactHandle(i), &slot.contact))
    }

    /// The contacts involving the given rigid-body, in insertion order.
    pub fn contact_edges(&self, body: RigidBodyHandle) -> &[ContactEdge] {
        self.body_edges
            .get(&body)
            .map(|edges| &edges[..])
            .unwrap_or(&[])
    }

    /// Creates the contact between two colliders.
    ///
    /// The friction and restitution of the contact are mixed from the ones of the
    /// colliders, and the contact is flagged as a sensor if either collider is one.
    pub fn insert(
        &mut self,
        collider1: ColliderHandle,
        collider2: ColliderHandle,
        colliders: &ColliderSet,
    ) -> Result<ContactHandle, ContactSetError> {
        let co1 = colliders
            .get(collider1)
            .ok_or(ContactSetError::InvalidCollider(collider1))?;
        let co2 = colliders
            .get(collider2)
            .ok_or(ContactSetError::InvalidCollider(collider2))?;

        if co1.parent == co2.parent {
            return Err(ContactSetError::SameBody(co1.parent));
        }

        let key = SortedPair::new(collider1, collider2);
        if let Some(existing) = self.pairs.get(&key) {
            return Err(ContactSetError::DuplicatePair(*existing));
        }

        let mut contact = Contact::try_new(collider1, &co1.shape, collider2, &co2.shape)?;
        contact.friction = self
            .settings
            .friction_mix_rule
            .mix(co1.friction, co2.friction);
        contact.restitution = self
            .settings
            .restitution_mix_rule
            .mix(co1.restitution, co2.restitution);
        contact.set_sensor(co1.is_sensor || co2.is_sensor);

        let (body1, body2) = if contact.collider1() == collider1 {
            (co1.parent, co2.parent)
        } else {
            (co2.parent, co1.parent)
        };

        log::debug!(
            "Contact {:?} created between {:?} and {:?}.",
            contact.kind(),
            contact.collider1(),
            contact.collider2()
        );

        let handle = ContactHandle(self.contacts.insert(ContactSlot {
            contact,
            body1,
            body2,
        }));
        let _ = self.pairs.insert(key, handle);
        self.body_edges.entry(body1).or_default().push(ContactEdge {
            other: body2,
            contact: handle,
        });
        self.body_edges.entry(body2).or_default().push(ContactEdge {
            other: body1,
            contact: handle,
        });

        Ok(handle)
    }

    /// Destroys a contact.
    ///
    /// If a listener is given, the points of the last evaluation are reported to it as
    /// removed, provided the colliders and bodies of the contact still exist.
    pub fn remove(
        &mut self,
        handle: ContactHandle,
        colliders: &ColliderSet,
        bodies: &RigidBodySet,
        scratch: &mut ScratchPool,
        listener: Option<&mut dyn ContactListener>,
    ) -> Option<Contact> {
        let slot = self.contacts.remove(handle.0)?;
        let contact = &slot.contact;

        let _ = self
            .pairs
            .remove(&SortedPair::new(contact.collider1(), contact.collider2()));

        for body in [slot.body1, slot.body2] {
            if let Entry::Occupied(mut edges) = self.body_edges.entry(body) {
                edges.get_mut().retain(|edge| edge.contact != handle);
                if edges.get().is_empty() {
                    let _ = edges.remove();
                }
            }
        }

        if let Some(listener) = listener {
            if let Some(pair) = contact_pair(&slot, colliders, bodies) {
                contact.report_removal(&pair, scratch, listener);
            }
        }

        log::debug!(
            "Contact between {:?} and {:?} destroyed.",
            contact.collider1(),
            contact.collider2()
        );

        Some(slot.contact)
    }

    /// Destroys every contact involving the given collider, by increasing handle.
    ///
    /// Returns the number of contacts destroyed. See [`Self::remove`] for how their points
    /// are reported.
    pub fn remove_collider(
        &mut self,
        collider: ColliderHandle,
        colliders: &ColliderSet,
        bodies: &RigidBodySet,
        scratch: &mut ScratchPool,
        mut listener: Option<&mut dyn ContactListener>,
    ) -> usize {
        let involves_collider =
            |c: &Contact| c.collider1() == collider || c.collider2() == collider;

        let mut to_remove: SmallVec<[ContactHandle; 4]> = match colliders.get(collider) {
            Some(co) => self
                .contact_edges(co.parent)
                .iter()
                .map(|edge| edge.contact)
                .filter(|handle| self.get(*handle).is_some_and(involves_collider))
                .collect(),
            None => self
                .iter()
                .filter(|(_, contact)| involves_collider(contact))
                .map(|(handle, _)| handle)
                .collect(),
        };
        to_remove.sort_unstable();

        for handle in &to_remove {
            let _ = self.remove(*handle, colliders, bodies, scratch, reborrow(&mut listener));
        }

        to_remove.len()
    }

    /// Evaluates every contact, by increasing handle.
    ///
    /// Contacts whose colliders or bodies no longer exist, or whose colliders were moved to
    /// another body, are skipped.
    pub fn evaluate_all(
        &mut self,
        colliders: &ColliderSet,
        bodies: &RigidBodySet,
        scratch: &mut ScratchPool,
        mut listener: Option<&mut dyn ContactListener>,
    ) {
        for (i, slot) in self.contacts.iter_mut() {
            let Some(pair) = contact_pair(slot, colliders, bodies) else {
                log::warn!(
                    "Contact {:?} skipped: its colliders or bodies no longer exist.",
                    ContactHandle(i)
                );
                continue;
            };

            slot.contact.evaluate(&pair, scratch, reborrow(&mut listener));
        }
    }

    /// Evaluates every contact in parallel.
    ///
    /// Each worker thread uses its own [`ScratchPool`]. The events are recorded per
    /// contact, then sent to `listener` by increasing contact handle: the listener
    /// receives exactly the same calls as with [`Self::evaluate_all`].
    #[cfg(feature = "parallel")]
    pub fn par_evaluate_all(
        &mut self,
        colliders: &ColliderSet,
        bodies: &RigidBodySet,
        listener: Option<&mut dyn ContactListener>,
    ) {
        use crate::contacts::ContactEventRecorder;
        use rayon::prelude::*;

        let record = listener.is_some();
        let slots: Vec<_> = self.contacts.iter_mut().collect();

        let recorders: Vec<Option<ContactEventRecorder>> = slots
            .into_par_iter()
            .map_init(ScratchPool::new, |scratch, (i, slot)| {
                let Some(pair) = contact_pair(slot, colliders, bodies) else {
                    log::warn!(
                        "Contact {:?} skipped: its colliders or bodies no longer exist.",
                        ContactHandle(i)
                    );
                    return None;
                };

                if record {
                    let mut recorder = ContactEventRecorder::new();
                    slot.contact.evaluate(&pair, scratch, Some(&mut recorder));
                    Some(recorder)
                } else {
                    slot.contact.evaluate(&pair, scratch, None);
                    None
                }
            })
            .collect();

        if let Some(listener) = listener {
            for recorder in recorders.iter().flatten() {
                recorder.replay(listener);
            }
        }
    }
}

/// The colliders and bodies of a contact, if they still exist and the colliders are still
/// attached to the bodies the contact was created with.
fn contact_pair<'a>(
    slot: &ContactSlot,
    colliders: &'a ColliderSet,
    bodies: &'a RigidBodySet,
) -> Option<ContactPair<'a>> {
    let collider1 = colliders.get(slot.contact.collider1())?;
    let collider2 = colliders.get(slot.contact.collider2())?;
    if collider1.parent != slot.body1 || collider2.parent != slot.body2 {
        return None;
    }

    let body1 = bodies.get(slot.body1)?;
    let body2 = bodies.get(slot.body2)?;
    Some(ContactPair::new(collider1, body1, collider2, body2))
}
