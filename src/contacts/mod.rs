//! Contact tracking between pairs of colliders.
//!
//! A [`Contact`] is created for each pair of colliders that may touch. At every step,
//! [`Contact::evaluate`] recomputes its manifold, carries the impulses of the points that
//! persist over, and reports every point to a [`ContactListener`] as added, persisting
//! or removed. A [`ContactSet`] stores the contacts of a world and evaluates them all.

pub use self::contact::{Contact, ContactFlags, ContactPair};
pub use self::contact_kind::{shapes_touching, ContactKind};
pub use self::contact_point::ContactPoint;
pub use self::contact_set::{ContactEdge, ContactHandle, ContactSet, ContactSetError};
pub use self::listener::{ContactEvent, ContactEventKind, ContactEventRecorder, ContactListener};
pub use self::scratch::{ScratchLease, ScratchPool};
pub use self::settings::{ContactSettings, MixRule};

mod contact;
mod contact_kind;
mod contact_point;
mod contact_set;
mod listener;
mod scratch;
mod settings;
