//! The hash-map used for lookups that are never iterated.

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
pub use hashbrown::hash_map::Entry;
