//! Various unsorted geometrical and logical operators.

pub use self::scalar::{
    clamp, clamp_vector, inv, inv_sqrt, is_power_of_two, map_range, next_power_of_two,
};
pub use self::arena::ArenaIndex;
pub use self::sorted_pair::SortedPair;
pub use self::vec2_ops::{scalar_cross, Vec2Ops};

pub(crate) use self::arena::Arena;
pub(crate) use self::consts::*;

mod arena;
mod consts;
pub mod hashmap;
mod scalar;
mod sorted_pair;
mod vec2_ops;
