use crate::math::Real;

/// How the material coefficients of two colliders are combined into the coefficient
/// of their contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MixRule {
    /// `(a + b) / 2`.
    Average,
    /// `sqrt(a * b)`.
    GeometricMean,
    /// `min(a, b)`.
    Min,
    /// `a * b`.
    Multiply,
    /// `max(a, b)`.
    Max,
}

impl MixRule {
    /// Combines two coefficients.
    pub fn mix(self, a: Real, b: Real) -> Real {
        match self {
            MixRule::Average => (a + b) * 0.5,
            MixRule::GeometricMean => (a * b).sqrt(),
            MixRule::Min => a.min(b),
            MixRule::Multiply => a * b,
            MixRule::Max => a.max(b),
        }
    }
}

/// Parameters of a [`ContactSet`](super::ContactSet).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactSettings {
    /// How the friction of a new contact is computed from its colliders.
    pub friction_mix_rule: MixRule,
    /// How the restitution of a new contact is computed from its colliders.
    pub restitution_mix_rule: MixRule,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            friction_mix_rule: MixRule::GeometricMean,
            restitution_mix_rule: MixRule::Max,
        }
    }
}
