/// The geometric features that generated a manifold point.
///
/// Edges and vertices are indexed as in [`Polygon`](crate::shape::Polygon). Features that
/// are not involved are set to [`ContactId::NULL_FEATURE`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ContactFeatures {
    /// The edge that defines the contact normal.
    pub reference_edge: u8,
    /// The edge, of the other shape, that got clipped against the reference edge.
    pub incident_edge: u8,
    /// The vertex, of the other shape, that generated this point.
    pub incident_vertex: u8,
    /// Set to `1` if the roles of the two shapes were swapped when generating this point.
    pub flip: u8,
}

/// A compact identifier of a manifold point, stable across steps.
///
/// Two points generated by the same features at two different steps have the same
/// id. Ids are compared by value and are the only key used for warm-starting.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ContactId(u32);

impl ContactId {
    /// Marks a feature that did not take part in the contact.
    pub const NULL_FEATURE: u8 = u8::MAX;

    /// The id of the single point of manifolds that cannot have more than one point.
    pub const ZERO: Self = ContactId(0);

    /// Packs contact features into an id.
    #[inline]
    pub const fn from_features(
        reference_edge: u8,
        incident_edge: u8,
        incident_vertex: u8,
        flip: u8,
    ) -> Self {
        ContactId(
            reference_edge as u32
                | (incident_edge as u32) << 8
                | (incident_vertex as u32) << 16
                | (flip as u32) << 24,
        )
    }

    /// Builds an id from its raw key.
    #[inline]
    pub const fn from_key(key: u32) -> Self {
        ContactId(key)
    }

    /// The raw key of this id.
    #[inline]
    pub const fn key(self) -> u32 {
        self.0
    }

    /// Unpacks the features of this id.
    #[inline]
    pub const fn features(self) -> ContactFeatures {
        ContactFeatures {
            reference_edge: self.0 as u8,
            incident_edge: (self.0 >> 8) as u8,
            incident_vertex: (self.0 >> 16) as u8,
            flip: (self.0 >> 24) as u8,
        }
    }

    /// This id with its flip feature set to `flip`.
    #[inline]
    pub const fn with_flip(self, flip: bool) -> Self {
        ContactId((self.0 & 0x00ff_ffff) | (flip as u32) << 24)
    }
}

impl From<ContactFeatures> for ContactId {
    #[inline]
    fn from(features: ContactFeatures) -> Self {
        ContactId::from_features(
            features.reference_edge,
            features.incident_edge,
            features.incident_vertex,
            features.flip,
        )
    }
}
