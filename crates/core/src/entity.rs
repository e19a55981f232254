//! Entity trait: identity that survives changes to every other attribute.

/// Entity marker + minimal interface.
///
/// Two records with the same `id()` describe the same customer or invoice,
/// whatever their other fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
