//! Typed object identifiers

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// A caller-supplied identifier that is not a valid 24-character hex
/// `ObjectId`. Raised before any store interaction takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex identifier")]
pub struct InvalidHexId;

/// An `ObjectId` tagged with the record type it identifies, so a cart
/// identifier cannot be passed where a product identifier is expected.
pub struct TypedOid<T>(ObjectId, PhantomData<T>);

impl<T> TypedOid<T> {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new(), PhantomData)
    }

    #[must_use]
    pub const fn from_oid(oid: ObjectId) -> Self {
        Self(oid, PhantomData)
    }

    #[must_use]
    pub const fn into_oid(self) -> ObjectId {
        self.0
    }

    /// Parse the external hexadecimal form of an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHexId`] unless `hex` is exactly 24 hex characters.
    pub fn parse_hex(hex: &str) -> Result<Self, InvalidHexId> {
        ObjectId::parse_str(hex)
            .map(Self::from_oid)
            .map_err(|_| InvalidHexId)
    }

    /// Whether `hex` is a syntactically valid external identifier.
    #[must_use]
    pub fn is_valid_hex(hex: &str) -> bool {
        ObjectId::parse_str(hex).is_ok()
    }

    /// The external hexadecimal form. Total; never fails.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.0.to_hex()
    }
}

impl<T> Default for TypedOid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedOid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedOid<T> {}

impl<T> Debug for TypedOid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedOid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedOid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedOid<T> {}

impl<T> Hash for TypedOid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedOid<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedOid<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<ObjectId> for TypedOid<T> {
    fn from(value: ObjectId) -> Self {
        Self::from_oid(value)
    }
}

impl<T> From<TypedOid<T>> for ObjectId {
    fn from(value: TypedOid<T>) -> Self {
        value.into_oid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn parse_hex_round_trips() {
        let id = TypedOid::<Marker>::new();
        let hex = id.to_hex();

        let parsed = TypedOid::<Marker>::parse_hex(&hex).expect("hex form should parse");

        assert_eq!(parsed, id);
        assert_eq!(parsed.to_hex(), hex);
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        for input in ["", "zzz", "abc123", "not-an-identifier", "g89abcdef0123456789abcde"] {
            assert_eq!(
                TypedOid::<Marker>::parse_hex(input),
                Err(InvalidHexId),
                "{input:?} should be rejected"
            );
            assert!(!TypedOid::<Marker>::is_valid_hex(input));
        }
    }

    #[test]
    fn is_valid_hex_accepts_canonical_form() {
        assert!(TypedOid::<Marker>::is_valid_hex("689abcdef0123456789abcde"));
    }

    #[test]
    fn fresh_identifiers_are_distinct() {
        assert_ne!(TypedOid::<Marker>::new(), TypedOid::<Marker>::new());
    }
}
