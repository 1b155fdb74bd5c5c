use std::fmt;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a stored record.
///
/// Always a 24-character hex string (the ObjectId text form). Records are
/// keyed by this string, not by a binary ObjectId, so the value round-trips
/// unchanged between the wire and the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Length of the hex text form.
    pub const LEN: usize = 24;

    /// Mint a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new().to_hex())
    }

    /// Parse an identifier received at the service boundary.
    ///
    /// Anything that is not exactly 24 hex digits is rejected with a
    /// `Validation` error; callers decide how to surface it.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() == Self::LEN && ObjectId::parse_str(raw).is_ok() {
            Ok(Self(raw.to_string()))
        } else {
            Err(CoreError::Validation(format!(
                "'{raw}' is not a valid record id"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
