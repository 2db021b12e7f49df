//! Serialization of LayeredNumber.
//! A number is serialized to its exact string form, so deserialization restores it bit for bit.

use crate::LayeredNumber;
use serde::{Serialize, Serializer};

impl Serialize for LayeredNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_exact_string())
    }
}
