//! Serde support: a value travels as its kind plus canonical text.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::ValueKind;
use crate::value::Value;

#[derive(Serialize, Deserialize)]
struct Repr {
    kind: ValueKind,
    text: String,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Repr {
            kind: self.kind(),
            text: self.to_text(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Repr::deserialize(deserializer)?;
        Self::parse(repr.kind, &repr.text).map_err(D::Error::custom)
    }
}
