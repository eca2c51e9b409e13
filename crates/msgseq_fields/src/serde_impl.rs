//! Serde support for field trees.
//!
//! Fields and tags are re-validated on the way in, so a deserialized tree
//! obeys the same naming rules as one built through the API.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use msgseq_value::Value;

use crate::collection::FieldCollection;
use crate::field::{Field, FieldValue};
use crate::tag::{Tag, TagCollection};

#[derive(Serialize, Deserialize)]
struct TagRepr {
    name: String,
    state: bool,
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TagRepr {
            name: self.name().to_string(),
            state: self.state(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TagRepr::deserialize(deserializer)?;
        Self::new(repr.name, repr.state).map_err(D::Error::custom)
    }
}

impl Serialize for TagCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for TagCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tags = Vec::<Tag>::deserialize(deserializer)?;
        Self::from_tags(tags).map_err(D::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PayloadRepr {
    Value(Value),
    Fields(FieldCollection),
}

#[derive(Serialize, Deserialize)]
struct FieldRepr {
    name: String,
    #[serde(flatten)]
    payload: PayloadRepr,
    #[serde(default, skip_serializing_if = "TagCollection::is_empty")]
    tags: TagCollection,
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = match self.value() {
            FieldValue::Value(v) => PayloadRepr::Value(v.clone()),
            FieldValue::Fields(fields) => PayloadRepr::Fields(fields.clone()),
        };
        FieldRepr {
            name: self.name().to_string(),
            payload,
            tags: self.tags().clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FieldRepr::deserialize(deserializer)?;
        let value = match repr.payload {
            PayloadRepr::Value(v) => FieldValue::Value(v),
            PayloadRepr::Fields(fields) => FieldValue::Fields(fields),
        };
        Ok(Self::new(repr.name, value)
            .map_err(D::Error::custom)?
            .with_tags(repr.tags))
    }
}

impl Serialize for FieldCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for FieldCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Field>::deserialize(deserializer)?.into_iter().collect())
    }
}
