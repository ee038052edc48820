use crate::Value;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

/// A golden record: the canonical row for one vessel.
///
/// Fields keep the column order of the source table, both when serialized
/// and when iterated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VesselRecord {
    fields: Vec<(String, Value)>,
}

impl VesselRecord {
    pub const IMO: &'static str = "imo";
    pub const MMSI: &'static str = "mmsi";
    pub const NAME: &'static str = "name";
    pub const CALL_SIGN: &'static str = "callsign";
    pub const LATITUDE: &'static str = "last_position_latitude";
    pub const LONGITUDE: &'static str = "last_position_longitude";

    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn imo(&self) -> Option<&Value> {
        self.get(Self::IMO)
    }

    pub fn mmsi(&self) -> Option<&Value> {
        self.get(Self::MMSI)
    }

    pub fn name(&self) -> Option<&Value> {
        self.get(Self::NAME)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VesselRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Serialize for VesselRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VesselRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = VesselRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Value>()? {
                    fields.push(entry);
                }
                Ok(VesselRecord { fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
