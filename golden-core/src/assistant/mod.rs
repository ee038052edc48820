//! Rule based question answering over the vessel table.
//!
//! A question is reduced to a [`VesselQuery`] by keyword extraction, the first
//! matching record is looked up through the [`VesselOutboundPort`], and one of
//! a fixed set of sentences is rendered from it depending on the [`Intent`].

use crate::{LiteralOutcome, Value, VesselOutboundPort, VesselQuery, VesselRecord, parse_literal};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, instrument};

mod extract;
mod intent;

pub use intent::*;

pub const NOT_FOUND_ANSWER: &str = "I could not find a vessel matching your query.";

/// Fields stored as serialized lists, deserialized before being shown.
const LIST_FIELDS: [&str; 3] = [
    VesselRecord::MMSI,
    VesselRecord::NAME,
    VesselRecord::CALL_SIGN,
];

#[instrument(skip(store))]
pub fn answer<S: VesselOutboundPort + ?Sized>(store: &S, question: &str) -> String {
    let query = VesselQuery::from_question(question);

    let Some(record) = store.vessels(&query).into_iter().next() else {
        debug!(?query, "no vessel matched");
        return NOT_FOUND_ANSWER.to_string();
    };

    let intent = Intent::classify(question);
    debug!(?query, %intent, "answering");

    intent.render(&DisplayRecord::from(record))
}

/// A record prepared for display, list-like fields deserialized.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    fields: Vec<(String, DisplayValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    Stored(Value),
    Deserialized(LiteralOutcome),
}

impl DisplayRecord {
    pub fn get(&self, field: &str) -> Option<&DisplayValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &DisplayValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Display form of `field`, `None` when the record lacks it.
    pub fn display(&self, field: &str) -> String {
        self.get(field)
            .map(ToString::to_string)
            .unwrap_or_else(|| Value::Null.to_string())
    }
}

impl From<VesselRecord> for DisplayRecord {
    fn from(value: VesselRecord) -> Self {
        let fields = value
            .into_fields()
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::Str(raw) if LIST_FIELDS.contains(&name.as_str()) => {
                        DisplayValue::Deserialized(parse_literal(&raw))
                    }
                    v => DisplayValue::Stored(v),
                };
                (name, value)
            })
            .collect();

        DisplayRecord { fields }
    }
}

impl Display for DisplayValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Stored(v) => v.fmt(f),
            DisplayValue::Deserialized(v) => v.fmt(f),
        }
    }
}
