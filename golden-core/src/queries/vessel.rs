use crate::{Imo, Mmsi, VesselRecord};

/// Conjunctive filter over the vessel table, an absent field does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VesselQuery {
    pub imo: Option<Imo>,
    pub mmsi: Option<Mmsi>,
    pub name: Option<String>,
}

impl VesselQuery {
    /// Builds a query from raw filter values. Zero identifiers and empty names
    /// count as absent.
    pub fn new(imo: Option<i64>, mmsi: Option<i64>, name: Option<String>) -> VesselQuery {
        VesselQuery {
            imo: imo.filter(|v| *v != 0).map(Imo::new),
            mmsi: mmsi.filter(|v| *v != 0).map(Mmsi::new),
            name: name.filter(|v| !v.is_empty()),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.imo.is_none() && self.mmsi.is_none() && self.name.is_none()
    }

    /// Whether `record` satisfies every filter that is set.
    ///
    /// `mmsi` and `name` are matched as substrings of the stored text, since the
    /// stored value is a serialized list. This means `mmsi=123` also matches a
    /// stored `[4123]`.
    pub fn matches(&self, record: &VesselRecord) -> bool {
        if let Some(imo) = self.imo {
            if !record.imo().is_some_and(|v| v.eq_int(imo.into_inner())) {
                return false;
            }
        }

        if let Some(mmsi) = self.mmsi {
            let needle = mmsi.to_string();
            if !record
                .mmsi()
                .and_then(|v| v.as_text())
                .is_some_and(|text| text.contains(&needle))
            {
                return false;
            }
        }

        if let Some(name) = &self.name {
            let needle = name.to_lowercase();
            if !record
                .name()
                .and_then(|v| v.as_text())
                .is_some_and(|text| text.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        true
    }
}
