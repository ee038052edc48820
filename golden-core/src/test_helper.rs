use crate::{Value, VesselRecord};

impl VesselRecord {
    /// A record shaped like a row of the golden records table.
    pub fn test_default(imo: i64) -> VesselRecord {
        VesselRecord::from_iter([
            (VesselRecord::IMO, Value::Int(imo)),
            (VesselRecord::MMSI, Value::Str(format!("[{}]", 257_000_000 + imo % 1_000_000))),
            (VesselRecord::NAME, Value::Str(format!("['VESSEL {imo}']"))),
            (VesselRecord::CALL_SIGN, Value::Str(format!("['LK{}']", imo % 100))),
            (VesselRecord::LATITUDE, Value::Float(60.0)),
            (VesselRecord::LONGITUDE, Value::Float(5.0)),
        ])
    }

    /// Sets `field`, appending it when the record lacks it.
    pub fn with_field(self, field: &str, value: impl Into<Value>) -> VesselRecord {
        let value = value.into();
        let mut fields = self.into_fields();
        match fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, v)) => *v = value,
            None => fields.push((field.to_string(), value)),
        }
        VesselRecord::new(fields)
    }
}
