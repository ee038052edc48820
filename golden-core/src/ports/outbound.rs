use crate::{VesselQuery, VesselRecord};

/// Read access to the vessel table.
pub trait VesselOutboundPort {
    /// All records matching `query`, in table order.
    fn vessels(&self, query: &VesselQuery) -> Vec<VesselRecord>;
}
