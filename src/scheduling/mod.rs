//! Availability engine: schedule resolution, slot enumeration and
//! conflict detection. Pure functions over snapshots; persistence stays
//! in the repositories.

pub mod conflict;
pub mod interval;
pub mod schedule;
pub mod slots;
