//! Outbound adapters implementing the domain's persistence port.

pub mod persistence;
