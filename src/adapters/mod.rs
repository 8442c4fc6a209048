//! Adapter implementations of the port traits.

pub mod catalog;
pub mod live;
