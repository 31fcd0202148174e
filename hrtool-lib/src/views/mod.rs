//! Read-only projections of the horse collection that the front ends draw.

pub mod breeding;
pub mod list;
pub mod search;
