//! Route database loading and the route id index.
//!
//! The route database is the canonical list of known routes. Only the
//! `id` of each record matters here: schedules reference routes by id,
//! and the index answers "does this route exist?".

mod db;
mod error;
mod index;

pub use db::{RouteRecord, load_route_db};
pub use error::RouteDbError;
pub use index::{RouteIdSet, build_route_index};
