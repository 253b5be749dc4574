//! View-model core for the dashboard pages.
//!
//! Everything in here is synchronous and free of Leptos: pages feed it the
//! JSON they fetched and render whatever comes back.
//!
//! - **payload**: envelope probing, numeric coercion, canonical series order
//! - **records**: detail rows, stable row keys, per-dimension aggregation
//! - **pagination**: page slicing and the page-scoped table state
//! - **expansion**: the set of drilled-down rows
//! - **geometry**: series to SVG coordinates and gauge offsets
//! - **request**: generation tokens that discard stale fetch responses

pub mod expansion;
pub mod geometry;
pub mod pagination;
pub mod payload;
pub mod records;
pub mod request;
