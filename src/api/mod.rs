//! Typed resource endpoints
//!
//! Each [`Endpoint`] wraps one resource (`cards`, `sets`) and exposes the
//! three read operations of the API: `find` by id, `search` for one page,
//! and `all` for every page.

mod endpoint;
mod params;

pub use endpoint::Endpoint;
pub use params::SearchParams;
