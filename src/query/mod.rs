//! Query module
//!
//! Turns filter, sort, selection and paging parameters into the query
//! string sent to the API.
//!
//! # Overview
//!
//! - [`QuerySpec`] - immutable description of one page request
//! - [`Filter`] - `field:value` predicates rendered into the `q` parameter
//! - [`EmptyParams`] - whether empty `orderBy`/`select` are sent at all
//!
//! Values are concatenated verbatim. Nothing is percent-encoded here, so a
//! value containing `&` or `=` will corrupt the query string.

mod builder;
mod filter;

pub(crate) use builder::select_suffix;
pub use builder::{EmptyParams, QuerySpec};
pub use filter::{Filter, Predicate};

#[cfg(test)]
mod tests;
