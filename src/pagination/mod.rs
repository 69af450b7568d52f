//! Pagination module
//!
//! Drives the `page`/`pageSize` protocol used by every `all`-style fetch.
//!
//! # Overview
//!
//! A [`Paginator`] is a two-state machine (`Fetching` → `Done`). Each step
//! asks a [`PageSource`] for one page, appends its items, and evaluates the
//! stop predicate against the page number it just requested:
//!
//! - `totalCount` absent or `0` ⇒ done
//! - `pageSize * page >= totalCount` ⇒ done
//!
//! Pages are fetched strictly one after another. A failed page aborts the
//! whole fetch; no partial result is returned.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{
    is_last_page, DataEnvelope, Page, PageEnvelope, PageSource, PaginationState,
    DEFAULT_PAGE_SIZE,
};

#[cfg(test)]
mod tests;
