//! Sampling module
//!
//! Random-filter retry harness used by the corpus generator.
//!
//! # Overview
//!
//! - [`CandidatePool`] - owned, mutable set of filter values
//! - [`Sampler`] - picks a value, runs a full paginated fetch filtered on
//!   `field:"value"`, and retries with another value on an empty or failed
//!   result
//!
//! A value that produced no records, or whose fetch failed, is removed from
//! the pool and never picked again for the lifetime of that pool. The value
//! that succeeds stays in the pool.
//!
//! A pool is not synchronized. Confine it to one generation run at a time.

mod harness;
mod pool;

pub use harness::{Sampler, DEFAULT_RETRIES};
pub use pool::CandidatePool;
