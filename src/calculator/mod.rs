//! GPA aggregation and feedback classification.
//!
//! Everything in here is pure: a borrowed module list goes in, a freshly
//! allocated [`AggregateResult`] comes out. Malformed modules never fail a
//! computation, they just contribute nothing.

pub mod aggregate;
pub mod feedback;
pub mod types;
pub mod utility;

pub use aggregate::{compute, compute_with};
pub use feedback::{DEANS_LIST_THRESHOLD, FeedbackTier};
pub use types::{AggregateResult, ModuleEntry};
