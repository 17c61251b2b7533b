//! Campus Mutation
//!
//! The association maintainer: the only code path that mutates relation
//! fields on the school graph. Every operation updates both sides of each
//! touched bidirectional link, validates its preconditions before the first
//! write, and leaves the graph unchanged when it fails.
//!
//! # Module Structure
//!
//! - `executor` - The `Maintainer` facade coordinating operations
//! - `ops/` - Individual operation implementations (enroll, assign, exam,
//!   retire)
//! - `error` - Error types for maintainer failures

mod error;
mod executor;
mod ops;

pub use error::{ErrorKind, MaintainError, MaintainResult};
pub use executor::Maintainer;
pub use ops::*;
