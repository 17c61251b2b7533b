//! Campus Seed Scenario
//!
//! Builds the canonical example school graph: one class, one teacher, three
//! students, two subjects, two exams and three results, exercising every
//! association kind. The builder is the fixture behind the acceptance suite
//! in `tests/` and doubles as a demo of the maintainer API.
//!
//! Invoke `build_school()` deliberately from a test or demo harness; nothing
//! runs it implicitly.

mod scenario;

pub use scenario::{build_school, SeedIds, Seeded};
