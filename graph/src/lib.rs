//! Campus Graph Storage
//!
//! This crate provides the in-memory school graph:
//! - Entity records: Student, Teacher, Director, StudentClass, Subject,
//!   Exam, ExamResult
//! - The `School` arena: id-keyed storage per entity kind with creation,
//!   lookup, counting and raw removal
//! - Read-only query helpers over teachers
//!
//! Relation fields on the records are wired exclusively by the maintainer
//! operations in `campus-mutation`; constructors leave every association
//! empty or unset.

mod entity;
mod school;

pub use entity::*;
pub use school::*;
