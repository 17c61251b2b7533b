//! Store-level error types.

use crate::{ClassId, DirectorId, ExamId, ExamResultId, StudentId, SubjectId, TeacherId};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Student not found.
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    /// Teacher not found.
    #[error("Teacher not found: {0}")]
    TeacherNotFound(TeacherId),

    /// Director not found.
    #[error("Director not found: {0}")]
    DirectorNotFound(DirectorId),

    /// Student class not found.
    #[error("Class not found: {0}")]
    ClassNotFound(ClassId),

    /// Subject not found.
    #[error("Subject not found: {0}")]
    SubjectNotFound(SubjectId),

    /// Exam not found.
    #[error("Exam not found: {0}")]
    ExamNotFound(ExamId),

    /// Exam result not found.
    #[error("Exam result not found: {0}")]
    ExamResultNotFound(ExamResultId),

    /// Cannot delete an exam while results reference it.
    #[error("Cannot delete exam {0}: results are recorded against it")]
    ExamHasResults(ExamId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
