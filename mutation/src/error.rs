//! Maintainer error types.

use campus_core::{ClassId, ExamId, ExamResultId, StoreError, StudentId, SubjectId, TeacherId};
use thiserror::Error;

/// Result type for maintainer operations.
pub type MaintainResult<T> = Result<T, MaintainError>;

/// Coarse classification of a maintainer failure.
///
/// Every error maps onto exactly one kind; callers that only care about the
/// category (e.g. an HTTP adapter choosing a status code) branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity or membership is absent.
    NotFound,
    /// The operation would violate an invariant.
    Conflict,
    /// Index-based access beyond bounds.
    OutOfRange,
    /// Operation preconditions unmet.
    InvalidState,
}

/// Errors that can occur during maintainer operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaintainError {
    /// A store lookup or removal failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Student is already on the class roster.
    #[error("Student {student} is already enrolled in class {class}")]
    AlreadyEnrolled { student: StudentId, class: ClassId },

    /// Student is not on the class roster.
    #[error("Student {student} is not enrolled in class {class}")]
    NotEnrolled { student: StudentId, class: ClassId },

    /// Student is already enrolled in the subject.
    #[error("Student {student} is already taking subject {subject}")]
    AlreadyTakingSubject {
        student: StudentId,
        subject: SubjectId,
    },

    /// Student is not enrolled in the subject.
    #[error("Student {student} is not taking subject {subject}")]
    NotTakingSubject {
        student: StudentId,
        subject: SubjectId,
    },

    /// The class already has a different teacher.
    #[error("Class {class} already has teacher {teacher}")]
    ClassHasTeacher { class: ClassId, teacher: TeacherId },

    /// The teacher already owns a different class.
    #[error("Teacher {teacher} already owns class {class}")]
    TeacherHasClass { teacher: TeacherId, class: ClassId },

    /// Student is not a member of the class.
    #[error("Student {student} is not a member of class {class}")]
    NotClassMember { student: StudentId, class: ClassId },

    /// The exam is already wired to a teacher or roster.
    #[error("Exam {0} is already wired to a teacher or roster")]
    ExamAlreadyWired(ExamId),

    /// The exam already belongs to a different subject.
    #[error("Exam {exam} already belongs to subject {subject}")]
    ExamHasSubject { exam: ExamId, subject: SubjectId },

    /// The result is already recorded against an exam.
    #[error("Result {result} is already recorded against exam {exam}")]
    AlreadyRecorded {
        result: ExamResultId,
        exam: ExamId,
    },

    /// Exam index beyond the teacher's exam list.
    #[error("Exam index {index} out of range for teacher {teacher} with {len} exams")]
    ExamIndexOutOfRange {
        teacher: TeacherId,
        index: usize,
        len: usize,
    },
}

impl MaintainError {
    /// The four-way classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MaintainError::Store(StoreError::ExamHasResults(_)) => ErrorKind::Conflict,
            MaintainError::Store(_) => ErrorKind::NotFound,
            MaintainError::NotEnrolled { .. } | MaintainError::NotTakingSubject { .. } => {
                ErrorKind::NotFound
            }
            MaintainError::ClassHasTeacher { .. }
            | MaintainError::TeacherHasClass { .. }
            | MaintainError::AlreadyTakingSubject { .. }
            | MaintainError::NotClassMember { .. }
            | MaintainError::ExamHasSubject { .. } => ErrorKind::Conflict,
            MaintainError::ExamIndexOutOfRange { .. } => ErrorKind::OutOfRange,
            MaintainError::AlreadyEnrolled { .. }
            | MaintainError::ExamAlreadyWired(_)
            | MaintainError::AlreadyRecorded { .. } => ErrorKind::InvalidState,
        }
    }
}
