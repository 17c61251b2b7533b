//! Identity types for campus entities.
//!
//! All identifiers are 64-bit values that are:
//! - Unique within their kind inside one `School`
//! - Immutable once assigned
//! - Opaque to external users

use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an id from a raw value.
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub fn raw(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a student.
    StudentId,
    "st"
);
entity_id!(
    /// Unique identifier for a teacher.
    TeacherId,
    "te"
);
entity_id!(
    /// Unique identifier for a director.
    DirectorId,
    "di"
);
entity_id!(
    /// Unique identifier for a student class.
    ClassId,
    "cl"
);
entity_id!(
    /// Unique identifier for a subject.
    SubjectId,
    "su"
);
entity_id!(
    /// Unique identifier for an exam.
    ExamId,
    "ex"
);
entity_id!(
    /// Unique identifier for an exam result.
    ExamResultId,
    "re"
);

/// Unified identifier that can refer to any kind of person.
/// Used where callers need polymorphic handling over people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonId {
    Student(StudentId),
    Teacher(TeacherId),
    Director(DirectorId),
}

impl PersonId {
    /// Returns true if this refers to a student.
    pub fn is_student(&self) -> bool {
        matches!(self, PersonId::Student(_))
    }

    /// Returns true if this refers to a teacher.
    pub fn is_teacher(&self) -> bool {
        matches!(self, PersonId::Teacher(_))
    }

    /// Returns true if this refers to a director.
    pub fn is_director(&self) -> bool {
        matches!(self, PersonId::Director(_))
    }

    /// Get as a StudentId if this refers to a student.
    pub fn as_student(&self) -> Option<StudentId> {
        match self {
            PersonId::Student(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as a TeacherId if this refers to a teacher.
    pub fn as_teacher(&self) -> Option<TeacherId> {
        match self {
            PersonId::Teacher(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as a DirectorId if this refers to a director.
    pub fn as_director(&self) -> Option<DirectorId> {
        match self {
            PersonId::Director(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<StudentId> for PersonId {
    fn from(id: StudentId) -> Self {
        PersonId::Student(id)
    }
}

impl From<TeacherId> for PersonId {
    fn from(id: TeacherId) -> Self {
        PersonId::Teacher(id)
    }
}

impl From<DirectorId> for PersonId {
    fn from(id: DirectorId) -> Self {
        PersonId::Director(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonId::Student(id) => write!(f, "{}", id),
            PersonId::Teacher(id) => write!(f, "{}", id),
            PersonId::Director(id) => write!(f, "{}", id),
        }
    }
}
