//! Entity records for the school graph.
//!
//! Every record carries its own id plus relation fields holding the ids of
//! the entities on the other side of each link. Both sides of a link are
//! stored explicitly; nothing here relies on back-pointer aliasing.

use campus_core::{
    ClassId, DirectorId, ExamId, ExamResultId, PersonDetails, StudentId, SubjectId, TeacherId,
};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Subject a teacher is specialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Specialization {
    Mathematics,
    Biology,
    Chemistry,
    Physics,
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specialization::Mathematics => write!(f, "Mathematics"),
            Specialization::Biology => write!(f, "Biology"),
            Specialization::Chemistry => write!(f, "Chemistry"),
            Specialization::Physics => write!(f, "Physics"),
        }
    }
}

/// A student.
#[derive(Debug, Clone)]
pub struct Student {
    /// Unique identifier for this student.
    pub id: StudentId,
    /// Shared person record.
    pub person: PersonDetails,
    /// The class this student belongs to, if any.
    pub class: Option<ClassId>,
    /// Subjects the student is enrolled in, in enrollment order.
    pub subjects: Vec<SubjectId>,
    /// Exams the student sits, in assignment order.
    pub exams: Vec<ExamId>,
}

impl Student {
    /// Create a new student with no associations.
    pub fn new(id: StudentId, person: PersonDetails) -> Self {
        Self {
            id,
            person,
            class: None,
            subjects: Vec::new(),
            exams: Vec::new(),
        }
    }

    /// Display name: first and last name, space-joined.
    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}

/// A teacher.
#[derive(Debug, Clone)]
pub struct Teacher {
    /// Unique identifier for this teacher.
    pub id: TeacherId,
    /// Shared person record.
    pub person: PersonDetails,
    /// Subject specialization.
    pub specialization: Specialization,
    /// First working day; drives the derived years of experience.
    pub first_day: Option<NaiveDate>,
    /// The class this teacher owns as homeroom teacher, if any.
    pub class: Option<ClassId>,
    /// Exams created by this teacher, in creation order.
    pub exams: Vec<ExamId>,
}

impl Teacher {
    /// Create a new teacher with no associations.
    pub fn new(id: TeacherId, person: PersonDetails, specialization: Specialization) -> Self {
        Self {
            id,
            person,
            specialization,
            first_day: None,
            class: None,
            exams: Vec::new(),
        }
    }

    /// Display name: first and last name, space-joined.
    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    /// Whole years of experience as of the given date.
    /// 0 when the first day is unset or lies after `on`.
    pub fn years_of_experience_at(&self, on: NaiveDate) -> u64 {
        self.first_day
            .and_then(|first_day| on.years_since(first_day))
            .map(u64::from)
            .unwrap_or(0)
    }

    /// Whole years of experience as of today.
    pub fn years_of_experience(&self) -> u64 {
        self.years_of_experience_at(Local::now().date_naive())
    }
}

/// A director. Carries a budget and no graph associations.
#[derive(Debug, Clone)]
pub struct Director {
    /// Unique identifier for this director.
    pub id: DirectorId,
    /// Shared person record.
    pub person: PersonDetails,
    /// Budget the director manages.
    pub budget: f64,
}

impl Director {
    /// Create a new director.
    pub fn new(id: DirectorId, person: PersonDetails, budget: f64) -> Self {
        Self { id, person, budget }
    }
}

/// A class of students with a homeroom teacher.
#[derive(Debug, Clone)]
pub struct StudentClass {
    /// Unique identifier for this class.
    pub id: ClassId,
    /// Class name.
    pub name: String,
    /// Roster: member students in enrollment order, duplicate-free.
    pub students: Vec<StudentId>,
    /// The homeroom teacher, if assigned.
    pub teacher: Option<TeacherId>,
    /// Display name of the class president, if one is set.
    pub president: Option<String>,
}

impl StudentClass {
    /// Create a new class with no members and no teacher.
    pub fn new(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            students: Vec::new(),
            teacher: None,
            president: None,
        }
    }
}

/// A subject taught at the school.
#[derive(Debug, Clone)]
pub struct Subject {
    /// Unique identifier for this subject.
    pub id: SubjectId,
    /// Subject name.
    pub name: String,
    /// Numeric weight of the subject.
    pub weight: u64,
    /// Enrolled students, in enrollment order.
    pub students: Vec<StudentId>,
    /// Exams given in this subject, in creation order.
    pub exams: Vec<ExamId>,
}

impl Subject {
    /// Create a new subject with no enrollments and no exams.
    pub fn new(id: SubjectId, name: impl Into<String>, weight: u64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            students: Vec::new(),
            exams: Vec::new(),
        }
    }
}

/// An exam.
#[derive(Debug, Clone)]
pub struct Exam {
    /// Unique identifier for this exam.
    pub id: ExamId,
    /// Exam name.
    pub name: String,
    /// Maximum achievable points.
    pub max_points: u64,
    /// Date the exam takes place.
    pub date: NaiveDate,
    /// The teacher who created the exam, once linked.
    pub teacher: Option<TeacherId>,
    /// The subject the exam belongs to, once linked.
    pub subject: Option<SubjectId>,
    /// Roster: students sitting the exam, duplicate-free.
    pub students: Vec<StudentId>,
    /// Results recorded against this exam.
    pub results: Vec<ExamResultId>,
}

impl Exam {
    /// Create a new exam with no associations.
    pub fn new(id: ExamId, name: impl Into<String>, max_points: u64, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            max_points,
            date,
            teacher: None,
            subject: None,
            students: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Returns true if the exam has never been wired to a teacher or roster.
    pub fn is_fresh(&self) -> bool {
        self.teacher.is_none() && self.students.is_empty()
    }
}

/// A single result of an exam.
#[derive(Debug, Clone)]
pub struct ExamResult {
    /// Unique identifier for this result.
    pub id: ExamResultId,
    /// Display name, by convention the full name of the scored student.
    pub name: String,
    /// Achieved score.
    pub score: f32,
    /// Date the result was issued.
    pub date: NaiveDate,
    /// The exam this result belongs to, once recorded.
    pub exam: Option<ExamId>,
}

impl ExamResult {
    /// Create a new, not yet recorded result.
    pub fn new(id: ExamResultId, name: impl Into<String>, score: f32, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            score,
            date,
            exam: None,
        }
    }
}
