//! Core school graph storage.

use crate::entity::{
    Director, Exam, ExamResult, Specialization, Student, StudentClass, Subject, Teacher,
};
use campus_core::{
    ClassId, DirectorId, ExamId, ExamResultId, PersonDetails, StoreError, StoreResult, StudentId,
    SubjectId, TeacherId,
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// ID allocator for every entity kind.
#[derive(Debug)]
struct IdAllocator {
    next_student: u64,
    next_teacher: u64,
    next_director: u64,
    next_class: u64,
    next_subject: u64,
    next_exam: u64,
    next_result: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_student: 1,
            next_teacher: 1,
            next_director: 1,
            next_class: 1,
            next_subject: 1,
            next_exam: 1,
            next_result: 1,
        }
    }

    fn alloc_student_id(&mut self) -> StudentId {
        let id = StudentId::new(self.next_student);
        self.next_student += 1;
        id
    }

    fn alloc_teacher_id(&mut self) -> TeacherId {
        let id = TeacherId::new(self.next_teacher);
        self.next_teacher += 1;
        id
    }

    fn alloc_director_id(&mut self) -> DirectorId {
        let id = DirectorId::new(self.next_director);
        self.next_director += 1;
        id
    }

    fn alloc_class_id(&mut self) -> ClassId {
        let id = ClassId::new(self.next_class);
        self.next_class += 1;
        id
    }

    fn alloc_subject_id(&mut self) -> SubjectId {
        let id = SubjectId::new(self.next_subject);
        self.next_subject += 1;
        id
    }

    fn alloc_exam_id(&mut self) -> ExamId {
        let id = ExamId::new(self.next_exam);
        self.next_exam += 1;
        id
    }

    fn alloc_result_id(&mut self) -> ExamResultId {
        let id = ExamResultId::new(self.next_result);
        self.next_result += 1;
        id
    }
}

/// The in-memory school graph.
///
/// Owns every entity record, keyed by id. Lookup, creation, counting and raw
/// removal live here; relation wiring is the maintainer's job. Access is
/// single-writer: callers wrap the `School` in their own locking or
/// transaction boundary.
#[derive(Debug)]
pub struct School {
    students: HashMap<StudentId, Student>,
    teachers: HashMap<TeacherId, Teacher>,
    directors: HashMap<DirectorId, Director>,
    classes: HashMap<ClassId, StudentClass>,
    subjects: HashMap<SubjectId, Subject>,
    exams: HashMap<ExamId, Exam>,
    results: HashMap<ExamResultId, ExamResult>,
    id_alloc: IdAllocator,
}

impl Default for School {
    fn default() -> Self {
        Self::new()
    }
}

impl School {
    /// Create a new empty school.
    pub fn new() -> Self {
        Self {
            students: HashMap::new(),
            teachers: HashMap::new(),
            directors: HashMap::new(),
            classes: HashMap::new(),
            subjects: HashMap::new(),
            exams: HashMap::new(),
            results: HashMap::new(),
            id_alloc: IdAllocator::new(),
        }
    }

    // ==================== Students ====================

    /// Create a new student with no associations.
    pub fn create_student(&mut self, person: PersonDetails) -> StudentId {
        let id = self.id_alloc.alloc_student_id();
        self.students.insert(id, Student::new(id, person));
        id
    }

    /// Get a student by id.
    pub fn get_student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Get a student by id, failing when absent.
    pub fn student(&self, id: StudentId) -> StoreResult<&Student> {
        self.students.get(&id).ok_or(StoreError::StudentNotFound(id))
    }

    /// Get a mutable student by id, failing when absent.
    pub fn student_mut(&mut self, id: StudentId) -> StoreResult<&mut Student> {
        self.students
            .get_mut(&id)
            .ok_or(StoreError::StudentNotFound(id))
    }

    /// Iterate over all students.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    /// Number of stored students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Remove a student record. Raw removal: relation fields on other
    /// entities are not touched.
    pub fn remove_student(&mut self, id: StudentId) -> StoreResult<Student> {
        self.students
            .remove(&id)
            .ok_or(StoreError::StudentNotFound(id))
    }

    // ==================== Teachers ====================

    /// Create a new teacher with no associations.
    pub fn create_teacher(
        &mut self,
        person: PersonDetails,
        specialization: Specialization,
    ) -> TeacherId {
        let id = self.id_alloc.alloc_teacher_id();
        self.teachers
            .insert(id, Teacher::new(id, person, specialization));
        id
    }

    /// Get a teacher by id.
    pub fn get_teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.get(&id)
    }

    /// Get a teacher by id, failing when absent.
    pub fn teacher(&self, id: TeacherId) -> StoreResult<&Teacher> {
        self.teachers.get(&id).ok_or(StoreError::TeacherNotFound(id))
    }

    /// Get a mutable teacher by id, failing when absent.
    pub fn teacher_mut(&mut self, id: TeacherId) -> StoreResult<&mut Teacher> {
        self.teachers
            .get_mut(&id)
            .ok_or(StoreError::TeacherNotFound(id))
    }

    /// Iterate over all teachers.
    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> + '_ {
        self.teachers.values()
    }

    /// Number of stored teachers.
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    /// Remove a teacher record. Raw removal: relation fields on other
    /// entities are not touched.
    pub fn remove_teacher(&mut self, id: TeacherId) -> StoreResult<Teacher> {
        self.teachers
            .remove(&id)
            .ok_or(StoreError::TeacherNotFound(id))
    }

    // ==================== Directors ====================

    /// Create a new director.
    pub fn create_director(&mut self, person: PersonDetails, budget: f64) -> DirectorId {
        let id = self.id_alloc.alloc_director_id();
        self.directors.insert(id, Director::new(id, person, budget));
        id
    }

    /// Get a director by id.
    pub fn get_director(&self, id: DirectorId) -> Option<&Director> {
        self.directors.get(&id)
    }

    /// Get a director by id, failing when absent.
    pub fn director(&self, id: DirectorId) -> StoreResult<&Director> {
        self.directors
            .get(&id)
            .ok_or(StoreError::DirectorNotFound(id))
    }

    /// Get a mutable director by id, failing when absent.
    pub fn director_mut(&mut self, id: DirectorId) -> StoreResult<&mut Director> {
        self.directors
            .get_mut(&id)
            .ok_or(StoreError::DirectorNotFound(id))
    }

    /// Number of stored directors.
    pub fn director_count(&self) -> usize {
        self.directors.len()
    }

    /// Remove a director record.
    pub fn remove_director(&mut self, id: DirectorId) -> StoreResult<Director> {
        self.directors
            .remove(&id)
            .ok_or(StoreError::DirectorNotFound(id))
    }

    // ==================== Classes ====================

    /// Create a new class with no members and no teacher.
    pub fn create_class(&mut self, name: impl Into<String>) -> ClassId {
        let id = self.id_alloc.alloc_class_id();
        self.classes.insert(id, StudentClass::new(id, name));
        id
    }

    /// Get a class by id.
    pub fn get_class(&self, id: ClassId) -> Option<&StudentClass> {
        self.classes.get(&id)
    }

    /// Get a class by id, failing when absent.
    pub fn class(&self, id: ClassId) -> StoreResult<&StudentClass> {
        self.classes.get(&id).ok_or(StoreError::ClassNotFound(id))
    }

    /// Get a mutable class by id, failing when absent.
    pub fn class_mut(&mut self, id: ClassId) -> StoreResult<&mut StudentClass> {
        self.classes
            .get_mut(&id)
            .ok_or(StoreError::ClassNotFound(id))
    }

    /// Number of stored classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Remove a class record. Raw removal: relation fields on other entities
    /// are not touched.
    pub fn remove_class(&mut self, id: ClassId) -> StoreResult<StudentClass> {
        self.classes.remove(&id).ok_or(StoreError::ClassNotFound(id))
    }

    // ==================== Subjects ====================

    /// Create a new subject with no enrollments and no exams.
    pub fn create_subject(&mut self, name: impl Into<String>, weight: u64) -> SubjectId {
        let id = self.id_alloc.alloc_subject_id();
        self.subjects.insert(id, Subject::new(id, name, weight));
        id
    }

    /// Get a subject by id.
    pub fn get_subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(&id)
    }

    /// Get a subject by id, failing when absent.
    pub fn subject(&self, id: SubjectId) -> StoreResult<&Subject> {
        self.subjects.get(&id).ok_or(StoreError::SubjectNotFound(id))
    }

    /// Get a mutable subject by id, failing when absent.
    pub fn subject_mut(&mut self, id: SubjectId) -> StoreResult<&mut Subject> {
        self.subjects
            .get_mut(&id)
            .ok_or(StoreError::SubjectNotFound(id))
    }

    /// Number of stored subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Remove a subject record. Raw removal: relation fields on other
    /// entities are not touched.
    pub fn remove_subject(&mut self, id: SubjectId) -> StoreResult<Subject> {
        self.subjects
            .remove(&id)
            .ok_or(StoreError::SubjectNotFound(id))
    }

    // ==================== Exams ====================

    /// Create a new exam with no associations.
    pub fn create_exam(
        &mut self,
        name: impl Into<String>,
        max_points: u64,
        date: NaiveDate,
    ) -> ExamId {
        let id = self.id_alloc.alloc_exam_id();
        self.exams.insert(id, Exam::new(id, name, max_points, date));
        id
    }

    /// Get an exam by id.
    pub fn get_exam(&self, id: ExamId) -> Option<&Exam> {
        self.exams.get(&id)
    }

    /// Get an exam by id, failing when absent.
    pub fn exam(&self, id: ExamId) -> StoreResult<&Exam> {
        self.exams.get(&id).ok_or(StoreError::ExamNotFound(id))
    }

    /// Get a mutable exam by id, failing when absent.
    pub fn exam_mut(&mut self, id: ExamId) -> StoreResult<&mut Exam> {
        self.exams.get_mut(&id).ok_or(StoreError::ExamNotFound(id))
    }

    /// Number of stored exams.
    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }

    /// Remove an exam record, rejected while results reference it.
    /// Raw removal otherwise: relation fields on other entities are not
    /// touched.
    pub fn remove_exam(&mut self, id: ExamId) -> StoreResult<Exam> {
        let exam = self.exams.get(&id).ok_or(StoreError::ExamNotFound(id))?;
        if !exam.results.is_empty() {
            return Err(StoreError::ExamHasResults(id));
        }
        Ok(self.exams.remove(&id).unwrap())
    }

    // ==================== Exam results ====================

    /// Create a new, not yet recorded exam result.
    pub fn create_result(
        &mut self,
        name: impl Into<String>,
        score: f32,
        date: NaiveDate,
    ) -> ExamResultId {
        let id = self.id_alloc.alloc_result_id();
        self.results
            .insert(id, ExamResult::new(id, name, score, date));
        id
    }

    /// Get a result by id.
    pub fn get_result(&self, id: ExamResultId) -> Option<&ExamResult> {
        self.results.get(&id)
    }

    /// Get a result by id, failing when absent.
    pub fn result(&self, id: ExamResultId) -> StoreResult<&ExamResult> {
        self.results
            .get(&id)
            .ok_or(StoreError::ExamResultNotFound(id))
    }

    /// Get a mutable result by id, failing when absent.
    pub fn result_mut(&mut self, id: ExamResultId) -> StoreResult<&mut ExamResult> {
        self.results
            .get_mut(&id)
            .ok_or(StoreError::ExamResultNotFound(id))
    }

    /// Number of stored results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Remove a result record. Raw removal: the owning exam's result list is
    /// not touched.
    pub fn remove_result(&mut self, id: ExamResultId) -> StoreResult<ExamResult> {
        self.results
            .remove(&id)
            .ok_or(StoreError::ExamResultNotFound(id))
    }

    // ==================== Teacher queries ====================

    /// All teachers ordered by specialization, then by whole years of
    /// experience as of `on`.
    pub fn teachers_sorted(&self, on: NaiveDate) -> Vec<&Teacher> {
        let mut all: Vec<&Teacher> = self.teachers.values().collect();
        all.sort_by_key(|t| (t.specialization, t.years_of_experience_at(on), t.id));
        all
    }

    /// Teachers grouped by specialization. Groups are ordered by id.
    pub fn teachers_by_specialization(&self) -> BTreeMap<Specialization, Vec<&Teacher>> {
        let mut groups: BTreeMap<Specialization, Vec<&Teacher>> = BTreeMap::new();
        for teacher in self.teachers.values() {
            groups.entry(teacher.specialization).or_default().push(teacher);
        }
        for group in groups.values_mut() {
            group.sort_by_key(|t| t.id);
        }
        groups
    }

    /// Teachers grouped by whole years of experience as of `on`. Groups are
    /// ordered by id.
    pub fn teachers_by_experience(&self, on: NaiveDate) -> BTreeMap<u64, Vec<&Teacher>> {
        let mut groups: BTreeMap<u64, Vec<&Teacher>> = BTreeMap::new();
        for teacher in self.teachers.values() {
            groups
                .entry(teacher.years_of_experience_at(on))
                .or_default()
                .push(teacher);
        }
        for group in groups.values_mut() {
            group.sort_by_key(|t| t.id);
        }
        groups
    }

    /// First teacher matching the given first and last name, if any.
    pub fn find_teacher_by_name(&self, first_name: &str, last_name: &str) -> Option<&Teacher> {
        self.teachers
            .values()
            .find(|t| t.person.first_name == first_name && t.person.last_name == last_name)
    }
}
