//! Maintainer facade - coordinates association operations.
//!
//! The facade delegates to the specialized operation modules in `ops/`:
//! - `ops/enroll.rs` - class and subject membership
//! - `ops/assign.rs` - homeroom teacher assignment, class president
//! - `ops/exam.rs` - exam wiring, results, date moves
//! - `ops/retire.rs` - relation-aware deletion

use campus_core::{ClassId, ExamId, ExamResultId, StudentId, SubjectId, TeacherId};
use campus_graph::{Exam, ExamResult, School, Student, Teacher};
use chrono::NaiveDate;

use crate::error::MaintainResult;
use crate::ops;

/// Association maintainer over a school graph.
///
/// Holds exclusive access to the school for the duration of a batch of
/// related mutations; the caller's locking or transaction boundary scopes
/// the borrow.
pub struct Maintainer<'s> {
    school: &'s mut School,
}

impl<'s> Maintainer<'s> {
    /// Create a maintainer over the given school.
    pub fn new(school: &'s mut School) -> Self {
        Self { school }
    }

    /// Enroll a student in a class, detaching from any prior class.
    pub fn enroll_student_in_class(
        &mut self,
        student: StudentId,
        class: ClassId,
    ) -> MaintainResult<()> {
        ops::enroll_student_in_class(self.school, student, class)
    }

    /// Remove a student from a class roster.
    pub fn remove_student_from_class(
        &mut self,
        student: StudentId,
        class: ClassId,
    ) -> MaintainResult<()> {
        ops::remove_student_from_class(self.school, student, class)
    }

    /// Enroll a student in a subject.
    pub fn enroll_student_in_subject(
        &mut self,
        student: StudentId,
        subject: SubjectId,
    ) -> MaintainResult<()> {
        ops::enroll_student_in_subject(self.school, student, subject)
    }

    /// Withdraw a student from a subject.
    pub fn withdraw_student_from_subject(
        &mut self,
        student: StudentId,
        subject: SubjectId,
    ) -> MaintainResult<()> {
        ops::withdraw_student_from_subject(self.school, student, subject)
    }

    /// Assign a homeroom teacher to a class (one-to-one).
    pub fn assign_teacher_to_class(
        &mut self,
        teacher: TeacherId,
        class: ClassId,
        reassign: bool,
    ) -> MaintainResult<()> {
        ops::assign_teacher_to_class(self.school, teacher, class, reassign)
    }

    /// Set the class president to a roster member's display name.
    pub fn set_class_president(
        &mut self,
        class: ClassId,
        student: StudentId,
    ) -> MaintainResult<()> {
        ops::set_class_president(self.school, class, student)
    }

    /// Give an exam to every student on a class roster.
    pub fn add_exam_for_class(
        &mut self,
        teacher: TeacherId,
        class: ClassId,
        exam: ExamId,
        subject: SubjectId,
    ) -> MaintainResult<()> {
        ops::add_exam_for_class(self.school, teacher, class, exam, subject)
    }

    /// Give a correction exam to a single student.
    pub fn add_correction_exam(
        &mut self,
        teacher: TeacherId,
        student: StudentId,
        exam: ExamId,
    ) -> MaintainResult<()> {
        ops::add_correction_exam(self.school, teacher, student, exam)
    }

    /// Link an exam to a subject.
    pub fn link_exam_to_subject(
        &mut self,
        exam: ExamId,
        subject: SubjectId,
    ) -> MaintainResult<()> {
        ops::link_exam_to_subject(self.school, exam, subject)
    }

    /// Record a result against an exam.
    pub fn record_exam_result(
        &mut self,
        exam: ExamId,
        result: ExamResultId,
    ) -> MaintainResult<()> {
        ops::record_exam_result(self.school, exam, result)
    }

    /// Move the exam at `index` in the teacher's exam list to a new date.
    pub fn move_exam(
        &mut self,
        teacher: TeacherId,
        index: usize,
        new_date: NaiveDate,
    ) -> MaintainResult<ExamId> {
        ops::move_exam(self.school, teacher, index, new_date)
    }

    /// Delete an exam result, detaching it from its exam first.
    pub fn delete_result(&mut self, result: ExamResultId) -> MaintainResult<ExamResult> {
        ops::delete_result(self.school, result)
    }

    /// Delete an exam, rejected while results reference it.
    pub fn delete_exam(&mut self, exam: ExamId) -> MaintainResult<Exam> {
        ops::delete_exam(self.school, exam)
    }

    /// Delete a student, detaching every membership first.
    pub fn delete_student(&mut self, student: StudentId) -> MaintainResult<Student> {
        ops::delete_student(self.school, student)
    }

    /// Delete a teacher, clearing class and exam links first.
    pub fn delete_teacher(&mut self, teacher: TeacherId) -> MaintainResult<Teacher> {
        ops::delete_teacher(self.school, teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, MaintainError};
    use campus_core::{Gender, PersonDetails, StoreError};
    use campus_graph::Specialization;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(first: &str, last: &str) -> PersonDetails {
        PersonDetails::new(first, last, Gender::Male, date(1992, 11, 3))
    }

    /// School with one class, one teacher and three enrolled students.
    fn rookies() -> (School, TeacherId, ClassId, Vec<StudentId>) {
        let mut school = School::new();
        let class = school.create_class("Rookies");
        let teacher = school.create_teacher(person("Walter", "White"), Specialization::Mathematics);
        let students = vec![
            school.create_student(person("Adrian", "Romanski")),
            school.create_student(person("Monika", "Zdrowa")),
            school.create_student(person("Filip", "Konieczny")),
        ];

        let mut m = Maintainer::new(&mut school);
        m.assign_teacher_to_class(teacher, class, false).unwrap();
        for student in &students {
            m.enroll_student_in_class(*student, class).unwrap();
        }
        (school, teacher, class, students)
    }

    #[test]
    fn test_enroll_mirrors_both_sides() {
        let (school, _, class, students) = rookies();

        for student in &students {
            assert_eq!(school.student(*student).unwrap().class, Some(class));
            assert!(school.class(class).unwrap().students.contains(student));
        }
        assert_eq!(school.class(class).unwrap().students.len(), 3);
    }

    #[test]
    fn test_reenroll_is_invalid_state() {
        let (mut school, _, class, students) = rookies();
        let err = Maintainer::new(&mut school)
            .enroll_student_in_class(students[0], class)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(school.class(class).unwrap().students.len(), 3);
    }

    #[test]
    fn test_enroll_detaches_prior_class() {
        let (mut school, _, class, students) = rookies();
        let other = school.create_class("Veterans");

        Maintainer::new(&mut school)
            .enroll_student_in_class(students[0], other)
            .unwrap();

        assert!(!school.class(class).unwrap().students.contains(&students[0]));
        assert_eq!(school.class(other).unwrap().students, vec![students[0]]);
        assert_eq!(school.student(students[0]).unwrap().class, Some(other));
    }

    #[test]
    fn test_remove_student_not_enrolled() {
        let (mut school, _, class, _) = rookies();
        let outsider = school.create_student(person("Piotrek", "Obcy"));

        let err = Maintainer::new(&mut school)
            .remove_student_from_class(outsider, class)
            .unwrap_err();
        assert_eq!(
            err,
            MaintainError::NotEnrolled {
                student: outsider,
                class
            }
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_student_clears_both_sides() {
        let (mut school, _, class, students) = rookies();

        Maintainer::new(&mut school)
            .remove_student_from_class(students[1], class)
            .unwrap();

        assert!(school.student(students[1]).unwrap().class.is_none());
        assert!(!school.class(class).unwrap().students.contains(&students[1]));
    }

    #[test]
    fn test_subject_enrollment_mirrors_and_rejects_duplicates() {
        let (mut school, _, _, students) = rookies();
        let math = school.create_subject("Mathematics", 10);

        let mut m = Maintainer::new(&mut school);
        m.enroll_student_in_subject(students[0], math).unwrap();
        let err = m.enroll_student_in_subject(students[0], math).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        assert_eq!(school.subject(math).unwrap().students, vec![students[0]]);
        assert_eq!(school.student(students[0]).unwrap().subjects, vec![math]);

        Maintainer::new(&mut school)
            .withdraw_student_from_subject(students[0], math)
            .unwrap();
        assert!(school.subject(math).unwrap().students.is_empty());
        assert!(school.student(students[0]).unwrap().subjects.is_empty());
    }

    #[test]
    fn test_second_teacher_conflicts_without_reassign() {
        let (mut school, teacher, class, _) = rookies();
        let other = school.create_teacher(person("Gale", "Boetticher"), Specialization::Biology);

        let err = Maintainer::new(&mut school)
            .assign_teacher_to_class(other, class, false)
            .unwrap_err();
        assert_eq!(err, MaintainError::ClassHasTeacher { class, teacher });
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(school.class(class).unwrap().teacher, Some(teacher));
    }

    #[test]
    fn test_reassign_clears_displaced_links() {
        let (mut school, teacher, class, _) = rookies();
        let other = school.create_teacher(person("Gale", "Boetticher"), Specialization::Biology);

        Maintainer::new(&mut school)
            .assign_teacher_to_class(other, class, true)
            .unwrap();

        assert_eq!(school.class(class).unwrap().teacher, Some(other));
        assert_eq!(school.teacher(other).unwrap().class, Some(class));
        assert!(school.teacher(teacher).unwrap().class.is_none());
    }

    #[test]
    fn test_reassign_same_pair_is_noop() {
        let (mut school, teacher, class, _) = rookies();

        Maintainer::new(&mut school)
            .assign_teacher_to_class(teacher, class, false)
            .unwrap();
        assert_eq!(school.class(class).unwrap().teacher, Some(teacher));
    }

    #[test]
    fn test_teacher_owning_other_class_conflicts() {
        let (mut school, teacher, class, _) = rookies();
        let other_class = school.create_class("Veterans");

        let err = Maintainer::new(&mut school)
            .assign_teacher_to_class(teacher, other_class, false)
            .unwrap_err();
        assert_eq!(err, MaintainError::TeacherHasClass { teacher, class });

        Maintainer::new(&mut school)
            .assign_teacher_to_class(teacher, other_class, true)
            .unwrap();
        assert!(school.class(class).unwrap().teacher.is_none());
        assert_eq!(school.class(other_class).unwrap().teacher, Some(teacher));
    }

    #[test]
    fn test_add_exam_for_class_wires_all_students() {
        let (mut school, teacher, class, students) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));

        Maintainer::new(&mut school)
            .add_exam_for_class(teacher, class, exam, math)
            .unwrap();

        let record = school.exam(exam).unwrap();
        assert_eq!(record.students.len(), 3);
        assert_eq!(record.teacher, Some(teacher));
        assert_eq!(record.subject, Some(math));
        for student in &students {
            assert_eq!(school.student(*student).unwrap().exams, vec![exam]);
        }
        assert_eq!(school.teacher(teacher).unwrap().exams, vec![exam]);
        assert_eq!(school.subject(math).unwrap().exams, vec![exam]);
    }

    #[test]
    fn test_add_exam_for_empty_class() {
        let mut school = School::new();
        let class = school.create_class("Empty");
        let teacher = school.create_teacher(person("Walter", "White"), Specialization::Mathematics);
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("Ghost exam", 40, date(2026, 9, 7));

        Maintainer::new(&mut school)
            .add_exam_for_class(teacher, class, exam, math)
            .unwrap();

        assert!(school.exam(exam).unwrap().students.is_empty());
        assert_eq!(school.exam(exam).unwrap().teacher, Some(teacher));
    }

    #[test]
    fn test_add_exam_rejects_wired_exam() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        let err = m.add_exam_for_class(teacher, class, exam, math).unwrap_err();
        assert_eq!(err, MaintainError::ExamAlreadyWired(exam));
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_add_exam_keeps_existing_subject() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let biology = school.create_subject("Biology", 8);
        let exam = school.create_exam("Second biology exam", 60, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.link_exam_to_subject(exam, biology).unwrap();
        m.add_exam_for_class(teacher, class, exam, math).unwrap();

        assert_eq!(school.exam(exam).unwrap().subject, Some(biology));
        assert!(school.subject(math).unwrap().exams.is_empty());
        assert_eq!(school.subject(biology).unwrap().exams, vec![exam]);
    }

    #[test]
    fn test_correction_exam_for_single_student() {
        let (mut school, teacher, _, students) = rookies();
        let exam = school.create_exam("Correction", 80, date(2026, 9, 14));

        Maintainer::new(&mut school)
            .add_correction_exam(teacher, students[2], exam)
            .unwrap();

        assert_eq!(school.exam(exam).unwrap().students, vec![students[2]]);
        assert_eq!(school.student(students[2]).unwrap().exams, vec![exam]);
        assert_eq!(school.teacher(teacher).unwrap().exams, vec![exam]);
    }

    #[test]
    fn test_correction_exam_dangling_student() {
        let (mut school, teacher, _, _) = rookies();
        let exam = school.create_exam("Correction", 80, date(2026, 9, 14));
        let ghost = StudentId::new(99);

        let err = Maintainer::new(&mut school)
            .add_correction_exam(teacher, ghost, exam)
            .unwrap_err();
        assert_eq!(err, MaintainError::Store(StoreError::StudentNotFound(ghost)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(school.teacher(teacher).unwrap().exams.is_empty());
    }

    #[test]
    fn test_record_result_once() {
        let mut school = School::new();
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));
        let result = school.create_result("Filip Konieczny", 60.0, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.record_exam_result(exam, result).unwrap();
        let err = m.record_exam_result(exam, result).unwrap_err();
        assert_eq!(err, MaintainError::AlreadyRecorded { result, exam });

        assert_eq!(school.exam(exam).unwrap().results, vec![result]);
        assert_eq!(school.result(result).unwrap().exam, Some(exam));
    }

    #[test]
    fn test_move_exam_out_of_range() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let original_date = date(2026, 9, 7);
        let exam = school.create_exam("First math exam", 80, original_date);

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();

        let err = m.move_exam(teacher, 1, date(2026, 9, 21)).unwrap_err();
        assert_eq!(
            err,
            MaintainError::ExamIndexOutOfRange {
                teacher,
                index: 1,
                len: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(school.exam(exam).unwrap().date, original_date);
    }

    #[test]
    fn test_move_exam_rewrites_date() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        let moved = m.move_exam(teacher, 0, date(2026, 9, 21)).unwrap();

        assert_eq!(moved, exam);
        assert_eq!(school.exam(exam).unwrap().date, date(2026, 9, 21));
    }

    #[test]
    fn test_president_must_be_roster_member() {
        let (mut school, _, class, students) = rookies();
        let outsider = school.create_student(person("Piotrek", "Obcy"));

        let mut m = Maintainer::new(&mut school);
        let err = m.set_class_president(class, outsider).unwrap_err();
        assert_eq!(
            err,
            MaintainError::NotClassMember {
                student: outsider,
                class
            }
        );

        m.set_class_president(class, students[0]).unwrap();
        assert_eq!(
            school.class(class).unwrap().president.as_deref(),
            Some("Adrian Romanski")
        );
    }

    #[test]
    fn test_delete_exam_rejected_with_results() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));
        let result = school.create_result("Adrian Romanski", 45.0, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        m.record_exam_result(exam, result).unwrap();

        let err = m.delete_exam(exam).unwrap_err();
        assert_eq!(err, MaintainError::Store(StoreError::ExamHasResults(exam)));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        // Nothing detached on the failed path.
        assert_eq!(school.teacher(teacher).unwrap().exams, vec![exam]);
        assert_eq!(school.exam(exam).unwrap().students.len(), 3);
    }

    #[test]
    fn test_delete_results_then_exam() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));
        let first = school.create_result("Adrian Romanski", 45.0, date(2026, 9, 7));
        let second = school.create_result("Filip Konieczny", 60.0, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        m.record_exam_result(exam, first).unwrap();
        m.record_exam_result(exam, second).unwrap();

        let removed = m.delete_result(first).unwrap();
        assert_eq!(removed.exam, Some(exam));
        assert_eq!(m.delete_exam(exam).unwrap_err().kind(), ErrorKind::Conflict);

        m.delete_result(second).unwrap();
        m.delete_exam(exam).unwrap();

        assert_eq!(school.exam_count(), 0);
        assert_eq!(school.result_count(), 0);
        assert!(school.teacher(teacher).unwrap().exams.is_empty());
    }

    #[test]
    fn test_delete_exam_detaches_everything() {
        let (mut school, teacher, class, students) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        m.delete_exam(exam).unwrap();

        assert_eq!(school.exam_count(), 0);
        assert!(school.teacher(teacher).unwrap().exams.is_empty());
        assert!(school.subject(math).unwrap().exams.is_empty());
        for student in &students {
            assert!(school.student(*student).unwrap().exams.is_empty());
        }
    }

    #[test]
    fn test_delete_student_detaches_memberships() {
        let (mut school, teacher, class, students) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.enroll_student_in_subject(students[0], math).unwrap();
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        m.delete_student(students[0]).unwrap();

        assert_eq!(school.student_count(), 2);
        assert!(!school.class(class).unwrap().students.contains(&students[0]));
        assert!(school.subject(math).unwrap().students.is_empty());
        assert_eq!(school.exam(exam).unwrap().students.len(), 2);
    }

    #[test]
    fn test_delete_teacher_clears_links() {
        let (mut school, teacher, class, _) = rookies();
        let math = school.create_subject("Mathematics", 10);
        let exam = school.create_exam("First math exam", 80, date(2026, 9, 7));

        let mut m = Maintainer::new(&mut school);
        m.add_exam_for_class(teacher, class, exam, math).unwrap();
        m.delete_teacher(teacher).unwrap();

        assert_eq!(school.teacher_count(), 0);
        assert!(school.class(class).unwrap().teacher.is_none());
        assert!(school.exam(exam).unwrap().teacher.is_none());
    }
}
