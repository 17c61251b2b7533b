//! Relation-aware deletion.
//!
//! The `School` removers drop a record without touching anything else; the
//! operations here detach every link first so no dangling reference remains.

use campus_core::{ExamId, ExamResultId, StoreError, StudentId, TeacherId};
use campus_graph::{Exam, ExamResult, School, Student, Teacher};

use crate::error::MaintainResult;

/// Delete an exam result, detaching it from its exam first.
///
/// This is the recovery path for a rejected exam deletion: once every
/// result is gone the exam itself can be deleted.
pub fn delete_result(school: &mut School, result: ExamResultId) -> MaintainResult<ExamResult> {
    let exam = school.result(result)?.exam;

    if let Some(exam) = exam {
        school.exam_mut(exam)?.results.retain(|r| *r != result);
    }

    Ok(school.remove_result(result)?)
}

/// Delete an exam, detaching it from its teacher, subject and roster.
///
/// Rejected while results are recorded against the exam; the caller removes
/// the results first.
pub fn delete_exam(school: &mut School, exam: ExamId) -> MaintainResult<Exam> {
    let record = school.exam(exam)?;
    if !record.results.is_empty() {
        return Err(StoreError::ExamHasResults(exam).into());
    }
    let teacher = record.teacher;
    let subject = record.subject;
    let roster = record.students.clone();

    if let Some(teacher) = teacher {
        school.teacher_mut(teacher)?.exams.retain(|e| *e != exam);
    }
    if let Some(subject) = subject {
        school.subject_mut(subject)?.exams.retain(|e| *e != exam);
    }
    for student in roster {
        school.student_mut(student)?.exams.retain(|e| *e != exam);
    }

    Ok(school.remove_exam(exam)?)
}

/// Delete a student, detaching them from class, subjects and exam rosters.
///
/// Recorded results are untouched: they reference the exam, not the student.
pub fn delete_student(school: &mut School, student: StudentId) -> MaintainResult<Student> {
    let record = school.student(student)?;
    let class = record.class;
    let subjects = record.subjects.clone();
    let exams = record.exams.clone();

    if let Some(class) = class {
        school.class_mut(class)?.students.retain(|s| *s != student);
    }
    for subject in subjects {
        school.subject_mut(subject)?.students.retain(|s| *s != student);
    }
    for exam in exams {
        school.exam_mut(exam)?.students.retain(|s| *s != student);
    }

    Ok(school.remove_student(student)?)
}

/// Delete a teacher, clearing the owned class's teacher link and the teacher
/// reference on every owned exam. The exams themselves remain.
pub fn delete_teacher(school: &mut School, teacher: TeacherId) -> MaintainResult<Teacher> {
    let record = school.teacher(teacher)?;
    let class = record.class;
    let exams = record.exams.clone();

    if let Some(class) = class {
        school.class_mut(class)?.teacher = None;
    }
    for exam in exams {
        school.exam_mut(exam)?.teacher = None;
    }

    Ok(school.remove_teacher(teacher)?)
}
