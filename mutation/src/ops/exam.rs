//! Exam wiring operations.

use campus_core::{ClassId, ExamId, ExamResultId, StudentId, SubjectId, TeacherId};
use campus_graph::School;
use chrono::NaiveDate;

use crate::error::{MaintainError, MaintainResult};

/// Give an exam to every student currently on a class roster.
///
/// For each roster member the exam is added to the student's exam list and
/// the student to the exam roster. The exam is wired to the teacher, and to
/// the subject when no subject is set yet. A class with zero students yields
/// an exam with an empty roster. The exam must be fresh (no teacher, no
/// roster).
pub fn add_exam_for_class(
    school: &mut School,
    teacher: TeacherId,
    class: ClassId,
    exam: ExamId,
    subject: SubjectId,
) -> MaintainResult<()> {
    school.teacher(teacher)?;
    school.subject(subject)?;
    let roster = school.class(class)?.students.clone();
    if !school.exam(exam)?.is_fresh() {
        return Err(MaintainError::ExamAlreadyWired(exam));
    }
    for student in &roster {
        school.student(*student)?;
    }

    for student in &roster {
        school.student_mut(*student)?.exams.push(exam);
    }
    let needs_subject = {
        let record = school.exam_mut(exam)?;
        record.students = roster;
        record.teacher = Some(teacher);
        let needs = record.subject.is_none();
        if needs {
            record.subject = Some(subject);
        }
        needs
    };
    if needs_subject {
        school.subject_mut(subject)?.exams.push(exam);
    }
    school.teacher_mut(teacher)?.exams.push(exam);
    Ok(())
}

/// Give a correction exam to a single student, independent of class
/// membership. The exam is wired to the student and the teacher.
pub fn add_correction_exam(
    school: &mut School,
    teacher: TeacherId,
    student: StudentId,
    exam: ExamId,
) -> MaintainResult<()> {
    school.teacher(teacher)?;
    school.student(student)?;
    if !school.exam(exam)?.is_fresh() {
        return Err(MaintainError::ExamAlreadyWired(exam));
    }

    school.student_mut(student)?.exams.push(exam);
    {
        let record = school.exam_mut(exam)?;
        record.students.push(student);
        record.teacher = Some(teacher);
    }
    school.teacher_mut(teacher)?.exams.push(exam);
    Ok(())
}

/// Link an exam to a subject, mirrored on the subject's exam list.
///
/// Linking to the already-linked subject is a no-op; linking an exam that
/// belongs to a different subject fails.
pub fn link_exam_to_subject(
    school: &mut School,
    exam: ExamId,
    subject: SubjectId,
) -> MaintainResult<()> {
    school.subject(subject)?;
    match school.exam(exam)?.subject {
        Some(current) if current == subject => Ok(()),
        Some(current) => Err(MaintainError::ExamHasSubject {
            exam,
            subject: current,
        }),
        None => {
            school.exam_mut(exam)?.subject = Some(subject);
            school.subject_mut(subject)?.exams.push(exam);
            Ok(())
        }
    }
}

/// Record a result against an exam.
///
/// Appends the result to the exam's result list and sets the result's exam
/// reference. A result can be recorded once.
pub fn record_exam_result(
    school: &mut School,
    exam: ExamId,
    result: ExamResultId,
) -> MaintainResult<()> {
    school.exam(exam)?;
    if let Some(recorded) = school.result(result)?.exam {
        return Err(MaintainError::AlreadyRecorded {
            result,
            exam: recorded,
        });
    }

    school.result_mut(result)?.exam = Some(exam);
    school.exam_mut(exam)?.results.push(result);
    Ok(())
}

/// Move the exam at `index` in the teacher's exam list to a new date.
///
/// Fails when the index is beyond the list; no exam date changes then.
pub fn move_exam(
    school: &mut School,
    teacher: TeacherId,
    index: usize,
    new_date: NaiveDate,
) -> MaintainResult<ExamId> {
    let exams = &school.teacher(teacher)?.exams;
    let exam = *exams
        .get(index)
        .ok_or(MaintainError::ExamIndexOutOfRange {
            teacher,
            index,
            len: exams.len(),
        })?;

    school.exam_mut(exam)?.date = new_date;
    Ok(exam)
}
