//! Enrollment operations - class and subject membership.

use campus_core::{ClassId, StudentId, SubjectId};
use campus_graph::School;

use crate::error::{MaintainError, MaintainResult};

/// Enroll a student in a class.
///
/// Appends the student to the class roster and sets the student's class
/// reference, detaching the student from any prior class first. Fails when
/// the roster already holds the student.
pub fn enroll_student_in_class(
    school: &mut School,
    student: StudentId,
    class: ClassId,
) -> MaintainResult<()> {
    let prior = school.student(student)?.class;
    if school.class(class)?.students.contains(&student) {
        return Err(MaintainError::AlreadyEnrolled { student, class });
    }

    if let Some(prior) = prior {
        school.class_mut(prior)?.students.retain(|s| *s != student);
    }

    school.class_mut(class)?.students.push(student);
    school.student_mut(student)?.class = Some(class);
    Ok(())
}

/// Remove a student from a class.
///
/// Fails when the student is not on the roster; otherwise removes the roster
/// entry and clears the student's class reference.
pub fn remove_student_from_class(
    school: &mut School,
    student: StudentId,
    class: ClassId,
) -> MaintainResult<()> {
    school.student(student)?;
    if !school.class(class)?.students.contains(&student) {
        return Err(MaintainError::NotEnrolled { student, class });
    }

    school.class_mut(class)?.students.retain(|s| *s != student);
    school.student_mut(student)?.class = None;
    Ok(())
}

/// Enroll a student in a subject, mirrored on both sides.
pub fn enroll_student_in_subject(
    school: &mut School,
    student: StudentId,
    subject: SubjectId,
) -> MaintainResult<()> {
    school.student(student)?;
    if school.subject(subject)?.students.contains(&student) {
        return Err(MaintainError::AlreadyTakingSubject { student, subject });
    }

    school.subject_mut(subject)?.students.push(student);
    school.student_mut(student)?.subjects.push(subject);
    Ok(())
}

/// Withdraw a student from a subject, mirrored on both sides.
pub fn withdraw_student_from_subject(
    school: &mut School,
    student: StudentId,
    subject: SubjectId,
) -> MaintainResult<()> {
    school.student(student)?;
    if !school.subject(subject)?.students.contains(&student) {
        return Err(MaintainError::NotTakingSubject { student, subject });
    }

    school.subject_mut(subject)?.students.retain(|s| *s != student);
    school
        .student_mut(student)?
        .subjects
        .retain(|s| *s != subject);
    Ok(())
}
