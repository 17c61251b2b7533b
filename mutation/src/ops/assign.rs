//! Teacher assignment and class president operations.

use campus_core::{ClassId, StudentId, TeacherId};
use campus_graph::School;

use crate::error::{MaintainError, MaintainResult};

/// Assign a teacher to a class as homeroom teacher (one-to-one).
///
/// When the class already has a different teacher, or the teacher already
/// owns a different class, the assignment fails unless `reassign` is set, in
/// which case the displaced links are cleared on both replaced entities
/// first. Re-assigning the identical pair is a no-op.
pub fn assign_teacher_to_class(
    school: &mut School,
    teacher: TeacherId,
    class: ClassId,
    reassign: bool,
) -> MaintainResult<()> {
    let owned_class = school.teacher(teacher)?.class;
    let current_teacher = school.class(class)?.teacher;

    if current_teacher == Some(teacher) && owned_class == Some(class) {
        return Ok(());
    }

    if let Some(current) = current_teacher {
        if !reassign {
            return Err(MaintainError::ClassHasTeacher {
                class,
                teacher: current,
            });
        }
    }
    if let Some(owned) = owned_class {
        if !reassign {
            return Err(MaintainError::TeacherHasClass {
                teacher,
                class: owned,
            });
        }
    }

    // Clear the displaced links before rewiring.
    if let Some(current) = current_teacher {
        school.teacher_mut(current)?.class = None;
    }
    if let Some(owned) = owned_class {
        school.class_mut(owned)?.teacher = None;
    }

    school.class_mut(class)?.teacher = Some(teacher);
    school.teacher_mut(teacher)?.class = Some(class);
    Ok(())
}

/// Set the class president to the given student's display name.
///
/// Fails when the student is not a member of the class roster.
pub fn set_class_president(
    school: &mut School,
    class: ClassId,
    student: StudentId,
) -> MaintainResult<()> {
    let name = school.student(student)?.full_name();
    if !school.class(class)?.students.contains(&student) {
        return Err(MaintainError::NotClassMember { student, class });
    }

    school.class_mut(class)?.president = Some(name);
    Ok(())
}
