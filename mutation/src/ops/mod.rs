//! Maintainer operation implementations.
//!
//! Each operation family lives in its own module. All operations take the
//! school plus entity ids, resolve the ids themselves, and mirror both sides
//! of every touched link.

mod assign;
mod enroll;
mod exam;
mod retire;

pub use assign::{assign_teacher_to_class, set_class_president};
pub use enroll::{
    enroll_student_in_class, enroll_student_in_subject, remove_student_from_class,
    withdraw_student_from_subject,
};
pub use exam::{
    add_correction_exam, add_exam_for_class, link_exam_to_subject, move_exam, record_exam_result,
};
pub use retire::{delete_exam, delete_result, delete_student, delete_teacher};
