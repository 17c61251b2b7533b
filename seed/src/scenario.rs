//! The canonical "Rookies" scenario.

use campus_core::{
    ClassId, ExamId, ExamResultId, Gender, PersonDetails, StudentId, SubjectId, TeacherId,
};
use campus_graph::{School, Specialization};
use campus_mutation::{MaintainResult, Maintainer};
use chrono::{Local, NaiveDate};
use tracing::info;

/// Ids of everything the scenario creates, for assertions and demos.
#[derive(Debug, Clone, Copy)]
pub struct SeedIds {
    pub class: ClassId,
    pub teacher: TeacherId,
    pub adrian: StudentId,
    pub monika: StudentId,
    pub filip: StudentId,
    pub math: SubjectId,
    pub biology: SubjectId,
    pub math_exam: ExamId,
    pub biology_exam: ExamId,
    pub filip_result: ExamResultId,
    pub adrian_result: ExamResultId,
    pub monika_result: ExamResultId,
}

/// A freshly built school graph plus the ids of its entities.
#[derive(Debug)]
pub struct Seeded {
    pub school: School,
    pub ids: SeedIds,
}

fn birthday(y: i32, m: u32, d: u32) -> NaiveDate {
    // The scenario dates are all valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid scenario date")
}

/// Build the canonical example graph against a fresh school.
///
/// Class "Rookies" with teacher Walter White; students Adrian, Monika and
/// Filip; subjects Mathematics (weight 10, all three students) and Biology
/// (weight 8, Adrian only); a math exam for the whole class with three
/// results, and a biology exam that was never handed to the teacher.
///
/// Running the builder twice yields two disjoint, structurally identical
/// graphs; there is no deduplication.
pub fn build_school() -> MaintainResult<Seeded> {
    let today = Local::now().date_naive();
    let mut school = School::new();

    let class = school.create_class("Rookies");

    let math = school.create_subject("Mathematics", 10);
    let biology = school.create_subject("Biology", 8);

    let adrian = school.create_student(PersonDetails::new(
        "Adrian",
        "Romanski",
        Gender::Male,
        birthday(1992, 11, 3),
    ));
    let monika = school.create_student(PersonDetails::new(
        "Monika",
        "Zdrowa",
        Gender::Female,
        birthday(1994, 11, 3),
    ));
    let filip = school.create_student(PersonDetails::new(
        "Filip",
        "Konieczny",
        Gender::Male,
        birthday(1993, 11, 3),
    ));

    let teacher = school.create_teacher(
        PersonDetails::new("Walter", "White", Gender::Male, birthday(1971, 9, 7)),
        Specialization::Mathematics,
    );

    let math_exam = school.create_exam("First math exam", 80, today);
    let biology_exam = school.create_exam("Second biology exam", 60, today);

    let filip_name = school.student(filip)?.full_name();
    let adrian_name = school.student(adrian)?.full_name();
    let monika_name = school.student(monika)?.full_name();
    let filip_result = school.create_result(filip_name, 60.0, today);
    let adrian_result = school.create_result(adrian_name, 45.0, today);
    let monika_result = school.create_result(monika_name, 55.0, today);

    let mut m = Maintainer::new(&mut school);

    m.assign_teacher_to_class(teacher, class, false)?;
    m.enroll_student_in_class(adrian, class)?;
    m.enroll_student_in_class(monika, class)?;
    m.enroll_student_in_class(filip, class)?;

    m.enroll_student_in_subject(adrian, math)?;
    m.enroll_student_in_subject(adrian, biology)?;
    m.enroll_student_in_subject(filip, math)?;
    m.enroll_student_in_subject(monika, math)?;

    // The math exam goes to the whole class: roster, teacher and subject all
    // wired in one step.
    m.add_exam_for_class(teacher, class, math_exam, math)?;
    m.record_exam_result(math_exam, filip_result)?;
    m.record_exam_result(math_exam, adrian_result)?;
    m.record_exam_result(math_exam, monika_result)?;

    m.link_exam_to_subject(biology_exam, biology)?;

    // The biology exam wiring is deliberately one-sided: all three students
    // sit on its roster, only Adrian tracks it back, and no teacher owns it.
    // The acceptance scenario pins this exact shape.
    school.exam_mut(biology_exam)?.students = vec![adrian, monika, filip];
    school.student_mut(adrian)?.exams.push(biology_exam);

    info!("Saved: {} students", school.student_count());
    info!("Saved: {} subjects", school.subject_count());
    info!("Saved: {} exams", school.exam_count());
    info!("Saved: {} exam results", school.result_count());
    info!("Saved: {} teachers", school.teacher_count());
    info!("Saved: {} classes", school.class_count());

    Ok(Seeded {
        school,
        ids: SeedIds {
            class,
            teacher,
            adrian,
            monika,
            filip,
            math,
            biology,
            math_exam,
            biology_exam,
            filip_result,
            adrian_result,
            monika_result,
        },
    })
}
