//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::app::CourseService;
use crate::domain::entities::{Course, CourseId, Subject, SubjectId};
use crate::domain::ports::{CourseRepository, SubjectRepository};

/// Sample catalog: four courses and their subject titles
pub const SEED_CATALOG: &[(&str, &[&str])] = &[
    (
        "DBDA",
        &[
            "Data Structures",
            "Database Systems",
            "Machine Learning",
            "Web Technologies",
            "Cloud Computing",
        ],
    ),
    (
        "Embedded",
        &["Microcontrollers", "RTOS", "Embedded C", "IoT Systems"],
    ),
    (
        "DAC",
        &["Java Programming", "Spring Boot", "Hibernate", "REST APIs"],
    ),
    (
        "Electronics",
        &[
            "Analog Circuits",
            "Digital Electronics",
            "VLSI Design",
            "Signal Processing",
        ],
    ),
];

/// Create the sample catalog through the service
pub async fn seed_catalog<CR, SR>(service: &CourseService<CR, SR>) -> Vec<Course>
where
    CR: CourseRepository,
    SR: SubjectRepository,
{
    let mut courses = Vec::with_capacity(SEED_CATALOG.len());
    for (name, titles) in SEED_CATALOG {
        let course = service
            .create_course(Some(name), titles.iter().map(|t| t.to_string()).collect())
            .await
            .unwrap();
        courses.push(course);
    }
    courses
}

/// Create a test subject owned by a course
pub fn test_subject(id: i32, title: &str, course_id: i32) -> Subject {
    Subject {
        id: SubjectId(id),
        title: title.to_string(),
        course_id: Some(CourseId(course_id)),
    }
}

/// Create a test course with the given subjects attached
pub fn test_course(id: i32, name: &str, titles: &[&str]) -> Course {
    Course {
        id: CourseId(id),
        name: name.to_string(),
        subjects: titles
            .iter()
            .enumerate()
            .map(|(i, t)| test_subject(id * 100 + i as i32, t, id))
            .collect(),
    }
}
