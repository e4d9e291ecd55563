//! Mock implementations of port traits
//!
//! In-memory repositories that share one store, so a course repository and
//! a subject repository built from the same `InMemoryStore` see each other's
//! writes the way the SQL adapters do.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Course, CourseId, NewCourse, NewSubject, Subject, SubjectDraft, SubjectId,
};
use crate::domain::ports::{CourseRepository, SubjectRepository};
use crate::error::DomainError;

// ============================================================================
// Shared store
// ============================================================================

#[derive(Default)]
struct StoreData {
    courses: BTreeMap<CourseId, String>,
    subjects: BTreeMap<SubjectId, Subject>,
    last_course_id: i32,
    last_subject_id: i32,
}

impl StoreData {
    fn next_course_id(&mut self) -> CourseId {
        self.last_course_id += 1;
        CourseId(self.last_course_id)
    }

    fn next_subject_id(&mut self) -> SubjectId {
        self.last_subject_id += 1;
        SubjectId(self.last_subject_id)
    }

    fn subjects_of(&self, course_id: &CourseId) -> Vec<Subject> {
        self.subjects
            .values()
            .filter(|s| s.belongs_to(course_id))
            .cloned()
            .collect()
    }

    fn course(&self, id: &CourseId) -> Option<Course> {
        self.courses.get(id).map(|name| Course {
            id: *id,
            name: name.clone(),
            subjects: self.subjects_of(id),
        })
    }

    fn insert_subject(&mut self, course_id: Option<CourseId>, title: &str) -> Subject {
        let subject = Subject {
            id: self.next_subject_id(),
            title: title.to_string(),
            course_id,
        };
        self.subjects.insert(subject.id, subject.clone());
        subject
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<StoreData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course_repository(&self) -> InMemoryCourseRepository {
        InMemoryCourseRepository {
            store: self.clone(),
        }
    }

    pub fn subject_repository(&self) -> InMemorySubjectRepository {
        InMemorySubjectRepository {
            store: self.clone(),
        }
    }

    pub fn course_count(&self) -> usize {
        self.data.read().unwrap().courses.len()
    }

    pub fn subject_count(&self) -> usize {
        self.data.read().unwrap().subjects.len()
    }
}

fn course_not_found(id: &CourseId) -> DomainError {
    DomainError::NotFound(format!("Course not found with id: {}", id))
}

// ============================================================================
// In-Memory Course Repository
// ============================================================================

pub struct InMemoryCourseRepository {
    store: InMemoryStore,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.courses.keys().filter_map(|id| data.course(id)).collect())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.course(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data
            .courses
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .and_then(|(id, _)| data.course(id)))
    }

    async fn exists(&self, id: &CourseId) -> Result<bool, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.courses.contains_key(id))
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let mut data = self.store.data.write().unwrap();
        if data.courses.values().any(|n| *n == course.name) {
            return Err(DomainError::Conflict(format!(
                "Course with name '{}' already exists",
                course.name
            )));
        }

        let id = data.next_course_id();
        data.courses.insert(id, course.name.clone());
        for title in &course.subject_titles {
            data.insert_subject(Some(id), title);
        }

        data.course(&id)
            .ok_or_else(|| DomainError::Internal("course vanished after insert".to_string()))
    }

    async fn replace(
        &self,
        id: &CourseId,
        name: &str,
        drafts: &[SubjectDraft],
    ) -> Result<Course, DomainError> {
        let mut data = self.store.data.write().unwrap();
        if !data.courses.contains_key(id) {
            return Err(course_not_found(id));
        }
        data.courses.insert(*id, name.to_string());

        let current: HashSet<SubjectId> = data.subjects_of(id).iter().map(|s| s.id).collect();
        let mut kept = HashSet::new();
        let mut inserts = Vec::new();
        for draft in drafts {
            match draft.id {
                Some(sid) if current.contains(&sid) && kept.insert(sid) => {
                    if let Some(subject) = data.subjects.get_mut(&sid) {
                        subject.title = draft.title.clone();
                    }
                }
                _ => inserts.push(draft.title.clone()),
            }
        }

        data.subjects
            .retain(|sid, s| !s.belongs_to(id) || kept.contains(sid));
        for title in inserts {
            data.insert_subject(Some(*id), &title);
        }

        data.course(id)
            .ok_or_else(|| DomainError::Internal("course vanished during replace".to_string()))
    }

    async fn attach_subject(&self, id: &CourseId, title: &str) -> Result<Subject, DomainError> {
        let mut data = self.store.data.write().unwrap();
        if !data.courses.contains_key(id) {
            return Err(course_not_found(id));
        }
        Ok(data.insert_subject(Some(*id), title))
    }

    async fn detach_subject(
        &self,
        id: &CourseId,
        subject_id: &SubjectId,
    ) -> Result<bool, DomainError> {
        let mut data = self.store.data.write().unwrap();
        let owned = data
            .subjects
            .get(subject_id)
            .is_some_and(|s| s.belongs_to(id));
        if owned {
            data.subjects.remove(subject_id);
        }
        Ok(owned)
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let mut data = self.store.data.write().unwrap();
        if data.courses.remove(id).is_none() {
            return Err(course_not_found(id));
        }
        data.subjects.retain(|_, s| !s.belongs_to(id));
        Ok(())
    }
}

// ============================================================================
// In-Memory Subject Repository
// ============================================================================

pub struct InMemorySubjectRepository {
    store: InMemoryStore,
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn find_all(&self) -> Result<Vec<Subject>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.subjects.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.subjects.get(id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Subject>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.subjects.values().find(|s| s.title == title).cloned())
    }

    async fn find_by_course(&self, course_id: &CourseId) -> Result<Vec<Subject>, DomainError> {
        let data = self.store.data.read().unwrap();
        Ok(data.subjects_of(course_id))
    }

    async fn create(&self, subject: &NewSubject) -> Result<Subject, DomainError> {
        let mut data = self.store.data.write().unwrap();
        Ok(data.insert_subject(None, &subject.title))
    }

    async fn update_title(&self, id: &SubjectId, title: &str) -> Result<Subject, DomainError> {
        let mut data = self.store.data.write().unwrap();
        let subject = data
            .subjects
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Subject not found with id: {}", id)))?;
        subject.title = title.to_string();
        Ok(subject.clone())
    }

    async fn delete(&self, id: &SubjectId) -> Result<(), DomainError> {
        let mut data = self.store.data.write().unwrap();
        data.subjects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Subject not found with id: {}", id)))
    }
}
