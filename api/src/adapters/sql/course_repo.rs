//! SQL adapter for CourseRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

use crate::domain::entities::{Course, CourseId, NewCourse, Subject, SubjectDraft, SubjectId};
use crate::domain::ports::CourseRepository;
use crate::entity::{courses, subjects};
use crate::error::DomainError;

/// SeaORM implementation of CourseRepository
pub struct SqlCourseRepository {
    db: DatabaseConnection,
}

impl SqlCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a write error, turning a unique-name violation into a conflict
fn write_error(e: DbErr, name: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict(format!("Course with name '{}' already exists", name))
        }
        _ => DomainError::Database(e.to_string()),
    }
}

async fn load_subjects<C: ConnectionTrait>(
    conn: &C,
    course_id: i32,
) -> Result<Vec<Subject>, DomainError> {
    let results = subjects::Entity::find()
        .filter(subjects::Column::CourseId.eq(course_id))
        .order_by_asc(subjects::Column::Id)
        .all(conn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(results.into_iter().map(|m| m.into()).collect())
}

async fn insert_subject<C: ConnectionTrait>(
    conn: &C,
    course_id: i32,
    title: &str,
) -> Result<Subject, DomainError> {
    let model = subjects::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        course_id: Set(Some(course_id)),
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(result.into())
}

#[async_trait]
impl CourseRepository for SqlCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let results = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .find_with_related(subjects::Entity)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|(course, mut children)| {
                children.sort_by_key(|s| s.id);
                into_course(course, children.into_iter().map(|m| m.into()).collect())
            })
            .collect())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let result = courses::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match result {
            Some(model) => {
                let children = load_subjects(&self.db, model.id).await?;
                Ok(Some(into_course(model, children)))
            }
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DomainError> {
        let result = courses::Entity::find()
            .filter(courses::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match result {
            Some(model) => {
                let children = load_subjects(&self.db, model.id).await?;
                Ok(Some(into_course(model, children)))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, id: &CourseId) -> Result<bool, DomainError> {
        let count = courses::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let model = courses::ActiveModel {
            id: NotSet,
            name: Set(course.name.clone()),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_error(e, &course.name))?;

        let mut children = Vec::with_capacity(course.subject_titles.len());
        for title in &course.subject_titles {
            children.push(insert_subject(&txn, model.id, title).await?);
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(into_course(model, children))
    }

    async fn replace(
        &self,
        id: &CourseId,
        name: &str,
        drafts: &[SubjectDraft],
    ) -> Result<Course, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = courses::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .is_some();
        if !exists {
            return Err(DomainError::NotFound(format!(
                "Course not found with id: {}",
                id
            )));
        }

        let model = courses::ActiveModel {
            id: Set(id.0),
            name: Set(name.to_string()),
        }
        .update(&txn)
        .await
        .map_err(|e| write_error(e, name))?;

        let current: HashSet<SubjectId> = load_subjects(&txn, id.0)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        // A draft keeps an existing row only if it names a subject of this
        // course, and only the first draft naming it does.
        let mut kept: HashSet<SubjectId> = HashSet::new();
        let mut renames = Vec::new();
        let mut inserts = Vec::new();
        for draft in drafts {
            match draft.id {
                Some(sid) if current.contains(&sid) && kept.insert(sid) => {
                    renames.push((sid, draft.title.as_str()))
                }
                _ => inserts.push(draft.title.as_str()),
            }
        }

        let removed: Vec<i32> = current
            .iter()
            .filter(|sid| !kept.contains(sid))
            .map(|sid| sid.0)
            .collect();
        if !removed.is_empty() {
            subjects::Entity::delete_many()
                .filter(subjects::Column::CourseId.eq(id.0))
                .filter(subjects::Column::Id.is_in(removed))
                .exec(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        for (sid, title) in renames {
            subjects::ActiveModel {
                id: Set(sid.0),
                title: Set(title.to_string()),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        for title in inserts {
            insert_subject(&txn, id.0, title).await?;
        }

        let children = load_subjects(&txn, id.0).await?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(into_course(model, children))
    }

    async fn attach_subject(&self, id: &CourseId, title: &str) -> Result<Subject, DomainError> {
        if !self.exists(id).await? {
            return Err(DomainError::NotFound(format!(
                "Course not found with id: {}",
                id
            )));
        }

        insert_subject(&self.db, id.0, title).await
    }

    async fn detach_subject(
        &self,
        id: &CourseId,
        subject_id: &SubjectId,
    ) -> Result<bool, DomainError> {
        let result = subjects::Entity::delete_many()
            .filter(subjects::Column::Id.eq(subject_id.0))
            .filter(subjects::Column::CourseId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Cascade explicitly so the result does not depend on the backend
        // enforcing foreign keys.
        subjects::Entity::delete_many()
            .filter(subjects::Column::CourseId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = courses::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Course not found with id: {}",
                id
            )));
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

fn into_course(model: courses::Model, subjects: Vec<Subject>) -> Course {
    Course {
        id: CourseId(model.id),
        name: model.name,
        subjects,
    }
}
