//! SQL adapter for SubjectRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{CourseId, NewSubject, Subject, SubjectId};
use crate::domain::ports::SubjectRepository;
use crate::entity::subjects;
use crate::error::DomainError;

/// SeaORM implementation of SubjectRepository
pub struct SqlSubjectRepository {
    db: DatabaseConnection,
}

impl SqlSubjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectRepository for SqlSubjectRepository {
    async fn find_all(&self) -> Result<Vec<Subject>, DomainError> {
        let results = subjects::Entity::find()
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, DomainError> {
        let result = subjects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Subject>, DomainError> {
        let result = subjects::Entity::find()
            .filter(subjects::Column::Title.eq(title))
            .order_by_asc(subjects::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_course(&self, course_id: &CourseId) -> Result<Vec<Subject>, DomainError> {
        let results = subjects::Entity::find()
            .filter(subjects::Column::CourseId.eq(course_id.0))
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, subject: &NewSubject) -> Result<Subject, DomainError> {
        let model = subjects::ActiveModel {
            id: NotSet,
            title: Set(subject.title.clone()),
            course_id: Set(None),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_title(&self, id: &SubjectId, title: &str) -> Result<Subject, DomainError> {
        let subject = subjects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Subject not found with id: {}", id)))?;

        let mut active_model = subject.into_active_model();
        active_model.title = Set(title.to_string());

        let result = active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &SubjectId) -> Result<(), DomainError> {
        let result = subjects::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!(
                "Subject not found with id: {}",
                id
            )))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<subjects::Model> for Subject {
    fn from(model: subjects::Model) -> Self {
        Subject {
            id: SubjectId(model.id),
            title: model.title,
            course_id: model.course_id.map(CourseId),
        }
    }
}
