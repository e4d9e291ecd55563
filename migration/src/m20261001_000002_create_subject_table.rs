use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string(Subject::Title))
                    .col(integer_null(Subject::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subjects_course_id")
                            .from(Subject::Table, Subject::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_course_id")
                    .table(Subject::Table)
                    .col(Subject::CourseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Title,
    CourseId,
}
