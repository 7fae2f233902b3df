use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(FeedbackStatus::Enum)
                    .values([
                        FeedbackStatus::Pending,
                        FeedbackStatus::Approved,
                        FeedbackStatus::NotApproved,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(uuid(Feedback::Id).primary_key())
                    .col(string_len(Feedback::Name, 255).not_null())
                    .col(string_len(Feedback::Email, 255).not_null())
                    .col(string_len(Feedback::Phone, 20).not_null())
                    .col(text(Feedback::Message).not_null())
                    .col(integer(Feedback::Rating).not_null())
                    .col(
                        ColumnDef::new(Feedback::Status)
                            .custom(FeedbackStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Feedback::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Feedback::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(FeedbackStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    Rating,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum FeedbackStatus {
    #[sea_orm(iden = "feedback_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "approved")]
    Approved,
    #[sea_orm(iden = "not_approved")]
    NotApproved,
}
