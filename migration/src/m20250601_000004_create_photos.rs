use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(PhotoStatus::Enum)
                    .values([
                        PhotoStatus::Pending,
                        PhotoStatus::Approved,
                        PhotoStatus::Rejected,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(uuid(Photo::Id).primary_key())
                    .col(blob(Photo::ImageData).not_null())
                    .col(string_len(Photo::ContentType, 100).not_null())
                    .col(string_len(Photo::Title, 255).not_null())
                    .col(string_len(Photo::UploadedBy, 255).not_null())
                    .col(
                        ColumnDef::new(Photo::Status)
                            .custom(PhotoStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Photo::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Photo::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PhotoStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photo {
    Table,
    Id,
    ImageData,
    ContentType,
    Title,
    UploadedBy,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum PhotoStatus {
    #[sea_orm(iden = "photo_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "approved")]
    Approved,
    #[sea_orm(iden = "rejected")]
    Rejected,
}
