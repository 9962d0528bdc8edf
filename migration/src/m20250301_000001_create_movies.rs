use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string_len(Movies::Title, 200))
                    .col(string_len(Movies::Actor1Name, 200))
                    .col(string_len(Movies::Actor2Name, 200))
                    .col(string_len(Movies::DirectorName, 100))
                    .col(string_len(Movies::Genre, 100))
                    .col(integer(Movies::ReleaseYear))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_release_year_title")
                    .table(Movies::Table)
                    .col(Movies::ReleaseYear)
                    .col(Movies::Title)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    #[sea_orm(iden = "actor1_name")]
    Actor1Name,
    #[sea_orm(iden = "actor2_name")]
    Actor2Name,
    DirectorName,
    Genre,
    ReleaseYear,
}
