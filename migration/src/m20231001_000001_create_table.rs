use crate::integer_primary_key;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(&mut integer_primary_key(Team::Id))
                    .col(ColumnDef::new(Team::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(&mut integer_primary_key(Member::Id))
                    .col(ColumnDef::new(Member::Username).string().null())
                    .col(ColumnDef::new(Member::Age).integer().not_null())
                    .col(ColumnDef::new(Member::TeamId).integer().null())
                    .foreign_key(
                        &mut ForeignKeyCreateStatement::new()
                            .from(Member::Table, Member::TeamId)
                            .to(Team::Table, Team::Id)
                            .to_owned(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_team_id")
                    .table(Member::Table)
                    .col(Member::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Member {
    Table,
    Id,
    Username,
    Age,
    TeamId,
}
