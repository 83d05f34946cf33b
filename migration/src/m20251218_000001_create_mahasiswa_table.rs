use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mahasiswa::Table)
                    .if_not_exists()
                    .col(pk_uuid(Mahasiswa::Id))
                    .col(string_uniq(Mahasiswa::Nim))
                    .col(string(Mahasiswa::Nama))
                    .col(string(Mahasiswa::Prodi))
                    .col(string(Mahasiswa::Fakultas))
                    .col(boolean(Mahasiswa::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mahasiswa::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mahasiswa {
    Table,
    Id,
    Nim,
    Nama,
    Prodi,
    Fakultas,
    IsActive,
}
