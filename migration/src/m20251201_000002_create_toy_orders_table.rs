use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ToyOrders::Table)
                    .if_not_exists()
                    .col(string(ToyOrders::Id).primary_key())
                    .col(string(ToyOrders::ChildName))
                    .col(integer(ToyOrders::Age))
                    .col(string(ToyOrders::Location))
                    .col(string(ToyOrders::Toy))
                    .col(string(ToyOrders::Category))
                    .col(string(ToyOrders::AssignedElf))
                    .col(string(ToyOrders::Status))
                    .col(string(ToyOrders::DueDate))
                    .col(text_null(ToyOrders::Notes))
                    .col(integer(ToyOrders::NiceListScore))
                    .col(timestamp(ToyOrders::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ToyOrders::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ToyOrders {
    Table,
    Id,
    ChildName,
    Age,
    Location,
    Toy,
    Category,
    AssignedElf,
    Status,
    DueDate,
    Notes,
    NiceListScore,
    CreatedAt,
}
