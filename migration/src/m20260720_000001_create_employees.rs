use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    EmployeeId,
    Name,
    Department,
    Role,
    Skills,
    SkillLevel,
    Experience,
    Category,
    Availability,
    PerformanceRating,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::EmployeeId).string_len(50))
                    .col(ColumnDef::new(Employees::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Employees::Department)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::Role).string_len(100).not_null())
                    .col(ColumnDef::new(Employees::Skills).string_len(1000))
                    .col(
                        ColumnDef::new(Employees::SkillLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::Experience).double().not_null())
                    .col(
                        ColumnDef::new(Employees::Category)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::Availability)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::PerformanceRating)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::Status).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // NULLs never collide, so only assigned identifiers are constrained.
        manager
            .create_index(
                Index::create()
                    .name("uq_employees_employee_id")
                    .table(Employees::Table)
                    .col(Employees::EmployeeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}
