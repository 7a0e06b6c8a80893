use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DbBackend, Statement};

/// Punters (players who enter draws)
#[derive(DeriveIden)]
enum Punters {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Address,
    IsAdmin,
    CreatedAt,
    UpdatedAt,
}

/// Lottery types (rule set shared by a series of draws, carries the rollover)
#[derive(DeriveIden)]
enum LotteryTypes {
    Table,
    Id,
    Name,
    NumberOfNumbers,
    MaxVal,
    MinMatches,
    Rollover,
    SpotprizeMinMatches,
    SpotprizeValue,
    CreatedAt,
    UpdatedAt,
}

/// Draws (one scheduled drawing, winning_combo NULL until resolved)
#[derive(DeriveIden)]
enum Draws {
    Table,
    Id,
    LotteryTypeId,
    DrawDate,
    Prize,
    WinningCombo,
    CreatedAt,
}

/// Entries (one pick per punter per draw)
#[derive(DeriveIden)]
enum Entries {
    Table,
    Id,
    PunterId,
    DrawId,
    PickedNumbers,
    CreatedAt,
}

/// Wins (prize awarded to an entry during draw resolution)
#[derive(DeriveIden)]
enum Wins {
    Table,
    Id,
    EntryId,
    Amount,
    WinType,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // win_type enum (main prize pooled split vs flat spot prize)
        manager
            .get_connection()
            .execute(Statement::from_string(
                DbBackend::Postgres,
                "CREATE TYPE win_type AS ENUM ('main', 'spotprize')".to_owned(),
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Punters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Punters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Punters::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Punters::Email).string_len(254).not_null())
                    .col(ColumnDef::new(Punters::PasswordHash).text().not_null())
                    .col(ColumnDef::new(Punters::Address).text())
                    .col(
                        ColumnDef::new(Punters::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Punters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Punters::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_punters_email_unique")
                    .table(Punters::Table)
                    .col(Punters::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LotteryTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LotteryTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LotteryTypes::Name).string_len(30).not_null())
                    .col(
                        ColumnDef::new(LotteryTypes::NumberOfNumbers)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LotteryTypes::MaxVal).integer().not_null())
                    .col(
                        ColumnDef::new(LotteryTypes::MinMatches)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(LotteryTypes::Rollover)
                            .decimal_len(20, 2)
                            .not_null()
                            .default("0.00"),
                    )
                    .col(ColumnDef::new(LotteryTypes::SpotprizeMinMatches).integer())
                    .col(ColumnDef::new(LotteryTypes::SpotprizeValue).decimal_len(20, 2))
                    .col(
                        ColumnDef::new(LotteryTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(LotteryTypes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Draws::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Draws::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Draws::LotteryTypeId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Draws::DrawDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Draws::Prize).decimal_len(20, 2).not_null())
                    // NULL until the draw has been made; the resolver claims the
                    // draw with UPDATE ... WHERE winning_combo IS NULL
                    .col(ColumnDef::new(Draws::WinningCombo).string_len(100))
                    .col(
                        ColumnDef::new(Draws::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draws_lottery_type")
                            .from(Draws::Table, Draws::LotteryTypeId)
                            .to(LotteryTypes::Table, LotteryTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Entries::PunterId).big_integer().not_null())
                    .col(ColumnDef::new(Entries::DrawId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Entries::PickedNumbers)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Entries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_punter")
                            .from(Entries::Table, Entries::PunterId)
                            .to(Punters::Table, Punters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_draw")
                            .from(Entries::Table, Entries::DrawId)
                            .to(Draws::Table, Draws::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // one entry per punter per draw
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_entries_punter_draw_unique")
                    .table(Entries::Table)
                    .col(Entries::PunterId)
                    .col(Entries::DrawId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wins::EntryId).big_integer().not_null())
                    .col(ColumnDef::new(Wins::Amount).decimal_len(20, 2).not_null())
                    .col(
                        ColumnDef::new(Wins::WinType)
                            .custom(Alias::new("win_type"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Wins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wins_entry")
                            .from(Wins::Table, Wins::EntryId)
                            .to(Entries::Table, Entries::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // at most one win per entry
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_wins_entry_unique")
                    .table(Wins::Table)
                    .col(Wins::EntryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Draws::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LotteryTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Punters::Table).to_owned())
            .await?;
        manager
            .get_connection()
            .execute(Statement::from_string(
                DbBackend::Postgres,
                "DROP TYPE IF EXISTS win_type".to_owned(),
            ))
            .await?;
        Ok(())
    }
}
