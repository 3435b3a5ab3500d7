use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_current_tables::{Event, Planet, War};

/// Append-only history tables. Rows are inserted once per cycle and never updated.
#[derive(DeriveIden)]
pub enum Statistic {
    Table,
    Id,
    MissionsWon,
    MissionsLost,
    MissionTime,
    TerminidKills,
    AutomatonKills,
    IlluminateKills,
    BulletsFired,
    BulletsHit,
    TimePlayed,
    Deaths,
    Revives,
    Friendlies,
    MissionSuccessRate,
    Accuracy,
    PlayerCount,
}

#[derive(DeriveIden)]
pub enum WarSnapshot {
    Table,
    Id,
    WarId,
    ImpactMultiplier,
}

#[derive(DeriveIden)]
pub enum EventSnapshot {
    Table,
    Id,
    EventId,
    Health,
}

#[derive(DeriveIden)]
pub enum PlanetSnapshot {
    Table,
    Id,
    PlanetId,
    Health,
    CurrentOwner,
    RegenPerSecond,
    AttackingPlanetIds,
    EventSnapshotId,
    StatisticId,
}

#[derive(DeriveIden)]
pub enum Snapshot {
    Table,
    Id,
    CreateTime,
    WarSnapshotId,
    AssignmentIds,
    CampaignIds,
    DispatchIds,
    PlanetSnapshotIds,
    StatisticId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistic::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Statistic::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Statistic::MissionsWon).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::MissionsLost).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::MissionTime).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::TerminidKills).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::AutomatonKills).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::IlluminateKills).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::BulletsFired).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::BulletsHit).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::TimePlayed).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::Deaths).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::Revives).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::Friendlies).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::MissionSuccessRate).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::Accuracy).big_integer().not_null())
                    .col(ColumnDef::new(Statistic::PlayerCount).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WarSnapshot::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WarSnapshot::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WarSnapshot::WarId).big_integer().not_null())
                    .col(ColumnDef::new(WarSnapshot::ImpactMultiplier).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_war_snapshot_war")
                            .from(WarSnapshot::Table, WarSnapshot::WarId)
                            .to(War::Table, War::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventSnapshot::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventSnapshot::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventSnapshot::EventId).big_integer().not_null())
                    .col(ColumnDef::new(EventSnapshot::Health).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_snapshot_event")
                            .from(EventSnapshot::Table, EventSnapshot::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanetSnapshot::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlanetSnapshot::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlanetSnapshot::PlanetId).big_integer().not_null())
                    .col(ColumnDef::new(PlanetSnapshot::Health).big_integer().not_null())
                    .col(ColumnDef::new(PlanetSnapshot::CurrentOwner).string().not_null())
                    .col(ColumnDef::new(PlanetSnapshot::RegenPerSecond).double().not_null())
                    .col(ColumnDef::new(PlanetSnapshot::AttackingPlanetIds).json().not_null())
                    .col(ColumnDef::new(PlanetSnapshot::EventSnapshotId).integer().null())
                    .col(ColumnDef::new(PlanetSnapshot::StatisticId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_snapshot_planet")
                            .from(PlanetSnapshot::Table, PlanetSnapshot::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_snapshot_event_snapshot")
                            .from(PlanetSnapshot::Table, PlanetSnapshot::EventSnapshotId)
                            .to(EventSnapshot::Table, EventSnapshot::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_snapshot_statistic")
                            .from(PlanetSnapshot::Table, PlanetSnapshot::StatisticId)
                            .to(Statistic::Table, Statistic::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Snapshot::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Snapshot::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Snapshot::CreateTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Snapshot::WarSnapshotId).integer().not_null())
                    .col(ColumnDef::new(Snapshot::AssignmentIds).json().not_null())
                    .col(ColumnDef::new(Snapshot::CampaignIds).json().not_null())
                    .col(ColumnDef::new(Snapshot::DispatchIds).json().not_null())
                    .col(ColumnDef::new(Snapshot::PlanetSnapshotIds).json().not_null())
                    .col(ColumnDef::new(Snapshot::StatisticId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_snapshot_war_snapshot")
                            .from(Snapshot::Table, Snapshot::WarSnapshotId)
                            .to(WarSnapshot::Table, WarSnapshot::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_snapshot_statistic")
                            .from(Snapshot::Table, Snapshot::StatisticId)
                            .to(Statistic::Table, Statistic::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Snapshot::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(PlanetSnapshot::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(EventSnapshot::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(WarSnapshot::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Statistic::Table).to_owned()).await
    }
}
