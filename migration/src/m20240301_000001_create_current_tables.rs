use sea_orm_migration::prelude::*;

/// Tables holding the latest known state of every synchronized entity kind.
#[derive(DeriveIden)]
pub enum War {
    Table,
    Id,
    StartTime,
    EndTime,
    Factions,
}

#[derive(DeriveIden)]
pub enum Biome {
    Table,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub enum Hazard {
    Table,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Sector,
    PositionX,
    PositionY,
    Waypoints,
    MaxHealth,
    Disabled,
    InitialOwner,
    BiomeName,
    HazardNames,
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    PlanetId,
    CampaignType,
    Count,
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    CampaignId,
    EventType,
    Faction,
    MaxHealth,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
pub enum AssignmentTask {
    Table,
    Id,
    AssignmentId,
    Position,
    TaskType,
    Values,
    ValueTypes,
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    Title,
    Briefing,
    Description,
    Expiration,
    RewardType,
    RewardAmount,
    TaskIds,
}

#[derive(DeriveIden)]
pub enum Dispatch {
    Table,
    Id,
    Published,
    DispatchType,
    Message,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(War::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(War::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(War::StartTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(War::EndTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(War::Factions).json().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Biome::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Biome::Name).string().not_null().primary_key())
                    .col(ColumnDef::new(Biome::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hazard::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hazard::Name).string().not_null().primary_key())
                    .col(ColumnDef::new(Hazard::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Planet::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Planet::Name).string().not_null())
                    .col(ColumnDef::new(Planet::Sector).string().not_null())
                    .col(ColumnDef::new(Planet::PositionX).double().not_null())
                    .col(ColumnDef::new(Planet::PositionY).double().not_null())
                    .col(ColumnDef::new(Planet::Waypoints).json().not_null())
                    .col(ColumnDef::new(Planet::MaxHealth).big_integer().not_null())
                    .col(ColumnDef::new(Planet::Disabled).boolean().not_null())
                    .col(ColumnDef::new(Planet::InitialOwner).string().not_null())
                    .col(ColumnDef::new(Planet::BiomeName).string().not_null())
                    .col(ColumnDef::new(Planet::HazardNames).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planet_biome")
                            .from(Planet::Table, Planet::BiomeName)
                            .to(Biome::Table, Biome::Name),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Campaign::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Campaign::PlanetId).big_integer().not_null())
                    .col(ColumnDef::new(Campaign::CampaignType).big_integer().not_null())
                    .col(ColumnDef::new(Campaign::Count).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_planet")
                            .from(Campaign::Table, Campaign::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Event::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Event::CampaignId).big_integer().not_null())
                    .col(ColumnDef::new(Event::EventType).big_integer().not_null())
                    .col(ColumnDef::new(Event::Faction).string().not_null())
                    .col(ColumnDef::new(Event::MaxHealth).big_integer().not_null())
                    .col(ColumnDef::new(Event::StartTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Event::EndTime).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_campaign")
                            .from(Event::Table, Event::CampaignId)
                            .to(Campaign::Table, Campaign::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Tasks are written before their assignment row so the assignment can embed the
        // generated ids; the assignment id column is therefore indexed, not constrained.
        manager
            .create_table(
                Table::create()
                    .table(AssignmentTask::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentTask::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AssignmentTask::AssignmentId).big_integer().not_null())
                    .col(ColumnDef::new(AssignmentTask::Position).integer().not_null())
                    .col(ColumnDef::new(AssignmentTask::TaskType).big_integer().not_null())
                    .col(ColumnDef::new(AssignmentTask::Values).json().not_null())
                    .col(ColumnDef::new(AssignmentTask::ValueTypes).json().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_task_position")
                    .table(AssignmentTask::Table)
                    .col(AssignmentTask::AssignmentId)
                    .col(AssignmentTask::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assignment::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Assignment::Title).text().null())
                    .col(ColumnDef::new(Assignment::Briefing).text().null())
                    .col(ColumnDef::new(Assignment::Description).text().null())
                    .col(ColumnDef::new(Assignment::Expiration).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Assignment::RewardType).big_integer().not_null())
                    .col(ColumnDef::new(Assignment::RewardAmount).big_integer().not_null())
                    .col(ColumnDef::new(Assignment::TaskIds).json().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Dispatch::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Dispatch::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Dispatch::Published).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Dispatch::DispatchType).big_integer().not_null())
                    .col(ColumnDef::new(Dispatch::Message).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dispatch::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Assignment::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AssignmentTask::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Event::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Campaign::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Planet::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Hazard::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Biome::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(War::Table).to_owned()).await
    }
}
