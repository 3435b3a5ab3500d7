use sea_orm::entity::prelude::*;

use crate::domain::event::Event;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub campaign_id: i64,
    pub event_type: i64,
    pub faction: String,
    pub max_health: i64,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign_do::Entity",
        from = "Column::CampaignId",
        to = "super::campaign_do::Column::Id"
    )]
    Campaign,
}

impl Related<super::campaign_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Event> for Model {
    fn from(value: &Event) -> Self {
        Self {
            id: value.id(),
            campaign_id: value.campaign_id(),
            event_type: value.event_type(),
            faction: value.faction().clone(),
            max_health: value.max_health(),
            start_time: value.start_time(),
            end_time: value.end_time(),
        }
    }
}
