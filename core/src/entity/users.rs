use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::allergy_profiles::Entity")]
    AllergyProfiles,
    #[sea_orm(has_many = "super::scanned_products::Entity")]
    ScannedProducts,
}

impl Related<super::allergy_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllergyProfiles.def()
    }
}

impl Related<super::scanned_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScannedProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
