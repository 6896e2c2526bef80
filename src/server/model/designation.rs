use uuid::Uuid;

use crate::model::designation::DesignationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamDesignation {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl TeamDesignation {
    pub fn from_entity(entity: entity::team_designation::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> DesignationDto {
        DesignationDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}
