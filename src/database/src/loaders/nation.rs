use crate::{DatabaseError, DatabaseLoader};
use guildball_core::club::{AttributeKind, Mentality};
use guildball_core::nation::{
    AestheticPhilosophy, AttributeBias, Nation, PeopleNameGeneratorData, TacticalPhilosophy,
};
use serde::Deserialize;

pub const NATIONS_FILE: &str = "nations.json";

#[derive(Debug, Deserialize)]
pub struct NationEntity {
    pub id: u32,
    pub name: String,
    pub adjective: String,
    #[serde(default)]
    pub first_names: Vec<String>,
    #[serde(default)]
    pub last_names: Vec<String>,
    #[serde(default)]
    pub attribute_biases: Vec<AttributeBiasEntity>,
    pub hues: Vec<String>,
    pub crest_motif: String,
    pub mentality: Mentality,
    pub pressing: u8,
}

#[derive(Debug, Deserialize)]
pub struct AttributeBiasEntity {
    pub attribute: AttributeKind,
    pub offset: i8,
}

impl From<&NationEntity> for Nation {
    fn from(entity: &NationEntity) -> Self {
        Nation {
            id: entity.id,
            name: entity.name.clone(),
            adjective: entity.adjective.clone(),
            people_names: PeopleNameGeneratorData {
                first_names: entity.first_names.clone(),
                last_names: entity.last_names.clone(),
            },
            attribute_biases: entity
                .attribute_biases
                .iter()
                .map(|b| AttributeBias {
                    attribute: b.attribute,
                    offset: b.offset,
                })
                .collect(),
            aesthetic: AestheticPhilosophy {
                hues: entity.hues.clone(),
                crest_motif: entity.crest_motif.clone(),
            },
            tactical: TacticalPhilosophy {
                mentality: entity.mentality,
                pressing: entity.pressing.clamp(1, 20),
            },
        }
    }
}

pub struct NationLoader;

impl NationLoader {
    pub fn load() -> Result<Vec<NationEntity>, DatabaseError> {
        DatabaseLoader::read(NATIONS_FILE)
    }
}
