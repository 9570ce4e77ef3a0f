use crate::club::{AttributeKind, Mentality};
use crate::error::{SimulationError, SimulationResult};
use crate::utils::SeededRng;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nation {
    pub id: u32,
    pub name: String,
    pub adjective: String,
    pub people_names: PeopleNameGeneratorData,
    pub attribute_biases: Vec<AttributeBias>,
    pub aesthetic: AestheticPhilosophy,
    pub tactical: TacticalPhilosophy,
}

impl Nation {
    /// Signed offset this nation applies to `attribute`.
    pub fn bias_for(&self, attribute: AttributeKind) -> i32 {
        self.attribute_biases
            .iter()
            .filter(|b| b.attribute == attribute)
            .map(|b| b.offset as i32)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleNameGeneratorData {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeBias {
    pub attribute: AttributeKind,
    pub offset: i8,
}

/// Palette and crest hints consumed by the asset renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AestheticPhilosophy {
    pub hues: Vec<String>,
    pub crest_motif: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalPhilosophy {
    pub mentality: Mentality,
    pub pressing: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NationCollection {
    pub nations: Vec<Nation>,
}

impl NationCollection {
    pub fn new(nations: Vec<Nation>) -> Self {
        NationCollection { nations }
    }

    pub fn find(&self, id: u32) -> Option<&Nation> {
        self.nations.iter().find(|n| n.id == id)
    }

    /// Resolves `id`, substituting a uniformly chosen nation when the
    /// reference is broken. Only an empty table is an error.
    pub fn find_or_fallback(&self, id: u32, rng: &mut SeededRng) -> SimulationResult<&Nation> {
        if let Some(nation) = self.find(id) {
            return Ok(nation);
        }

        warn!("{}, using a random nation instead", SimulationError::missing_nation(id));

        rng.choice(&self.nations)
    }

    pub fn len(&self) -> usize {
        self.nations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }
}
