use crate::{ClubEntity, ClubLoader, DatabaseError, NationEntity, NationLoader};
use guildball_core::club::Club;
use guildball_core::nation::{Nation, NationCollection};
use include_dir::{Dir, include_dir};
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/data");

/// Raw reference data as shipped with the binary.
pub struct DatabaseEntity {
    pub nations: Vec<NationEntity>,
    pub clubs: Vec<ClubEntity>,
}

impl DatabaseEntity {
    pub fn nations(&self) -> NationCollection {
        NationCollection::new(self.nations.iter().map(Nation::from).collect())
    }

    pub fn clubs(&self) -> Result<Vec<Club>, DatabaseError> {
        self.clubs.iter().map(Club::try_from).collect()
    }
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        let database = DatabaseEntity {
            nations: NationLoader::load()?,
            clubs: ClubLoader::load()?,
        };

        Self::validate(&database)?;

        info!(
            "📚 reference data loaded: {} nations, {} clubs",
            database.nations.len(),
            database.clubs.len()
        );

        Ok(database)
    }

    pub(crate) fn read<T: DeserializeOwned>(file: &'static str) -> Result<T, DatabaseError> {
        let contents = DATA_DIR
            .get_file(file)
            .and_then(|f| f.contents_utf8())
            .ok_or(DatabaseError::MissingFile(file))?;

        Self::parse(file, contents)
    }

    pub(crate) fn parse<T: DeserializeOwned>(
        file: &'static str,
        contents: &str,
    ) -> Result<T, DatabaseError> {
        serde_json::from_str(contents).map_err(|source| DatabaseError::Parse { file, source })
    }

    /// Duplicate ids are fatal. Dangling nation and rival references are
    /// only logged; the generator substitutes a nation and rivals are advisory.
    pub fn validate(database: &DatabaseEntity) -> Result<(), DatabaseError> {
        let mut nation_ids = HashSet::new();
        for nation in &database.nations {
            if !nation_ids.insert(nation.id) {
                return Err(DatabaseError::InvalidData(format!(
                    "duplicate nation id {}",
                    nation.id
                )));
            }
        }

        let mut club_ids = HashSet::new();
        for club in &database.clubs {
            if !club_ids.insert(club.id) {
                return Err(DatabaseError::InvalidData(format!("duplicate club id {}", club.id)));
            }
        }

        for club in &database.clubs {
            if !nation_ids.contains(&club.nation_id) {
                warn!("club {} refers to unknown nation {}", club.id, club.nation_id);
            }

            for rival in club.rivals.iter().filter(|r| !club_ids.contains(r)) {
                warn!("club {} lists unknown rival {}", club.id, rival);
            }
        }

        Ok(())
    }
}
