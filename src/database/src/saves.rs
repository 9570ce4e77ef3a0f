use crate::DatabaseError;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use guildball_core::WorldSnapshot;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Gzip-compressed JSON saves, one file per world seed.
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SaveStore { dir: dir.into() }
    }

    pub fn path_for(&self, seed: u32) -> PathBuf {
        self.dir.join(format!("world-{}.json.gz", seed))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self, seed: u32) -> bool {
        self.path_for(seed).is_file()
    }

    pub fn save(&self, seed: u32, snapshot: &WorldSnapshot) -> Result<PathBuf, DatabaseError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(seed);
        let file = File::create(&path)?;

        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, snapshot)?;
        encoder.finish()?.flush()?;

        info!("💾 saved {} to {}", snapshot.date, path.display());

        Ok(path)
    }

    pub fn load(&self, seed: u32) -> Result<WorldSnapshot, DatabaseError> {
        let path = self.path_for(seed);
        let file = File::open(&path)?;

        let snapshot: WorldSnapshot = serde_json::from_reader(GzDecoder::new(BufReader::new(file)))?;

        info!("📂 loaded {} from {}", snapshot.date, path.display());

        Ok(snapshot)
    }
}
