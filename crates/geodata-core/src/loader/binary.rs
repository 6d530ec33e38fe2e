// crates/geodata-core/src/loader/binary.rs

//! Binary dataset snapshots (bincode), optionally gzipped.

use super::common_io;
use crate::error::Result;
use crate::model::GeoDataset;
use bincode::Options;
use std::io::Read;
use std::path::Path;

/// Upper bound on a snapshot, to refuse absurd length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl GeoDataset {
    /// Reconstructs a dataset from snapshot bytes produced by
    /// [`GeoDataset::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    /// Reads a snapshot file; a `.gz` name is decompressed first.
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = common_io::open_stream(path)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read snapshot");
        Self::from_bytes(&bytes)
    }

    /// Writes a snapshot file; a `.gz` name is compressed.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = common_io::create_stream(path)?;
        options().serialize_into(&mut writer, self)?;
        writer.finish()?;
        tracing::info!(path = %path.display(), "Wrote snapshot");
        Ok(())
    }
}
