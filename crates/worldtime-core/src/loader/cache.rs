// crates/worldtime-core/src/loader/cache.rs
use crate::error::Result;
use crate::raw::DirectorySnapshot;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Upper bound for a cache payload; guards against corrupt length prefixes.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

/// The cache is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => true,
    }
}

pub fn read_cache(path: &Path) -> Result<DirectorySnapshot> {
    use bincode::Options;

    let reader = BufReader::new(File::open(path)?);
    #[cfg(feature = "compact")]
    let reader: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let reader: Box<dyn Read> = Box::new(reader);

    let snapshot = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
        .deserialize_from(reader)?;
    Ok(snapshot)
}

pub fn write_cache(path: &Path, snapshot: &DirectorySnapshot) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        bincode::serialize_into(&mut encoder, snapshot)?;
        encoder.finish()?.flush()?;
    }

    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        bincode::serialize_into(&mut writer, snapshot)?;
        writer.flush()?;
    }

    Ok(())
}
