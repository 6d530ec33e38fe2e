// crates/geodata-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Output side of [`create_stream`]. Must be closed with
/// [`StreamWriter::finish`]; dropping it swallows write errors.
pub enum StreamWriter {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl StreamWriter {
    /// Writes the gzip trailer (if any) and flushes everything to the file.
    pub fn finish(self) -> Result<()> {
        let mut inner = match self {
            StreamWriter::Plain(w) => w,
            #[cfg(feature = "compact")]
            StreamWriter::Gzip(gz) => gz.finish()?,
        };
        inner.flush()?;
        Ok(())
    }
}

impl Write for StreamWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            StreamWriter::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            StreamWriter::Gzip(gz) => gz.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            StreamWriter::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            StreamWriter::Gzip(gz) => gz.flush(),
        }
    }
}

/// Creates a file for writing, gzip-compressed when the name ends in `.gz`.
pub fn create_stream(path: &Path) -> Result<StreamWriter> {
    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            let writer = BufWriter::new(File::create(path)?);
            return Ok(StreamWriter::Gzip(GzEncoder::new(
                writer,
                Compression::default(),
            )));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
    }

    Ok(StreamWriter::Plain(BufWriter::new(File::create(path)?)))
}

/// Finds `<stem>.json` in `dir`, or `<stem>.json.gz` when `compact` is on.
#[cfg(feature = "json")]
pub fn locate_collection(dir: &Path, stem: &str) -> Result<std::path::PathBuf> {
    let plain = dir.join(format!("{stem}.json"));
    if plain.is_file() {
        return Ok(plain);
    }

    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{stem}.json.gz"));
        if gz.is_file() {
            return Ok(gz);
        }
    }

    Err(GeoError::NotFound(format!(
        "No {stem}.json in {}",
        dir.display()
    )))
}
