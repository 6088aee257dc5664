// src/binfile/writer.rs
// ============================================================================
// WRITER - Escribe la secuencia convertida como bytes raw
// ============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{ConvertError, Result};
use crate::samples::Samples;

/// Crea (o trunca) `path` y escribe `samples` sin header.
/// Devuelve el número de bytes escritos.
pub fn write_samples(path: impl AsRef<Path>, samples: &Samples) -> Result<u64> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut file = BufWriter::new(file);

    let bytes = samples.to_bytes();
    file.write_all(&bytes).map_err(|e| ConvertError::io(path, e))?;
    file.flush().map_err(|e| ConvertError::io(path, e))?;

    debug!(
        "wrote {} {} elements to {} ({} bytes)",
        samples.len(),
        samples.precision(),
        path.display(),
        bytes.len()
    );

    Ok(bytes.len() as u64)
}
