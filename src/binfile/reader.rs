// src/binfile/reader.rs
// ============================================================================
// READER - Lee el archivo completo como floats del ancho de origen
// ============================================================================

use std::fs::File;
use std::path::Path;

use log::{debug, warn};
use memmap2::Mmap;

use crate::dtype::Precision;
use crate::error::{ConvertError, Result};
use crate::samples::Samples;

/// Opciones de lectura
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub precision: Precision,
    /// Rechaza archivos con un elemento parcial al final
    pub strict: bool,
}

impl ReadOptions {
    pub fn new(precision: Precision) -> Self {
        Self { precision, strict: false }
    }
}

/// Resultado de una lectura
#[derive(Debug)]
pub struct ReadOutcome {
    pub samples: Samples,
    /// Tamaño del archivo en bytes
    pub file_len: u64,
    /// Bytes descartados al final (elemento parcial)
    pub trailing_bytes: usize,
}

/// Lee `path` completo como una secuencia de floats
pub fn read_samples(path: impl AsRef<Path>, opts: ReadOptions) -> Result<ReadOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    let file_len = file.metadata().map_err(|e| ConvertError::io(path, e))?.len();

    let width = opts.precision.width();
    let trailing_bytes = (file_len % width as u64) as usize;

    if trailing_bytes != 0 {
        if opts.strict {
            return Err(ConvertError::MisalignedLength {
                path: path.to_path_buf(),
                len: file_len,
                width,
            });
        }
        warn!(
            "{}: {} bytes is not a multiple of {}, dropping {} trailing bytes",
            path.display(),
            file_len,
            width,
            trailing_bytes
        );
    }

    // mmap de un archivo vacío no es portable
    let samples = if file_len == 0 {
        Samples::from_bytes(&[], opts.precision)
    } else {
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ConvertError::io(path, e))?;
        Samples::from_bytes(&mmap, opts.precision)
    };

    debug!(
        "read {} {} elements from {} ({} bytes)",
        samples.len(),
        opts.precision,
        path.display(),
        file_len
    );

    Ok(ReadOutcome { samples, file_len, trailing_bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_with(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_read_f64() {
        let values = [0.5f64, 1e300, -7.25];
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        let f = temp_with(&bytes);

        let outcome = read_samples(f.path(), ReadOptions::new(Precision::F64)).unwrap();
        assert_eq!(outcome.samples, Samples::F64(values.to_vec()));
        assert_eq!(outcome.file_len, 24);
        assert_eq!(outcome.trailing_bytes, 0);
    }

    #[test]
    fn test_read_empty() {
        let f = temp_with(&[]);
        let outcome = read_samples(f.path(), ReadOptions::new(Precision::F32)).unwrap();
        assert!(outcome.samples.is_empty());
        assert_eq!(outcome.file_len, 0);
    }

    #[test]
    fn test_misaligned_truncates_by_default() {
        let mut bytes = 2.0f64.to_ne_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let f = temp_with(&bytes);

        let outcome = read_samples(f.path(), ReadOptions::new(Precision::F64)).unwrap();
        assert_eq!(outcome.samples, Samples::F64(vec![2.0]));
        assert_eq!(outcome.trailing_bytes, 3);
    }

    #[test]
    fn test_misaligned_strict_fails() {
        let f = temp_with(&[0u8; 10]);
        let opts = ReadOptions { precision: Precision::F64, strict: true };

        match read_samples(f.path(), opts) {
            Err(ConvertError::MisalignedLength { len, width, .. }) => {
                assert_eq!(len, 10);
                assert_eq!(width, 8);
            }
            other => panic!("expected MisalignedLength, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.dat");
        let err = read_samples(&path, ReadOptions::new(Precision::F64)).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
        assert!(err.to_string().contains("nope.dat"));
    }
}
