// src/error.rs
// ============================================================================
// ERRORS - Fallos de lectura, escritura y longitud de entrada
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Errores de la conversión. Todos son fatales.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solo se emite en modo estricto
    #[error(
        "{}: length {len} bytes is not a multiple of the element width ({width} bytes)",
        .path.display()
    )]
    MisalignedLength {
        path: PathBuf,
        len: u64,
        width: usize,
    },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
