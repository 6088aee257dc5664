// src/pipeline.rs
// ============================================================================
// PIPELINE - Orquestador de la conversión
// ============================================================================
//
// Lineal: leer → convertir → escribir.
// No imprime nada: el CLI recibe el resultado de la lectura antes de
// escribir (on_read) y el RunReport al terminar.
//
// ============================================================================

use log::info;

use crate::binfile::{read_samples, write_samples, ReadOptions, ReadOutcome};
use crate::config::Config;
use crate::convert::{convert, ConversionStats};
use crate::error::Result;

/// Resumen de una ejecución
#[derive(Debug, Clone)]
pub struct RunReport {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub stats: ConversionStats,
}

/// Ejecuta la conversión completa descrita por `config`.
///
/// `on_read` se llama tras la lectura y antes de crear el archivo de salida.
pub fn run<F>(config: &Config, mut on_read: F) -> Result<RunReport>
where
    F: FnMut(&ReadOutcome),
{
    let opts = ReadOptions {
        precision: config.direction.source(),
        strict: config.strict,
    };

    // El handle de entrada se libera al salir de read_samples
    let outcome = read_samples(&config.input, opts)?;
    on_read(&outcome);

    let (converted, stats) = convert(&outcome.samples);
    drop(outcome.samples);

    let bytes_written = write_samples(&config.output, &converted)?;

    info!(
        "{}: {} elements {} ({} overflowed, {} inexact)",
        config.output.display(),
        stats.count,
        config.direction,
        stats.overflowed,
        stats.inexact
    );

    Ok(RunReport {
        bytes_read: outcome.file_len,
        bytes_written,
        stats,
    })
}
