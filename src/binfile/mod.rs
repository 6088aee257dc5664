// src/binfile/mod.rs
// ============================================================================
// BINFILE - Archivos binarios planos de floats
// ============================================================================
//
// Formato: N floats IEEE consecutivos en orden de bytes nativo.
// Sin header, sin prefijo de longitud, sin trailer.
//   N = tamaño_en_bytes / ancho_de_elemento
//
// ============================================================================

pub mod reader;
pub mod writer;

pub use reader::{read_samples, ReadOptions, ReadOutcome};
pub use writer::write_samples;
