// src/samples.rs
// ============================================================================
// SAMPLES - Secuencia plana de floats (sin header, orden de bytes nativo)
// ============================================================================

use byteorder::{ByteOrder, NativeEndian};

use crate::dtype::Precision;

/// Secuencia de muestras de un único ancho
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl Samples {
    /// Decodifica bytes como elementos de `precision`.
    /// Un elemento parcial al final se descarta.
    pub fn from_bytes(bytes: &[u8], precision: Precision) -> Self {
        let count = bytes.len() / precision.width();
        let used = &bytes[..count * precision.width()];

        match precision {
            Precision::F32 => {
                let mut values = vec![0.0f32; count];
                NativeEndian::read_f32_into(used, &mut values);
                Self::F32(values)
            }
            Precision::F64 => {
                let mut values = vec![0.0f64; count];
                NativeEndian::read_f64_into(used, &mut values);
                Self::F64(values)
            }
        }
    }

    /// Codifica los elementos como bytes raw
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.byte_len()];
        match self {
            Self::F32(values) => NativeEndian::write_f32_into(values, &mut buf),
            Self::F64(values) => NativeEndian::write_f64_into(values, &mut buf),
        }
        buf
    }

    pub fn precision(&self) -> Precision {
        match self {
            Self::F32(_) => Precision::F32,
            Self::F64(_) => Precision::F64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::F32(values) => values.len(),
            Self::F64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn byte_len(&self) -> usize {
        self.len() * self.precision().width()
    }
}
