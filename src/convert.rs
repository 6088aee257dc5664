// src/convert.rs
// ============================================================================
// CONVERT - Cast elemento a elemento entre f64 y f32
// ============================================================================
//
// Narrow: redondeo IEEE al f32 más cercano. Magnitudes > f32::MAX → ±inf,
//         NaN → NaN. Nunca falla.
// Widen:  exacto.
//
// ============================================================================

use crate::samples::Samples;

/// Estadísticas de una conversión
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub count: usize,
    /// Valores finitos que pasaron a ±inf
    pub overflowed: usize,
    /// Valores finitos cuyo resultado no es exacto (incluye overflow)
    pub inexact: usize,
}

impl ConversionStats {
    pub fn is_lossless(&self) -> bool {
        self.inexact == 0
    }
}

/// f64 → f32
pub fn narrow(data: &[f64]) -> (Vec<f32>, ConversionStats) {
    let mut stats = ConversionStats { count: data.len(), ..Default::default() };

    let out = data
        .iter()
        .map(|&x| {
            let y = x as f32;
            if x.is_finite() {
                if y.is_infinite() {
                    stats.overflowed += 1;
                }
                if y as f64 != x {
                    stats.inexact += 1;
                }
            }
            y
        })
        .collect();

    (out, stats)
}

/// f32 → f64
pub fn widen(data: &[f32]) -> (Vec<f64>, ConversionStats) {
    let stats = ConversionStats { count: data.len(), ..Default::default() };
    (data.iter().map(|&x| x as f64).collect(), stats)
}

/// Convierte `samples` al ancho complementario: F64 → F32, F32 → F64
pub fn convert(samples: &Samples) -> (Samples, ConversionStats) {
    match samples {
        Samples::F64(values) => {
            let (out, stats) = narrow(values);
            (Samples::F32(out), stats)
        }
        Samples::F32(values) => {
            let (out, stats) = widen(values);
            (Samples::F64(out), stats)
        }
    }
}
