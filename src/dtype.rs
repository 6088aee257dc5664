// src/dtype.rs
// ============================================================================
// DTYPE - Anchos de elemento y dirección de conversión
// ============================================================================
//
//   Narrow (por defecto): f64 (8 bytes) → f32 (4 bytes)
//   Widen  (--reverse):   f32 (4 bytes) → f64 (8 bytes)
//
// ============================================================================

/// Precisión de los elementos de un archivo binario plano
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    F32,
    F64,
}

impl Precision {
    /// Bytes por elemento
    pub fn width(&self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::F32 => write!(f, "float32"),
            Self::F64 => write!(f, "float64"),
        }
    }
}

/// Dirección de conversión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Narrow,
    Widen,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse { Self::Widen } else { Self::Narrow }
    }

    pub fn source(&self) -> Precision {
        match self {
            Self::Narrow => Precision::F64,
            Self::Widen => Precision::F32,
        }
    }

    pub fn destination(&self) -> Precision {
        match self {
            Self::Narrow => Precision::F32,
            Self::Widen => Precision::F64,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.source(), self.destination())
    }
}
