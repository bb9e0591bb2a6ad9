use std::fmt::Display;

use ordered_float::NotNan;

/// Discrete rigid transformation of a mask: a rotation about the mask's centre,
/// followed by trimming and a translation of the footprint's top-left corner to `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RTransformation {
    /// Counter-clockwise rotation in degrees
    pub rotation: NotNan<f32>,
    /// Offset of the trimmed footprint in the container, as `(row, col)`
    pub translation: (usize, usize),
}

impl RTransformation {
    pub fn new(rotation_deg: f32, translation: (usize, usize)) -> Self {
        Self {
            rotation: NotNan::new(rotation_deg).expect("rotation is NaN"),
            translation,
        }
    }

    pub const fn empty() -> Self {
        const _0: NotNan<f32> = unsafe { NotNan::new_unchecked(0.0) };
        Self {
            rotation: _0,
            translation: (0, 0),
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation.into_inner()
    }

    pub fn row(&self) -> usize {
        self.translation.0
    }

    pub fn col(&self) -> usize {
        self.translation.1
    }
}

impl Display for RTransformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.1}°, t: ({}, {})",
            self.rotation.into_inner(),
            self.translation.0,
            self.translation.1
        )
    }
}
