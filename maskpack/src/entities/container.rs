use std::sync::Arc;

use crate::geometry::{BinaryMask, MaskDescriptors};

/// The region in which [`Item`](crate::entities::Item)s are to be packed.
#[derive(Clone, Debug)]
pub struct Container {
    /// Silhouette of the container, `true` marks its interior
    pub mask: Arc<BinaryMask>,
    /// Descriptors of `mask`, computed once at creation
    pub descriptors: MaskDescriptors,
}

impl Container {
    pub fn new(mask: BinaryMask) -> Self {
        let descriptors = MaskDescriptors::from_mask(&mask);
        Self {
            mask: Arc::new(mask),
            descriptors,
        }
    }

    pub fn area(&self) -> usize {
        self.descriptors.area
    }

    pub fn major_axis_length(&self) -> f32 {
        self.descriptors.major_axis_length
    }

    /// `(height, width)` of the container grid
    pub fn dim(&self) -> (usize, usize) {
        self.mask.dim()
    }

    /// The occupancy of the empty container: every pixel outside the interior is unavailable.
    pub fn base_occupancy(&self) -> BinaryMask {
        self.mask.complement()
    }
}
