use std::sync::Arc;

use crate::geometry::{BinaryMask, MaskDescriptors};

/// Object to be packed: a silhouette mask with its shape descriptors.
/// Items are never mutated once created.
#[derive(Clone, Debug)]
pub struct Item {
    pub id: usize,
    /// Silhouette of the item, `true` marks the object
    pub mask: Arc<BinaryMask>,
    /// Descriptors of `mask`, computed once at creation
    pub descriptors: MaskDescriptors,
}

impl Item {
    pub fn new(id: usize, mask: BinaryMask) -> Item {
        let descriptors = MaskDescriptors::from_mask(&mask);
        Item {
            id,
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

    /// An item without any foreground pixel occupies nothing and can always be placed
    pub fn is_degenerate(&self) -> bool {
        self.descriptors.area == 0
    }
}
