mod bbox;
mod components;
mod descriptors;
mod mask;
mod r_transformation;
mod rotation;

#[doc(inline)]
pub use bbox::MaskBBox;
#[doc(inline)]
pub use components::{Component, fill_holes, label_components};
#[doc(inline)]
pub use descriptors::MaskDescriptors;
#[doc(inline)]
pub use mask::BinaryMask;
#[doc(inline)]
pub use r_transformation::RTransformation;
#[doc(inline)]
pub use rotation::{rotate_and_trim, rotate_mask};
