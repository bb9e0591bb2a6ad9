use serde::{Deserialize, Serialize};

use crate::geometry::Component;

/// Rule deciding which connected components of a scene mask are objects.
/// Components that are too small are noise. Components starting near the top edge of the scene
/// belong to the background (the table and its shadow) and are excluded as well.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ComponentFilter {
    /// Minimum number of pixels of an object component
    pub min_area: usize,
    /// First row at which the bounding box of an object component may start
    pub min_bbox_row: usize,
}

impl ComponentFilter {
    pub fn accepts(&self, component: &Component) -> bool {
        component.area >= self.min_area && component.bbox.row_min >= self.min_bbox_row
    }
}

impl Default for ComponentFilter {
    fn default() -> Self {
        Self {
            min_area: 1001,
            min_bbox_row: 51,
        }
    }
}

/// Configuration of the conversion of external masks into items and containers
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ImportConfig {
    /// Filter applied to the components of a scene mask
    #[serde(default)]
    pub component_filter: ComponentFilter,
    /// Fill enclosed background regions of masks extracted from a scene
    #[serde(default = "default_fill_holes")]
    pub fill_holes: bool,
}

fn default_fill_holes() -> bool {
    true
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            component_filter: ComponentFilter::default(),
            fill_holes: default_fill_holes(),
        }
    }
}
