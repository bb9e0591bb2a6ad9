use serde::{Deserialize, Serialize};

/// External representation of a [`BinaryMask`](crate::geometry::BinaryMask).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExtMask {
    /// One string per row: `#` or `1` for foreground, `.` or `0` for background
    Rows(Vec<String>),
    /// Row-major run-length encoding
    Rle(ExtRle),
}

/// Row-major run-length encoding of a binary mask.
/// Runs alternate between background and foreground, starting with a (possibly empty) background run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRle {
    pub height: usize,
    pub width: usize,
    pub counts: Vec<usize>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Identifier of the item, equal to its position in the list of items
    pub id: u64,
    /// Silhouette of the item
    pub mask: ExtMask,
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Silhouette of the container, foreground marks its interior
    pub container: ExtMask,
    /// Items given as separate masks
    #[serde(default)]
    pub items: Vec<ExtItem>,
    /// A single mask containing several objects, which are extracted as additional items
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scene: Option<ExtMask>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub item_id: u64,
    /// Counter-clockwise rotation of the item, in degrees
    pub angle_deg: f32,
    /// Row of the top-left corner of the rotated and trimmed item
    pub row: usize,
    /// Column of the top-left corner of the rotated and trimmed item
    pub col: usize,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Whether every item was placed
    pub success: bool,
    /// Human readable verdict
    pub verdict: String,
    /// Committed placements, in the order they were made
    pub placements: Vec<ExtPlacement>,
    /// Occupancy of the container at success or at the first failure, absent if no search was run
    pub final_mask: Option<ExtMask>,
    /// Time in milliseconds from the start of the run until the solution was created
    pub run_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn instance_with_both_mask_forms() {
        let json = json!({
            "name": "mixed",
            "container": {"rle": {"height": 2, "width": 3, "counts": [1, 5]}},
            "items": [{"id": 0, "mask": {"rows": ["##", "#."]}}]
        });
        let ext: ExtInstance = serde_json::from_value(json).unwrap();
        assert_eq!(
            ext.container,
            ExtMask::Rle(ExtRle {
                height: 2,
                width: 3,
                counts: vec![1, 5]
            })
        );
        assert_eq!(ext.items[0].mask, ExtMask::Rows(vec!["##".into(), "#.".into()]));
        assert!(ext.scene.is_none());
    }
}
