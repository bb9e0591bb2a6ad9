use std::fmt::Display;

use log::debug;

use crate::entities::{Container, Instance, Item};

/// Reason why an instance can be rejected without searching for a packing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Infeasibility {
    /// The items together cover more pixels than the container offers
    Area { total_item_area: usize, container_area: usize },
    /// An item is longer than the container in every orientation
    Extent { item_id: usize, item_length: f32, container_length: f32 },
    /// The container has no interior while there are items to place
    EmptyContainer,
}

impl Display for Infeasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Infeasibility::Area {
                total_item_area,
                container_area,
            } => write!(
                f,
                "total item area {total_item_area} exceeds container area {container_area}"
            ),
            Infeasibility::Extent {
                item_id,
                item_length,
                container_length,
            } => write!(
                f,
                "major axis of item {item_id} ({item_length:.2}) exceeds that of the container ({container_length:.2})"
            ),
            Infeasibility::EmptyContainer => write!(f, "container has no interior"),
        }
    }
}

/// Fails if the summed area of all items exceeds the area of the container.
pub fn check_aggregate_area(items: &[Item], container: &Container) -> bool {
    let total: usize = items.iter().map(|i| i.area()).sum();
    total <= container.area()
}

/// Fails if any item's major axis is longer than the container's.
pub fn check_max_extent(items: &[Item], container: &Container) -> bool {
    extent_violator(items, container).is_none()
}

/// First item whose major axis is longer than the container's, if any
pub fn extent_violator<'a>(items: &'a [Item], container: &Container) -> Option<&'a Item> {
    items
        .iter()
        .find(|i| i.major_axis_length() > container.major_axis_length())
}

/// Runs all necessary conditions, in order of cost.
/// Passing does not imply that a packing exists.
pub fn check(instance: &Instance) -> Result<(), Infeasibility> {
    let Instance { container, items } = instance;

    if container.area() == 0 && !items.is_empty() {
        return Err(Infeasibility::EmptyContainer);
    }

    if !check_aggregate_area(items, container) {
        return Err(Infeasibility::Area {
            total_item_area: instance.total_item_area(),
            container_area: container.area(),
        });
    }

    if let Some(item) = extent_violator(items, container) {
        return Err(Infeasibility::Extent {
            item_id: item.id,
            item_length: item.major_axis_length(),
            container_length: container.major_axis_length(),
        });
    }

    debug!(
        "[FEAS] {} items pass the area ({} <= {}) and extent checks",
        items.len(),
        instance.total_item_area(),
        container.area()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BinaryMask;

    fn items(masks: Vec<BinaryMask>) -> Vec<Item> {
        masks
            .into_iter()
            .enumerate()
            .map(|(i, m)| Item::new(i, m))
            .collect()
    }

    #[test]
    fn area_exceeded() {
        let container = Container::new(BinaryMask::filled(10, 10));
        let items = items(vec![BinaryMask::filled(6, 9), BinaryMask::filled(9, 6)]);
        assert!(!check_aggregate_area(&items, &container));
        assert!(check_max_extent(&items, &container));
        assert_eq!(
            check(&Instance::new(container, items)),
            Err(Infeasibility::Area {
                total_item_area: 108,
                container_area: 100
            })
        );
    }

    #[test]
    fn extent_exceeded_regardless_of_area() {
        let container = Container::new(BinaryMask::filled(20, 20));
        let items = items(vec![BinaryMask::filled(1, 40)]);
        assert!(check_aggregate_area(&items, &container));
        assert!(!check_max_extent(&items, &container));
        assert!(matches!(
            check(&Instance::new(container, items)),
            Err(Infeasibility::Extent { item_id: 0, .. })
        ));
    }

    #[test]
    fn empty_container_with_items() {
        let container = Container::new(BinaryMask::empty(5, 5));
        let items = items(vec![BinaryMask::empty(1, 1)]);
        assert_eq!(
            check(&Instance::new(container, items)),
            Err(Infeasibility::EmptyContainer)
        );
    }

    #[test]
    fn empty_container_without_items() {
        let container = Container::new(BinaryMask::empty(5, 5));
        assert_eq!(check(&Instance::new(container, vec![])), Ok(()));
    }
}
