use crate::entities::{Container, Item};

/// A packing problem: a single container and the items that all need to fit in it.
#[derive(Clone, Debug)]
pub struct Instance {
    pub container: Container,
    /// Items in input order, `items[i].id == i`
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(container: Container, items: Vec<Item>) -> Self {
        assert!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "item ids should match their index"
        );
        Self { container, items }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn total_item_area(&self) -> usize {
        self.items.iter().map(|i| i.area()).sum()
    }
}
