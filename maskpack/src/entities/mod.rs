mod container;
mod instance;
mod item;
mod layout;
mod placed_item;
mod solution;

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use layout::{Layout, LayoutSnapshot};
#[doc(inline)]
pub use placed_item::{PlacedItem, Placement};
#[doc(inline)]
pub use solution::{PackingVerdict, Solution};
