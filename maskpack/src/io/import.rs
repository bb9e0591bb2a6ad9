use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{debug, warn};
use ndarray::Array2;

use crate::entities::{Container, Instance, Item};
use crate::geometry::{self, BinaryMask};
use crate::io::ext_repr::{ExtInstance, ExtItem, ExtMask, ExtRle};
use crate::util::ImportConfig;

/// Converts external representations of items, containers and scenes into internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    pub config: ImportConfig,
}

impl Importer {
    pub fn new(config: ImportConfig) -> Importer {
        Importer { config }
    }

    pub fn import_container(&self, ext_mask: &ExtMask) -> Result<Container> {
        let mask = import_mask(ext_mask).context("invalid container mask")?;
        if mask.is_blank() {
            warn!("[IMPORT] container mask has no interior");
        }
        Ok(Container::new(mask))
    }

    /// Imports an item as is, its mask is expected to be tight around the silhouette.
    pub fn import_item(&self, ext_item: &ExtItem) -> Result<Item> {
        let mask = import_mask(&ext_item.mask)
            .with_context(|| format!("invalid mask for item {}", ext_item.id))?;
        if let Some(bbox) = mask.bbox() {
            if bbox.height() != mask.height() || bbox.width() != mask.width() {
                debug!(
                    "[IMPORT] mask of item {} is not tight ({bbox} in {:?}), trimming",
                    ext_item.id,
                    mask.dim()
                );
            }
        }
        let mask = mask.trimmed().unwrap_or(mask);
        Ok(Item::new(ext_item.id as usize, mask))
    }

    /// Splits a scene into object silhouettes.
    /// Components rejected by the [`ComponentFilter`](crate::util::ComponentFilter) are dropped,
    /// the others are optionally hole-filled. Item ids start at `first_id` and follow the component order.
    pub fn extract_scene_items(&self, ext_scene: &ExtMask, first_id: usize) -> Result<Vec<Item>> {
        let scene = import_mask(ext_scene).context("invalid scene mask")?;
        let components = geometry::label_components(&scene);
        let n_components = components.len();

        let items = components
            .into_iter()
            .filter(|c| self.config.component_filter.accepts(c))
            .enumerate()
            .map(|(i, c)| {
                let mask = match self.config.fill_holes {
                    true => geometry::fill_holes(&c.mask),
                    false => c.mask,
                };
                Item::new(first_id + i, mask)
            })
            .collect_vec();

        debug!(
            "[IMPORT] scene contains {n_components} components, {} accepted as items",
            items.len()
        );
        Ok(items)
    }

    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<Instance> {
        let container = self.import_container(&ext_instance.container)?;

        ensure!(
            ext_instance
                .items
                .iter()
                .enumerate()
                .all(|(i, item)| item.id == i as u64),
            "item ids should be 0..n in order of appearance"
        );

        let mut items: Vec<Item> = ext_instance
            .items
            .iter()
            .map(|ext_item| self.import_item(ext_item))
            .collect::<Result<_>>()?;

        if let Some(scene) = &ext_instance.scene {
            let scene_items = self.extract_scene_items(scene, items.len())?;
            items.extend(scene_items);
        }

        Ok(Instance::new(container, items))
    }
}

/// Converts an external mask into a [`BinaryMask`], failing on malformed input.
pub fn import_mask(ext_mask: &ExtMask) -> Result<BinaryMask> {
    let mask = match ext_mask {
        ExtMask::Rows(rows) => BinaryMask::from_rows(rows)?,
        ExtMask::Rle(rle) => decode_rle(rle)?,
    };
    ensure!(
        mask.height() > 0 && mask.width() > 0,
        "mask has zero-sized dimensions {:?}",
        mask.dim()
    );
    Ok(mask)
}

fn decode_rle(rle: &ExtRle) -> Result<BinaryMask> {
    let ExtRle {
        height,
        width,
        counts,
    } = rle;
    let n_pixels = height
        .checked_mul(*width)
        .with_context(|| format!("rle dimensions {height}x{width} are too large"))?;
    let total = counts
        .iter()
        .try_fold(0usize, |acc, &run| acc.checked_add(run))
        .context("rle counts overflow")?;
    ensure!(
        total == n_pixels,
        "rle counts sum to {total}, expected {n_pixels}"
    );

    let mut flat = Vec::with_capacity(total);
    for (i, &run) in counts.iter().enumerate() {
        //even runs are background, odd runs foreground
        flat.extend(std::iter::repeat_n(i % 2 == 1, run));
    }
    let pixels = Array2::from_shape_vec((*height, *width), flat)?;
    Ok(BinaryMask::new(pixels))
}
