use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{Layout, LayoutSnapshot};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

pub fn s_layout_to_svg(s_layout: &LayoutSnapshot, options: SvgDrawOptions, title: &str) -> Document {
    let layout = Layout::from_snapshot(s_layout);
    layout_to_svg(&layout, options, title)
}

/// Renders the container and all placed items, one pixel per unit.
pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let container = &layout.container;
    let theme = options.theme.get_theme();
    let (height, width) = container.dim();
    let (hf, wf) = (height as f32, width as f32);

    let margin = 0.05 * f32::max(hf, wf);
    let font_size = f32::max(0.025 * f32::min(hf, wf), 1.0);

    let label = {
        let label_content = format!(
            "height: {height} | width: {width} | items: {} | density: {:.3}% | {title}",
            layout.placed_items().len(),
            layout.density() * 100.0,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * margin)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container_group = {
        let mut group = Group::new().set("id", "container").add(Title::new(format!(
            "container, area: {}, major axis: {:.3}",
            container.area(),
            container.major_axis_length()
        )));
        if options.draw_exterior {
            group = group.add(svg_util::data_to_path(
                svg_util::mask_data(&container.base_occupancy(), (0, 0)),
                &[("fill", &*format!("{}", theme.exterior_fill))],
            ));
        }
        group.add(svg_util::data_to_path(
            svg_util::mask_data(&container.mask, (0, 0)),
            &[("fill", &*format!("{}", theme.container_fill))],
        ))
    };

    let items_group = {
        let mut group = Group::new().set("id", "items");
        for (i, pi) in layout.placed_items().iter().enumerate() {
            let fill = match options.color_items {
                true => svg_util::item_color(theme.item_fill, i),
                false => theme.item_fill,
            };
            let item_group = Group::new()
                .set("id", format!("item_{}", pi.item_id))
                .add(Title::new(format!(
                    "item, id: {}, transf: [{}], area: {}",
                    pi.item_id,
                    pi.r_transf,
                    pi.footprint.area()
                )))
                .add(svg_util::data_to_path(
                    svg_util::mask_data(&pi.footprint, pi.r_transf.translation),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke", &*format!("{}", theme.item_stroke)),
                        ("stroke-width", "0.05"),
                        ("stroke-opacity", "0.3"),
                    ],
                ));
            group = group.add(item_group);
        }
        group
    };

    Document::new()
        .set(
            "viewBox",
            (-margin, -margin, wf + 2.0 * margin, hf + 2.0 * margin),
        )
        .set("shape-rendering", "crispEdges")
        .add(container_group)
        .add(items_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entities::{Container, Placement};
    use crate::geometry::{BinaryMask, RTransformation};
    use crate::io::svg::svg_util::{SvgLayoutTheme, SvgLayoutThemes};

    #[test]
    fn selected_theme_is_rendered() {
        let mut layout = Layout::new(Container::new(BinaryMask::filled(4, 4)));
        layout.place_item(
            Placement {
                item_id: 0,
                r_transf: RTransformation::new(0.0, (1, 1)),
            },
            Arc::new(BinaryMask::filled(2, 2)),
        );
        let options = SvgDrawOptions {
            theme: SvgLayoutThemes::Gray,
            color_items: false,
            draw_exterior: false,
        };
        let rendered = layout_to_svg(&layout, options, "gray").to_string();

        let gray = SvgLayoutTheme::GRAY;
        assert!(rendered.contains(&gray.item_fill.to_string()));
        assert!(rendered.contains(&gray.container_fill.to_string()));
        assert!(!rendered.contains(&SvgLayoutTheme::EARTH_TONES.item_fill.to_string()));
    }
}
