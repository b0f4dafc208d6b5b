use crate::io::svg_util::SvgDrawOptions;
use cutstock::io::ext_repr::{ExtBin, ExtPlacement};
use cutstock::stats::UnitStats;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Height of the strip a bar is drawn as, relative to its length
const BAR_ASPECT: f32 = 0.04;

/// Draws a single bin of an exported plan.
/// Panels are drawn to scale, bars as a strip with every cut spanning its full height.
pub fn bin_to_svg(
    bin: &ExtBin,
    stats: &UnitStats,
    kerf: u32,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = options.theme.layout_theme();

    let bin_w = bin.w as f32;
    let bin_h = match bin.h {
        Some(h) => h as f32,
        None => f32::max(bin_w * BAR_ASPECT, 1.0),
    };

    let margin = 0.05 * f32::max(bin_w, bin_h);
    let stroke_width = f32::min(bin_w, bin_h) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(bin_w, bin_h) * 0.025;

    let label = {
        let kind = match bin.h {
            Some(_) => "panel",
            None => "bar",
        };
        let label_content = format!(
            "{kind} {} | {} x {} | parts: {} | fill: {:.2}% | {}",
            bin.index,
            bin.w,
            bin.h.map_or("-".to_string(), |h| h.to_string()),
            stats.n_parts,
            stats.fill_bp as f32 / 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let bin_group = Group::new()
        .set("id", format!("bin_{}", bin.index))
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", bin_w)
                .set("height", bin_h)
                .set("fill", theme.bin_fill.to_string())
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!("bin {}", bin.index)));

    let placement_rect = |p: &ExtPlacement| -> (f32, f32, f32, f32) {
        let x = p.x as f32;
        let w = p.w as f32;
        match (p.y, p.h) {
            (Some(y), Some(h)) => (x, bin_h - y as f32 - h as f32, w, h as f32),
            _ => (x, 0.0, w, bin_h),
        }
    };

    let kerf_group = match options.kerf_margin && kerf > 0 {
        false => None,
        true => {
            let group = bin.placements.iter().fold(
                Group::new().set("id", "kerf"),
                |group, p| {
                    let (x, y, w, h) = placement_rect(p);
                    let k = kerf as f32;
                    // kerf lies to the right of and above each part, clipped by the bin
                    let right_w = f32::min(k, bin_w - (x + w)).max(0.0);
                    let top_h = match p.h {
                        Some(_) => f32::min(k, y).max(0.0),
                        None => 0.0,
                    };
                    let style = |r: Rectangle| {
                        r.set("fill", theme.kerf_fill().to_string())
                            .set("fill-opacity", 0.6)
                    };
                    group
                        .add(style(
                            Rectangle::new()
                                .set("x", x + w)
                                .set("y", y - top_h)
                                .set("width", right_w)
                                .set("height", h + top_h),
                        ))
                        .add(style(
                            Rectangle::new()
                                .set("x", x)
                                .set("y", y - top_h)
                                .set("width", w)
                                .set("height", top_h),
                        ))
                },
            );
            Some(group)
        }
    };

    let parts_group = bin.placements.iter().fold(
        Group::new().set("id", "parts"),
        |group, p| {
            let (x, y, w, h) = placement_rect(p);
            let fill = match p.rotated {
                true => theme.rotated_part_fill(),
                false => theme.part_fill,
            };
            let mut part = Group::new()
                .set("id", format!("part_{}", p.part_id))
                .add(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", w)
                        .set("height", h)
                        .set("fill", fill.to_string())
                        .set("stroke", "black")
                        .set("stroke-width", stroke_width),
                )
                .add(Title::new(placement_title(p)));
            if options.labels {
                let size = f32::min(font_size, 0.3 * f32::min(w, h));
                part = part.add(
                    Text::new(format!("{}", p.part_id))
                        .set("x", x + 0.5 * w)
                        .set("y", y + 0.5 * h)
                        .set("font-size", size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("fill", theme.label_fill.to_string()),
                );
            }
            group.add(part)
        },
    );

    let vbox_svg = (
        -margin,
        -margin - font_size,
        bin_w + 2.0 * margin,
        bin_h + 2.0 * margin + font_size,
    );

    let mut document = Document::new()
        .set("viewBox", vbox_svg)
        .add(bin_group)
        .add(parts_group);
    if let Some(kerf_group) = kerf_group {
        document = document.add(kerf_group);
    }
    document.add(label)
}

fn placement_title(p: &ExtPlacement) -> String {
    let mut title = match (p.y, p.h) {
        (Some(y), Some(h)) => format!("part {}: {}x{} at ({}, {})", p.part_id, p.w, h, p.x, y),
        _ => format!("part {}: {} mm at {} mm", p.part_id, p.w, p.x),
    };
    if p.rotated {
        title.push_str(", rotated");
    }
    if let Some(material) = &p.material {
        title.push_str(&format!(", {material}"));
    }
    if let Some(thickness) = p.thickness {
        title.push_str(&format!(", {thickness} mm thick"));
    }
    title
}
