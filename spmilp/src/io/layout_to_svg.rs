use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Line, Text, Title};

use strip_milp::entities::{SPInstance, SPSolution};
use strip_milp::geometry::Rect;

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Draws the strip and every placed rectangle.
/// The layout uses a y-axis pointing up, so every coordinate is mirrored into svg space (y pointing down).
pub fn layout_to_svg(
    instance: &SPInstance,
    solution: &SPSolution,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let (length, width) = (solution.strip_length, solution.strip_width);
    let min_dim = f64::min(length, width);
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    //strip coordinates to svg coordinates
    let to_svg = |r: &Rect| (r.x_min, width - r.y_max, r.width(), r.height());

    let label = {
        let label_content = format!(
            "length: {:.3} | width: {:.3} | density: {:.3}% | {}",
            length,
            width,
            solution.density(instance) * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * min_dim)
            .set("font-size", min_dim * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let strip_group = Group::new()
        .set("id", "strip")
        .add(svg_util::rect(
            0.0,
            0.0,
            length,
            width,
            &[
                ("fill", &*theme.strip_fill.to_string()),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "strip, length: {length:.3}, width: {width:.3}"
        )));

    let placed = instance
        .rectangles()
        .iter()
        .zip(solution.placements.iter())
        .map(|(r, p)| (r, p, r.placed_at(p)))
        .collect_vec();

    let mut rects_group = Group::new().set("id", "rectangles");
    for (r, p, shape) in &placed {
        let (x, y, w, h) = to_svg(shape);
        let mut group = Group::new()
            .set("id", format!("rect_{}", r.id))
            .add(svg_util::rect(
                x,
                y,
                w,
                h,
                &[
                    ("fill", &*theme.rect_fill.to_string()),
                    ("fill-opacity", "0.8"),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ))
            .add(Title::new(format!(
                "rectangle, id: {}, length: {:.3}, height: {:.3}, upper-left: ({:.3}, {:.3})",
                r.id, r.length, r.height, p.x, p.y
            )));
        if options.ids {
            let font_size = f64::min(w, h) * 0.4;
            group = group.add(
                Text::new(format!("{}", r.id))
                    .set("x", x + 0.5 * w)
                    .set("y", y + 0.5 * h)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        rects_group = rects_group.add(group);
    }

    let relations_group = match options.relations {
        false => None,
        true => {
            let center = |id: u64| {
                placed.iter().find(|(r, _, _)| r.id == id).map(|(_, _, s)| {
                    let (x, y, w, h) = to_svg(s);
                    (x + 0.5 * w, y + 0.5 * h)
                })
            };
            let group = solution
                .relations
                .iter()
                .filter_map(|pr| Some((pr, center(pr.i)?, center(pr.j)?)))
                .fold(Group::new().set("id", "relations"), |g, (pr, a, b)| {
                    g.add(
                        Line::new()
                            .set("x1", a.0)
                            .set("y1", a.1)
                            .set("x2", b.0)
                            .set("y2", b.1)
                            .set("stroke", theme.relation_color.to_string())
                            .set("stroke-opacity", "0.6")
                            .set("stroke-width", stroke_width)
                            .set(
                                "stroke-dasharray",
                                format!("{} {}", 4.0 * stroke_width, 4.0 * stroke_width),
                            )
                            .add(Title::new(format!(
                                "{} lies {} of {}",
                                pr.j, pr.relation, pr.i
                            ))),
                    )
                });
            Some(group)
        }
    };

    //10% margin around the strip
    let vbox = (
        -0.05 * length,
        -0.05 * width - 0.05 * min_dim,
        1.10 * length,
        1.10 * width + 0.05 * min_dim,
    );

    let document = Document::new()
        .set("viewBox", vbox)
        .add(strip_group)
        .add(rects_group);

    match relations_group {
        Some(g) => document.add(g).add(label),
        None => document.add(label),
    }
}
