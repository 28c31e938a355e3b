use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Text, Title};

use crate::entities::{Instance, Solution};
use crate::geometry::primitives::Point;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgTheme,
    ///Write the name of every piece at its position
    #[serde(default)]
    pub labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f32,
    pub frame_fill: Color,
    pub piece_fill: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::EARTH_TONES
    }
}

impl SvgTheme {
    pub const EARTH_TONES: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        frame_fill: Color(0xCC, 0x82, 0x4A),
        piece_fill: Color(0xFF, 0xC8, 0x79),
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        frame_fill: Color(0xD3, 0xD3, 0xD3),
        piece_fill: Color(0x7A, 0x7A, 0x7A),
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Draws the frame at `frame_index` together with all pieces placed in it.
/// The y-axis points upwards, as in frame coordinates.
pub fn frame_to_svg(
    instance: &Instance,
    solution: &Solution,
    frame_index: usize,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let frame = instance.frame(frame_index);
    let (width, height) = (frame.width() as f32, frame.height() as f32);
    let margin = 0.05 * f32::max(width, height);
    let theme = &options.theme;
    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(width, height) * 0.025;

    //flip the y-axis
    let to_svg = |p: Point| (p.0 as f32, height - p.1 as f32);

    let placed_area: f64 = solution
        .placements_in(frame_index)
        .map(|p| p.piece.area())
        .sum();

    let label = Text::new(format!(
        "frame {frame_index}: {width:.3} x {height:.3} | usage: {:.3}% | {title}",
        placed_area / frame.area() * 100.0
    ))
    .set("x", 0.0_f32)
    .set("y", -0.5 * font_size)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let frame_group = Group::new()
        .set("id", format!("frame_{frame_index}"))
        .add(
            Path::new()
                .set("d", polygon_data(frame.rect().corners().map(to_svg)))
                .set("fill", theme.frame_fill.to_string())
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!("frame {frame_index}")));

    let pieces_group = solution
        .placements_in(frame_index)
        .enumerate()
        .fold(Group::new().set("id", "pieces"), |group, (i, placement)| {
            let piece = &placement.piece;
            let mut piece_group = Group::new()
                .set("id", format!("piece_{i}"))
                .add(
                    Path::new()
                        .set("d", polygon_data(piece.vertices().iter().map(|&p| to_svg(p))))
                        .set("fill", theme.piece_fill.to_string())
                        .set("fill-opacity", 0.9_f32)
                        .set("stroke", "black")
                        .set("stroke-width", stroke_width),
                )
                .add(Title::new(format!(
                    "{}, anchor: {}, area: {:.3}",
                    piece.name(),
                    placement.anchor,
                    piece.area()
                )));
            if options.labels {
                let bbox = piece.bbox();
                let (x, y) = to_svg(Point(
                    bbox.x_min + 0.5 * bbox.width(),
                    bbox.y_min + 0.5 * bbox.height(),
                ));
                piece_group = piece_group.add(
                    Text::new(piece.name().to_string())
                        .set("x", x)
                        .set("y", y)
                        .set("font-size", 0.5 * font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle"),
                );
            }
            group.add(piece_group)
        });

    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin - font_size,
                width + 2.0 * margin,
                height + 2.0 * margin + font_size,
            ),
        )
        .add(frame_group)
        .add(pieces_group)
        .add(label)
}

fn polygon_data(points: impl IntoIterator<Item = (f32, f32)>) -> Data {
    let mut points = points.into_iter();
    let data = match points.next() {
        Some(first) => Data::new().move_to(first),
        None => return Data::new(),
    };
    points.fold(data, |data, p| data.line_to(p)).close()
}
