//! Procedurally drawn connector sprites.
//!
//! Each sprite is a central body plus an arm running to the middle of every
//! side whose connector bit is set, so two adjacent filled cells always
//! meet edge to edge. Round styles use a disc body, sharp styles a square
//! (or a diamond for the twist variant). Twist variants shift every arm
//! sideways by the same amount, which keeps neighbouring arms aligned.

use image::{Rgba, RgbaImage};
use crate::domain::{Connectors, Style};

/// Ink used for every module shape
const INK: Rgba<u8> = Rgba([34, 34, 34, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Shape proportions, relative to the sprite size
const BODY_RADIUS: f32 = 0.22;
const ARM_WIDTH: f32 = 0.24;
const TWIST_OFFSET: f32 = 0.12;

/// Render the sprite for `style` and connector `index` at `size × size`
pub fn render_sprite(style: Style, index: u8, size: u32) -> RgbaImage {
    let connectors = Connectors::from_index(index);
    let size_f = size as f32;

    RgbaImage::from_fn(size, size, |x, y| {
        // sample at pixel centres, normalised to 0..1
        let u = (x as f32 + 0.5) / size_f;
        let v = (y as f32 + 0.5) / size_f;
        if covers(style, connectors, u, v) { INK } else { CLEAR }
    })
}

fn covers(style: Style, connectors: Connectors, u: f32, v: f32) -> bool {
    in_body(style, u - 0.5, v - 0.5) || in_arm(style, connectors, u, v)
}

fn in_body(style: Style, dx: f32, dy: f32) -> bool {
    match style {
        Style::Round | Style::RoundTwist => dx * dx + dy * dy <= BODY_RADIUS * BODY_RADIUS,
        Style::Sharp => dx.abs() <= BODY_RADIUS && dy.abs() <= BODY_RADIUS,
        Style::SharpTwist => dx.abs() + dy.abs() <= BODY_RADIUS * 1.4,
    }
}

fn in_arm(style: Style, connectors: Connectors, u: f32, v: f32) -> bool {
    let offset = if style.is_twist() { TWIST_OFFSET } else { 0.0 };
    let half = ARM_WIDTH / 2.0;
    let across_vertical = (u - 0.5 - offset).abs() <= half;
    let across_horizontal = (v - 0.5 - offset).abs() <= half;

    (connectors.north && across_vertical && v <= 0.5)
        || (connectors.south && across_vertical && v >= 0.5)
        || (connectors.west && across_horizontal && u <= 0.5)
        || (connectors.east && across_horizontal && u >= 0.5)
}
