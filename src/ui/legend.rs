use crate::domain::Style;
use super::{LEGEND_LINE_HEIGHT, LEGEND_RIGHT_OFFSET, LEGEND_SECTION_GAP, LEGEND_TOP};

/// Control hints listed under the modes
const CONTROL_HINTS: [&str; 4] = [
    "Draw - Drag",
    "Erase - Alt + Drag",
    "G - Show Grid",
    "C - Clear",
];

/// One positioned line of legend text.
/// `y` is the top of the line; the renderer converts to a baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub highlighted: bool,
}

/// Lay out the legend for a screen of the given width.
///
/// Heading, one line per style (the active one highlighted), a gap, then
/// the control hints.
pub fn legend_lines(active: Style, screen_width: f32) -> Vec<LegendLine> {
    let x = screen_width - LEGEND_RIGHT_OFFSET;
    let mut y = LEGEND_TOP;
    let mut lines = Vec::with_capacity(1 + Style::ALL.len() + CONTROL_HINTS.len());

    let mut push = |text: String, highlighted: bool, y: &mut f32| {
        lines.push(LegendLine { text, x, y: *y, highlighted });
        *y += LEGEND_LINE_HEIGHT;
    };

    push("MODE:".to_owned(), false, &mut y);
    for style in Style::ALL {
        let text = format!("{} - {}", style.select_digit(), style.label());
        push(text, style == active, &mut y);
    }

    y += LEGEND_SECTION_GAP;
    for hint in CONTROL_HINTS {
        push(hint.to_owned(), false, &mut y);
    }

    lines
}
