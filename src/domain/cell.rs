/// Style is one of the four module families a cell can be painted with.
/// Each family ships its own 16-sprite connector set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Style {
    #[default]
    Round,
    RoundTwist,
    Sharp,
    SharpTwist,
}

impl Style {
    /// All styles in legend / select-key order
    pub const ALL: [Style; 4] = [
        Style::Round,
        Style::RoundTwist,
        Style::Sharp,
        Style::SharpTwist,
    ];

    /// Human readable name shown in the legend
    pub const fn label(self) -> &'static str {
        match self {
            Style::Round => "Round",
            Style::RoundTwist => "Round Twist",
            Style::Sharp => "Sharp",
            Style::SharpTwist => "Sharp Twist",
        }
    }

    /// File name prefix of this style's sprites (`A_00.png` .. `D_15.png`)
    pub const fn asset_prefix(self) -> char {
        match self {
            Style::Round => 'A',
            Style::RoundTwist => 'B',
            Style::Sharp => 'C',
            Style::SharpTwist => 'D',
        }
    }

    /// Digit key that selects this style
    pub const fn select_digit(self) -> u8 {
        match self {
            Style::Round => 1,
            Style::RoundTwist => 2,
            Style::Sharp => 3,
            Style::SharpTwist => 4,
        }
    }

    pub const fn is_round(self) -> bool {
        matches!(self, Style::Round | Style::RoundTwist)
    }

    pub const fn is_twist(self) -> bool {
        matches!(self, Style::RoundTwist | Style::SharpTwist)
    }
}

/// Cell is one addressable grid position: either empty or holding a module.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Module(Style),
}

impl Cell {
    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Module(_))
    }

    /// The module style, if any
    pub const fn style(self) -> Option<Style> {
        match self {
            Cell::Module(style) => Some(style),
            Cell::Empty => None,
        }
    }
}

impl From<Style> for Cell {
    fn from(style: Style) -> Self {
        Cell::Module(style)
    }
}
