use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    A2,
    B1,
    B2,
    C1,
}

/// Display hint attached to each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Yellow,
    Blue,
    Red,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            Level::C1 => ColorTag::Green,
            Level::B2 => ColorTag::Yellow,
            Level::B1 => ColorTag::Blue,
            Level::A2 => ColorTag::Red,
        }
    }
}

impl ColorTag {
    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Green => "green",
            ColorTag::Yellow => "yellow",
            ColorTag::Blue => "blue",
            ColorTag::Red => "red",
        }
    }

    pub fn ansi_code(self) -> &'static str {
        match self {
            ColorTag::Green => "32",
            ColorTag::Yellow => "33",
            ColorTag::Blue => "34",
            ColorTag::Red => "31",
        }
    }
}

/// Highest level first, the order reports list them in.
pub fn level_order() -> &'static [Level] {
    &[Level::C1, Level::B2, Level::B1, Level::A2]
}
