//! The position and size constraint model.
//!
//! Every widget carries a [`Pos`] for each axis and a [`Dim`] for each extent.
//! These are plain tagged unions; the generated-script syntax (`Pos::At(2)`,
//! `Dim::Fill()`, ...) is produced by the `Display` impls and consumed by the
//! `parse` functions, and the two are kept mutually consistent: parsing an
//! encoded constraint always reproduces the original value.

use std::fmt;

/// Which edge of another widget a position is anchored to.
///
/// The ordinals (left = 0, top = 1, right = 2, bottom = 3) are internal; they
/// only have to stay consistent between here and the editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
        }
    }
}

/// A position constraint along one axis.
#[derive(Clone, Debug, PartialEq)]
pub enum Pos {
    /// An absolute offset from the parent's origin.
    At(i32),
    /// Anchored to the far edge of the parent.
    AnchorEnd,
    /// Anchored to an edge of another widget, identified by its id.
    Edge(Side, String),
}

impl Pos {
    /// Parse the generated-script form of a position constraint.
    pub fn parse(s: &str) -> Option<Pos> {
        let (name, argument) = split_call(s.strip_prefix("Pos::")?)?;

        match name {
            "At" => argument.parse().ok().map(Pos::At),
            "AnchorEnd" => argument.is_empty().then_some(Pos::AnchorEnd),
            "Left" => Some(Pos::Edge(Side::Left, argument.to_owned())),
            "Top" => Some(Pos::Edge(Side::Top, argument.to_owned())),
            "Right" => Some(Pos::Edge(Side::Right, argument.to_owned())),
            "Bottom" => Some(Pos::Edge(Side::Bottom, argument.to_owned())),
            _ => None,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pos::At(value) => write!(f, "Pos::At({value})"),
            Pos::AnchorEnd => write!(f, "Pos::AnchorEnd()"),
            Pos::Edge(side, target) => write!(f, "Pos::{}({target})", side.name()),
        }
    }
}

/// A size constraint along one axis. Sizes never reference other widgets.
#[derive(Clone, Debug, PartialEq)]
pub enum Dim {
    /// An absolute size in cells.
    Sized(i32),
    /// Fill the remaining space in the parent.
    Fill,
    /// A fraction of the parent's size, stored and displayed as a raw
    /// fraction (0.5, not 50).
    Percent(f32),
}

impl Dim {
    /// Parse the generated-script form of a size constraint.
    pub fn parse(s: &str) -> Option<Dim> {
        let (name, argument) = split_call(s.strip_prefix("Dim::")?)?;

        match name {
            "Sized" => argument.parse().ok().map(Dim::Sized),
            "Fill" => argument.is_empty().then_some(Dim::Fill),
            "Percent" => argument.parse().ok().map(Dim::Percent),
            _ => None,
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Sized(value) => write!(f, "Dim::Sized({value})"),
            Dim::Fill => write!(f, "Dim::Fill()"),
            Dim::Percent(fraction) => write!(f, "Dim::Percent({fraction})"),
        }
    }
}

/// Split `Name(argument)` into its parts. The whole string must be consumed.
fn split_call(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let rest = &s[open + 1..];
    let close = rest.find(')')?;
    if !rest[close + 1..].trim().is_empty() {
        return None;
    }

    Some((&s[..open], rest[..close].trim()))
}

/// The closed set of position kinds offered by the position editor, in the
/// order the editor lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosKind {
    AnchorEnd,
    At,
    Bottom,
    Left,
    Right,
    Top,
}

impl PosKind {
    pub const ALL: [PosKind; 6] = [
        PosKind::AnchorEnd,
        PosKind::At,
        PosKind::Bottom,
        PosKind::Left,
        PosKind::Right,
        PosKind::Top,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PosKind::AnchorEnd => "AnchorEnd",
            PosKind::At => "At",
            PosKind::Bottom => "Bottom",
            PosKind::Left => "Left",
            PosKind::Right => "Right",
            PosKind::Top => "Top",
        }
    }

    /// Whether this kind takes a numeric value.
    pub fn needs_value(self) -> bool {
        matches!(self, PosKind::At)
    }

    /// Whether this kind takes a reference to another widget.
    pub fn needs_target(self) -> bool {
        !matches!(self, PosKind::At | PosKind::AnchorEnd)
    }

    pub fn of(pos: &Pos) -> PosKind {
        match pos {
            Pos::At(_) => PosKind::At,
            Pos::AnchorEnd => PosKind::AnchorEnd,
            Pos::Edge(Side::Left, _) => PosKind::Left,
            Pos::Edge(Side::Top, _) => PosKind::Top,
            Pos::Edge(Side::Right, _) => PosKind::Right,
            Pos::Edge(Side::Bottom, _) => PosKind::Bottom,
        }
    }

    /// Build a [`Pos`] from the editor's `{kind, value, target}` triple.
    pub fn encode(self, value: i32, target: &str) -> Pos {
        match self {
            PosKind::At => Pos::At(value),
            PosKind::AnchorEnd => Pos::AnchorEnd,
            PosKind::Left => Pos::Edge(Side::Left, target.to_owned()),
            PosKind::Top => Pos::Edge(Side::Top, target.to_owned()),
            PosKind::Right => Pos::Edge(Side::Right, target.to_owned()),
            PosKind::Bottom => Pos::Edge(Side::Bottom, target.to_owned()),
        }
    }
}

/// The closed set of size kinds offered by the size editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimKind {
    Absolute,
    Fill,
    Percent,
}

impl DimKind {
    pub const ALL: [DimKind; 3] = [DimKind::Absolute, DimKind::Fill, DimKind::Percent];

    pub fn label(self) -> &'static str {
        match self {
            DimKind::Absolute => "Absolute",
            DimKind::Fill => "Fill",
            DimKind::Percent => "Percent",
        }
    }

    pub fn needs_value(self) -> bool {
        !matches!(self, DimKind::Fill)
    }

    pub fn of(dim: &Dim) -> DimKind {
        match dim {
            Dim::Sized(_) => DimKind::Absolute,
            Dim::Fill => DimKind::Fill,
            Dim::Percent(_) => DimKind::Percent,
        }
    }

    /// Build a [`Dim`] from the editor's `{kind, value}` pair.
    pub fn encode(self, value: f32) -> Dim {
        match self {
            DimKind::Absolute => Dim::Sized(value as i32),
            DimKind::Fill => Dim::Fill,
            DimKind::Percent => Dim::Percent(value),
        }
    }
}
