/// A zero-width marker that scores, forces or forbids a line break at its
/// position.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Penalty {
    penalty: i32,
    flagged: bool,
}

impl Penalty {
    /// The score at and beyond which penalties become absolute.
    pub const INFINITY: i32 = 10000;

    /// Create a scored penalty.
    pub fn new(penalty: i32, flagged: bool) -> Self {
        Self { penalty, flagged }
    }

    /// A penalty that must end the current line.
    pub fn forced() -> Self {
        Self::new(-Self::INFINITY, false)
    }

    /// A penalty that prohibits a break at its position.
    pub fn never() -> Self {
        Self::new(Self::INFINITY, false)
    }

    /// The score of breaking here.
    pub fn penalty(&self) -> i32 {
        self.penalty
    }

    /// Whether this is a flagged break (e.g. a hyphen).
    pub fn flagged(&self) -> bool {
        self.flagged
    }

    /// Whether a line must end here.
    pub fn is_forced(&self) -> bool {
        self.penalty <= -Self::INFINITY
    }

    /// Whether a line may not end here.
    pub fn is_forbidden(&self) -> bool {
        self.penalty >= Self::INFINITY
    }
}
