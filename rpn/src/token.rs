#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Num(Num),
    Op(Op),
    Par(Par),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num {
    pub val: f64,
    pub range: Range,
}

impl Num {
    pub const fn new(val: f64, range: Range) -> Self {
        Self { val, range }
    }
}

pub const fn num(val: f64, start: usize, end: usize) -> Num {
    Num::new(val, Range::of(start, end))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add(Range),
    Sub(Range),
    Mul(Range),
    Div(Range),
    Pow(Range),
}

impl Op {
    /// Binding strength following the usual arithmetic order, `^` highest.
    ///
    /// The converter pops stacked operators of equal precedence before
    /// pushing the incoming one, so every operator binds left-associatively,
    /// `^` included.
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add(_) | Self::Sub(_) => 1,
            Self::Mul(_) | Self::Div(_) => 2,
            Self::Pow(_) => 3,
        }
    }

    pub const fn range(&self) -> Range {
        match *self {
            Self::Add(r) => r,
            Self::Sub(r) => r,
            Self::Mul(r) => r,
            Self::Div(r) => r,
            Self::Pow(r) => r,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Par {
    RoundOpen(Range),
    RoundClose(Range),
}

impl Par {
    pub const fn range(&self) -> Range {
        match *self {
            Self::RoundOpen(r) => r,
            Self::RoundClose(r) => r,
        }
    }
}

/// A character index range into the input, `start` inclusive, `end` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub const fn of(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn pos(pos: usize) -> Self {
        Self::of(pos, pos + 1)
    }

    /// From the start of `a` to the end of `b`.
    pub const fn span(a: Self, b: Self) -> Self {
        Self::of(a.start, b.end)
    }

    /// The gap separating `a` and `b`.
    pub const fn between(a: Self, b: Self) -> Self {
        Self::of(a.end, b.start)
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn intersects(&self, other: &Self) -> bool {
        self.contains(other.start) || other.contains(self.start)
    }

    pub const fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}
