use std::cmp::min;
use std::fmt::{self, Write};

use unicode_width::UnicodeWidthChar;

use crate::{Color, LBlue, LRed, Op, Par, Postfix, Range, Token, ANSI_ESC};

/// An error that can point back into the input it was produced from.
pub trait UserFacing: Sized + fmt::Debug {
    fn description(&self) -> String;
    fn range(&self) -> Range;

    fn display<'a>(&'a self, input: &'a str) -> DisplayUserFacing<'a, Self> {
        DisplayUserFacing { input, error: self }
    }
}

pub struct DisplayUserFacing<'a, U: UserFacing> {
    input: &'a str,
    error: &'a U,
}

impl<U: UserFacing> fmt::Display for DisplayUserFacing<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.error.range();

        for (nr, (lr, line)) in spanned_lines(self.input).into_iter().enumerate() {
            if !lr.intersects(&range) {
                continue;
            }

            let start = range.start.saturating_sub(lr.start);
            let end = min(range.end.saturating_sub(lr.start), lr.len());
            mark_range(f, nr + 1, line, start, end)?;
        }

        write!(
            f,
            "   {blue}│{esc} {red}{desc}{esc}",
            desc = self.error.description(),
            red = LRed::BOLD,
            blue = LBlue::BOLD,
            esc = ANSI_ESC,
        )
    }
}

fn mark_range(
    f: &mut fmt::Formatter<'_>,
    nr: usize,
    line: &str,
    start: usize,
    end: usize,
) -> fmt::Result {
    write!(
        f,
        "{blue}{nr:02} │{esc} {line}\n   {blue}│{esc} ",
        blue = LBlue::BOLD,
        esc = ANSI_ESC,
    )?;

    let mut offset = 0;
    let mut width = 0;
    for (i, c) in line.chars().enumerate() {
        let w = c.width().unwrap_or(0);
        if i < start {
            offset += w;
        } else if i < end {
            width += w;
        }
    }
    // a mark past the end of the line still gets one caret
    if width == 0 {
        width = 1;
    }

    for _ in 0..offset {
        f.write_char(' ')?;
    }
    write!(f, "{}", LRed::BOLD)?;
    for _ in 0..width {
        f.write_char('^')?;
    }
    f.write_str(ANSI_ESC)?;
    f.write_char('\n')
}

/// Splits the input into lines with their character ranges.
///
/// Each range includes one extra slot past the line end so errors at the
/// line break are still marked on that line.
fn spanned_lines(input: &str) -> Vec<(Range, &str)> {
    let mut lines = Vec::new();
    let mut start = 0;

    for line in input.split('\n') {
        let stripped = line.strip_suffix('\r').unwrap_or(line);
        lines.push((Range::of(start, start + stripped.chars().count() + 1), stripped));
        start += line.chars().count() + 1;
    }

    lines
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n.val),
            Self::Op(o) => write!(f, "{o}"),
            Self::Par(p) => write!(f, "{p}"),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add(_) => '+',
            Self::Sub(_) => '-',
            Self::Mul(_) => '*',
            Self::Div(_) => '/',
            Self::Pow(_) => '^',
        };
        f.write_char(c)
    }
}

impl fmt::Display for Par {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundOpen(_) => f.write_char('('),
            Self::RoundClose(_) => f.write_char(')'),
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(t) = tokens.next() {
            write!(f, "{t}")?;
        }
        for t in tokens {
            write!(f, " {t}")?;
        }
        Ok(())
    }
}
