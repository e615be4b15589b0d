use crate::{Par, Range, UserFacing};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    InvalidCharacter { char: char, range: Range },
    InvalidNumberFormat(Range),
    UnexpectedParenthesis(Par),
    MissingClosingParenthesis(Par),
    MissingOperand(Range),
    MissingOperator(Range),
}

impl UserFacing for Error {
    fn description(&self) -> String {
        match self {
            Self::InvalidCharacter { char, .. } => format!("Found an invalid character: `{char}`"),
            Self::InvalidNumberFormat(_) => "Invalid number format".into(),
            Self::UnexpectedParenthesis(_) => "Found an unexpected parenthesis".into(),
            Self::MissingClosingParenthesis(_) => "Missing a closing parenthesis".into(),
            Self::MissingOperand(_) => "Missing an operand".into(),
            Self::MissingOperator(_) => "Missing an operator".into(),
        }
    }

    fn range(&self) -> Range {
        match self {
            Self::InvalidCharacter { range, .. } => *range,
            Self::InvalidNumberFormat(r) => *r,
            Self::UnexpectedParenthesis(p) => p.range(),
            Self::MissingClosingParenthesis(p) => p.range(),
            Self::MissingOperand(r) => *r,
            Self::MissingOperator(r) => *r,
        }
    }
}
