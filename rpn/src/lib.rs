pub use convert::*;
pub use display::*;
pub use error::*;
pub use eval::*;
pub use style::*;
pub use token::*;

mod convert;
mod display;
mod error;
mod eval;
mod style;
mod token;

/// Converts an infix expression to postfix notation and evaluates it.
pub fn calc(string: impl AsRef<str>) -> crate::Result<f64> {
    let postfix = to_postfix(string.as_ref())?;
    evaluate(&postfix)
}
