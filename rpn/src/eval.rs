use crate::{Error, Num, Op, Postfix, Range, Token};

/// Reduces a postfix token stream to a single value.
///
/// Operands pop in reverse: the first pop is the right operand, the second
/// the left one.
pub fn evaluate(postfix: &Postfix) -> crate::Result<f64> {
    let mut stack = Vec::new();

    for token in &postfix.tokens {
        match *token {
            Token::Num(n) => stack.push(n),
            Token::Op(op) => {
                let a = stack.pop().ok_or(Error::MissingOperand(op.range()))?;
                let b = stack.pop().ok_or(Error::MissingOperand(op.range()))?;
                let val = op.solve(b.val, a.val);
                stack.push(Num::new(val, Range::span(b.range, a.range)));
            }
            Token::Par(p) => return Err(Error::UnexpectedParenthesis(p)),
        }
    }

    let result = stack.pop().ok_or(Error::MissingOperand(Range::pos(0)))?;
    if let Some(leftover) = stack.last() {
        return Err(Error::MissingOperator(Range::between(
            leftover.range,
            result.range,
        )));
    }

    Ok(result.val)
}

impl Op {
    /// Applies the operator to `lhs` and `rhs` with IEEE 754 semantics.
    ///
    /// Division by zero yields an infinity or NaN, as does `powf` outside
    /// its real domain.
    pub fn solve(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add(_) => lhs + rhs,
            Self::Sub(_) => lhs - rhs,
            Self::Mul(_) => lhs * rhs,
            Self::Div(_) => lhs / rhs,
            Self::Pow(_) => lhs.powf(rhs),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{num, Par};

    use super::*;

    fn check(expected: f64, tokens: Vec<Token>) {
        assert_eq!(expected, evaluate(&Postfix { tokens }).unwrap());
    }

    fn check_err(expected: Error, tokens: Vec<Token>) {
        assert_eq!(expected, evaluate(&Postfix { tokens }).unwrap_err());
    }

    #[test]
    fn addition() {
        check(
            5.0,
            vec![
                Token::Num(num(2.0, 0, 1)),
                Token::Num(num(3.0, 2, 3)),
                Token::Op(Op::Add(Range::pos(4))),
            ],
        );
    }

    #[test]
    fn subtraction_operand_order() {
        check(
            30.0,
            vec![
                Token::Num(num(50.0, 0, 2)),
                Token::Num(num(20.0, 3, 5)),
                Token::Op(Op::Sub(Range::pos(6))),
            ],
        );
    }

    #[test]
    fn pow_operand_order() {
        check(
            9.0,
            vec![
                Token::Num(num(3.0, 0, 1)),
                Token::Num(num(2.0, 2, 3)),
                Token::Op(Op::Pow(Range::pos(4))),
            ],
        );
    }

    #[test]
    fn division_by_zero_is_infinite() {
        check(
            f64::INFINITY,
            vec![
                Token::Num(num(1.0, 0, 1)),
                Token::Num(num(0.0, 2, 3)),
                Token::Op(Op::Div(Range::pos(4))),
            ],
        );
    }

    #[test]
    fn zero_by_zero_is_nan() {
        let tokens = vec![
            Token::Num(num(0.0, 0, 1)),
            Token::Num(num(0.0, 2, 3)),
            Token::Op(Op::Div(Range::pos(4))),
        ];
        assert!(evaluate(&Postfix { tokens }).unwrap().is_nan());
    }

    #[test]
    fn missing_operand() {
        check_err(
            Error::MissingOperand(Range::pos(1)),
            vec![Token::Num(num(2.0, 0, 1)), Token::Op(Op::Add(Range::pos(1)))],
        );
    }

    #[test]
    fn empty_stream() {
        check_err(Error::MissingOperand(Range::pos(0)), vec![]);
    }

    #[test]
    fn leftover_operand() {
        check_err(
            Error::MissingOperator(Range::of(1, 2)),
            vec![Token::Num(num(1.0, 0, 1)), Token::Num(num(2.0, 2, 3))],
        );
    }

    #[test]
    fn parenthesis_in_stream() {
        check_err(
            Error::UnexpectedParenthesis(Par::RoundOpen(Range::pos(0))),
            vec![Token::Par(Par::RoundOpen(Range::pos(0)))],
        );
    }
}
