use crate::{Error, Num, Op, Par, Range, Token};

/// A postfix (reverse polish) token stream produced by [`to_postfix`].
///
/// Converter output contains only number and operator tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Postfix {
    pub tokens: Vec<Token>,
}

enum Entry {
    Op(Op),
    Par(Par),
}

#[derive(Default)]
struct Converter {
    output: Vec<Token>,
    stack: Vec<Entry>,
    literal: String,
    char_index: usize,
}

/// Converts an infix expression to postfix notation using the shunting yard
/// algorithm.
///
/// Every operator is treated as left-associative, `^` included: `2^3^2`
/// converts as `(2^3)^2`. Ranges index characters, not bytes.
pub fn to_postfix(string: &str) -> crate::Result<Postfix> {
    let mut conv = Converter::default();

    for c in string.chars() {
        let range = Range::pos(conv.char_index);
        match c {
            // letters are legal literal characters and only fail at parse time
            '0'..='9' | 'a'..='z' | 'A'..='Z' | '.' => conv.literal.push(c),
            ' ' | '\n' | '\r' => conv.complete_literal()?, // separates adjacent literals
            '+' => conv.push_op(Op::Add(range))?,
            '-' | '−' => conv.push_op(Op::Sub(range))?,
            '*' | '×' => conv.push_op(Op::Mul(range))?,
            '/' | '÷' => conv.push_op(Op::Div(range))?,
            '^' => conv.push_op(Op::Pow(range))?,
            '(' => conv.open_par(Par::RoundOpen(range))?,
            ')' => conv.close_par(Par::RoundClose(range))?,
            _ => return Err(Error::InvalidCharacter { char: c, range }),
        }
        conv.char_index += 1;
    }

    conv.finish()
}

impl Converter {
    /// Parses the pending number literal and emits it, if there is one.
    fn complete_literal(&mut self) -> crate::Result<()> {
        if !self.literal.is_empty() {
            let start = self.char_index - self.literal.chars().count();
            let range = Range::of(start, self.char_index);

            let val = self
                .literal
                .parse::<f64>()
                .map_err(|_| Error::InvalidNumberFormat(range))?;

            self.output.push(Token::Num(Num::new(val, range)));
            self.literal.clear();
        }

        Ok(())
    }

    fn push_op(&mut self, op: Op) -> crate::Result<()> {
        self.complete_literal()?;

        // an opening parenthesis on top ends the popping
        while let Some(Entry::Op(top)) = self.stack.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.output.push(Token::Op(*top));
            self.stack.pop();
        }

        self.stack.push(Entry::Op(op));
        Ok(())
    }

    fn open_par(&mut self, par: Par) -> crate::Result<()> {
        self.complete_literal()?;
        self.stack.push(Entry::Par(par));
        Ok(())
    }

    fn close_par(&mut self, par: Par) -> crate::Result<()> {
        self.complete_literal()?;

        loop {
            match self.stack.pop() {
                Some(Entry::Op(op)) => self.output.push(Token::Op(op)),
                Some(Entry::Par(_)) => return Ok(()),
                None => return Err(Error::UnexpectedParenthesis(par)),
            }
        }
    }

    fn finish(mut self) -> crate::Result<Postfix> {
        self.complete_literal()?;

        while let Some(entry) = self.stack.pop() {
            match entry {
                Entry::Op(op) => self.output.push(Token::Op(op)),
                Entry::Par(par) => return Err(Error::MissingClosingParenthesis(par)),
            }
        }

        Ok(Postfix {
            tokens: self.output,
        })
    }
}
