use std::fmt::{self, Display};

pub const ANSI_ESC: &str = "\x1B[0m";

/// Prints a bold colored line and resets the style afterwards.
///
/// Expects [`ANSI_ESC`] to be in scope at the call site.
#[macro_export]
macro_rules! bprintln {
    ($col:ty, $pat:expr $(,$args:expr),*) => {{
        print!("{}", <$col>::BOLD);
        print!($pat, $($args,)*);
        println!("{ANSI_ESC}");
    }}
}

pub trait Color: Sized {
    const COLOR_CODE: u8;

    const NORMAL: WriteAnsi = WriteAnsi {
        bold: false,
        color: Self::COLOR_CODE,
    };
    const BOLD: WriteAnsi = WriteAnsi {
        bold: true,
        color: Self::COLOR_CODE,
    };
}

pub struct WriteAnsi {
    bold: bool,
    color: u8,
}

impl Display for WriteAnsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1B[")?;
        if self.bold {
            f.write_str("1;")?;
        }
        write!(f, "{}m", self.color)?;
        Ok(())
    }
}

pub struct DYellow;
impl Color for DYellow {
    const COLOR_CODE: u8 = 33;
}

pub struct LRed;
impl Color for LRed {
    const COLOR_CODE: u8 = 91;
}

pub struct LGreen;
impl Color for LGreen {
    const COLOR_CODE: u8 = 92;
}

pub struct LBlue;
impl Color for LBlue {
    const COLOR_CODE: u8 = 94;
}
