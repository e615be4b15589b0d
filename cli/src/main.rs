use std::process::ExitCode;

use rpn::{
    bprintln, evaluate, to_postfix, Color, DYellow, LBlue, LGreen, LRed, UserFacing, ANSI_ESC,
};

const SAMPLES: [&str; 5] = [
    "(250+50)*(5-4)",
    "(50*2)-(25+5)/3",
    "3+4*5/6",
    "3/2+0.5*1.4",
    "(((24/0.40)/15)+((25/0.40)/15)+(0.95*15))/45",
];

fn main() -> ExitCode {
    let mut code = ExitCode::SUCCESS;

    for input in SAMPLES {
        if print_calc(input).is_none() {
            code = ExitCode::FAILURE;
        }
    }

    code
}

fn print_calc(input: &str) -> Option<f64> {
    let postfix = match to_postfix(input) {
        Ok(p) => p,
        Err(e) => {
            print_error(input, &e);
            return None;
        }
    };

    match evaluate(&postfix) {
        Ok(val) => {
            println!(
                "{input} {blue}~{esc} {yellow}{postfix}{esc} {blue}=={esc} {green}{val}{esc}",
                blue = LBlue::BOLD,
                yellow = DYellow::NORMAL,
                green = LGreen::BOLD,
                esc = ANSI_ESC,
            );
            Some(val)
        }
        Err(e) => {
            print_error(input, &e);
            None
        }
    }
}

fn print_error(input: &str, error: &rpn::Error) {
    bprintln!(LRed, "Failed to calculate `{input}`");
    println!("{}", error.display(input));
}
