use assert_cmd::Command;

#[test]
fn prints_the_sample_table() {
    let output = "(250+50)*(5-4) \u{1b}[1;94m~\u{1b}[0m \u{1b}[33m250 50 + 5 4 - *\u{1b}[0m \u{1b}[1;94m==\u{1b}[0m \u{1b}[1;92m300\u{1b}[0m\n\
(50*2)-(25+5)/3 \u{1b}[1;94m~\u{1b}[0m \u{1b}[33m50 2 * 25 5 + 3 / -\u{1b}[0m \u{1b}[1;94m==\u{1b}[0m \u{1b}[1;92m90\u{1b}[0m\n\
3+4*5/6 \u{1b}[1;94m~\u{1b}[0m \u{1b}[33m3 4 5 * 6 / +\u{1b}[0m \u{1b}[1;94m==\u{1b}[0m \u{1b}[1;92m6.333333333333334\u{1b}[0m\n\
3/2+0.5*1.4 \u{1b}[1;94m~\u{1b}[0m \u{1b}[33m3 2 / 0.5 1.4 * +\u{1b}[0m \u{1b}[1;94m==\u{1b}[0m \u{1b}[1;92m2.2\u{1b}[0m\n\
(((24/0.40)/15)+((25/0.40)/15)+(0.95*15))/45 \u{1b}[1;94m~\u{1b}[0m \u{1b}[33m24 0.4 / 15 / 25 0.4 / 15 / + 0.95 15 * + 45 /\u{1b}[0m \u{1b}[1;94m==\u{1b}[0m \u{1b}[1;92m0.4981481481481482\u{1b}[0m\n";

    Command::cargo_bin("rpn")
        .unwrap()
        .assert()
        .success()
        .stdout(output);
}
