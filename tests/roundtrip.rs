// Roundtrip test: bf-echo generates code that bf-decode turns back into the text.

fn encode(text: &str) -> String {
    let mut cmd = assert_cmd::Command::cargo_bin("bf-echo").expect("bf-echo binary");
    let assert = cmd.arg(text).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8")
}

#[test]
fn echo_then_decode_roundtrip() {
    for (input, expected) in [
        ("Hello, World!", "Hello, World!"),
        ("two\\nlines", "two\nlines"),
        ("+++.", "+++."),
        ("ünïcödé", "ünïcödé"),
    ] {
        let generated = encode(input);
        assert_eq!(generated.lines().count(), expected.chars().count());

        let mut run = assert_cmd::Command::cargo_bin("bf-decode").expect("bf-decode binary");
        run.write_stdin(generated).assert().success().stdout(expected);
    }
}

#[test]
fn generated_program_uses_only_plus_dot_and_right() {
    let generated = encode("any text\\n at all");
    assert!(
        generated
            .chars()
            .all(|c| matches!(c, '+' | '.' | '>' | '\n'))
    );
}
