mod common;
use common::*;

#[test]
fn test_iread_into_underscore() {
    let source = "def main() then\n iread \"Name: \"\n print _\nend";
    assert_eq!(run(source, &["Bob"]), "Name: Bob\n");
}

#[test]
fn test_line_terminator_removed() {
    let source = r#"def main() then iread "> " print _ print "|" end"#;
    assert_eq!(run(source, &["Bob\r\n"]), "> Bob\n|\n");
    assert_eq!(run(source, &["Bob\n"]), "> Bob\n|\n");
}

#[test]
fn test_every_iread_overwrites_slot() {
    let source = r#"def main() then
    iread "1? "
    let first := _
    iread "2? "
    print first
    print _
end"#;
    assert_eq!(run(source, &["a", "b"]), "1? 2? a\nb\n");
}

#[test]
fn test_empty_line() {
    let source = r#"def main() then let _ := "old" iread "? " print _ end"#;
    assert_eq!(run(source, &[""]), "? \n");
}

#[test]
fn test_input_past_end() {
    let source = "def main() then\n iread \"? \"\n print \"never\"\nend";
    assert_eq!(run(source, &[]), "? INPUT PAST END IN 2; stdin closed\n");
}
