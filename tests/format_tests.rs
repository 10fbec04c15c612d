use std::sync::Arc;
use std::thread;

use serde::Serialize;
use tidyjson::{format, CollectorSink, Formatter, NewLineStyle};

#[derive(Serialize)]
struct Player {
    name: String,
    scores: Vec<i32>,
    active: bool,
}

#[test]
fn formats_nested_document() {
    let output = format(r#"{"a":1,"b":[1,2]}"#).unwrap();
    let expected = "\
{
  \"a\": 1,
  \"b\": [
    1,
    2
  ]
}";
    assert_eq!(output, expected);
}

#[test]
fn empty_containers_have_no_internal_newline() {
    assert_eq!(format("{}").unwrap(), "{}");
    assert_eq!(format("[]").unwrap(), "[]");
}

#[test]
fn primitive_top_level_value_is_unchanged() {
    assert_eq!(format(r#""ab\nc""#).unwrap(), r#""ab\nc""#);
}

#[test]
fn second_top_level_value_fails_with_one_diagnostic() {
    let sink = Arc::new(CollectorSink::new());
    let formatter = Formatter::new().with_sink(sink.clone());

    assert!(formatter.format(r#"{"a": 1} {"b":2}"#).is_err());
    assert_eq!(sink.messages().len(), 1);
    assert!(sink.messages()[0].contains("top-level"));
}

#[test]
fn misspelled_literal_fails_with_one_diagnostic() {
    let sink = Arc::new(CollectorSink::new());
    let formatter = Formatter::new().with_sink(sink.clone());

    assert!(formatter.format(r#"{"a": tru}"#).is_err());
    assert_eq!(sink.messages().len(), 1);
}

#[test]
fn successful_calls_report_nothing() {
    let sink = Arc::new(CollectorSink::new());
    let formatter = Formatter::new().with_sink(sink.clone());

    formatter.format(r#"[1, 2, 3]"#).unwrap();
    assert!(sink.messages().is_empty());
}

// Removing all whitespace from the output must yield the same characters
// as removing all insignificant whitespace from the input. Only valid for
// documents whose strings contain no literal whitespace.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r')).collect()
}

#[test]
fn only_whitespace_is_changed() {
    let documents = [
        r#"{"a":1,"b":[1,2],"c":{"d":null,"e":[true,false]}}"#,
        r#"[ -1.5e+10 , "xéy" , {} , [ [ 0.25 ] ] ]"#,
        "{ \"deep\" :\n\t{ \"deeper\" : [ 1 , 2 , 3 ] } }",
    ];
    for doc in documents {
        let output = format(doc).unwrap();
        assert_eq!(strip_whitespace(&output), strip_whitespace(doc), "content changed for {:?}", doc);
    }
}

#[test]
fn output_is_already_canonical() {
    let formatter = Formatter::new();
    let once = formatter.format(r#"{"a":{"b":[1,{"c":null}]},"d":"x"}"#).unwrap();
    assert_eq!(formatter.format(&once).unwrap(), once);
}

#[test]
fn newline_option_changes_only_line_separators() {
    let input = r#"{"a":[1,2],"b":{"c":3}}"#;
    let lf = format(input).unwrap();

    let mut formatter = Formatter::new();
    formatter.options.newline_style = NewLineStyle::Crlf;
    assert_eq!(formatter.format(input).unwrap(), lf.replace('\n', "\r\n"));

    formatter.options.newline_style = NewLineStyle::Cr;
    assert_eq!(formatter.format(input).unwrap(), lf.replace('\n', "\r"));
}

#[test]
fn custom_indent_string() {
    let mut formatter = Formatter::new();
    formatter.options.indent_string = "--->".to_string();
    let output = formatter.format(r#"[[1]]"#).unwrap();
    assert_eq!(output, "[\n--->[\n--->--->1\n--->]\n]");
}

#[test]
fn serializes_rust_types() {
    let player = Player {
        name: "Alice".to_string(),
        scores: vec![95, 87, 92],
        active: true,
    };

    let output = Formatter::new().serialize(&player).unwrap();
    let expected = "\
{
  \"name\": \"Alice\",
  \"scores\": [
    95,
    87,
    92
  ],
  \"active\": true
}";
    assert_eq!(output, expected);
}

#[test]
fn deeply_nested_input_is_rejected_not_crashed() {
    let depth = 100_000;
    let mut input = String::with_capacity(depth * 2);
    for _ in 0..depth {
        input.push('[');
    }
    for _ in 0..depth {
        input.push(']');
    }
    assert!(format(&input).is_err());
}

#[test]
fn concurrent_calls_are_independent() {
    let formatter = Arc::new(Formatter::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let input = format!(r#"{{"thread":{},"data":[{}]}}"#, i, i);
                let output = formatter.format(&input).unwrap();
                assert!(output.contains(&format!("\"thread\": {}", i)));
                // same input + same config => same output
                assert_eq!(formatter.format(&input).unwrap(), output);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
