//! Integration tests for the commands applied to selections of a text.

use urlutils::*;

#[test]
fn test_each_command_on_whole_text() {
    assert_eq!(Command::Encode.run("a b/c").unwrap(), "a%20b%2Fc");
    assert_eq!(Command::Decode.run("a+b%2Fc").unwrap(), "a b/c");

    let block = Command::Parse.run("https://example.com/x?k=v").unwrap();
    assert!(block.contains(&Component::Query.header()));
    assert_eq!(Command::Unparse.run(&block).unwrap(), "https://example.com/x?k=v");
}

#[test]
fn test_parse_then_unparse_through_regions() {
    let text = "see https://example.com/docs?b=2&a=1#intro for details";
    let start = text.find("https").unwrap();
    let end = text.find(" for").unwrap();

    let rendered = apply_to_regions(text, &[Region::new(start, end)], Command::Parse.transform()).unwrap();
    assert!(rendered.starts_with("see "));
    assert!(rendered.ends_with(" for details"));

    let block_start = 4;
    let block_end = rendered.len() - " for details".len();
    let restored = apply_to_regions(
        &rendered,
        &[Region::new(block_start, block_end)],
        Command::Unparse.transform(),
    )
    .unwrap();
    assert_eq!(restored, "see https://example.com/docs?a=1&b=2#intro for details");
}

#[test]
fn test_encode_multiple_regions() {
    let text = "q=rust lang\nnext=a&b";
    let regions = [Region::new(2, 11), Region::new(17, 20)];
    let out = apply_to_regions(text, &regions, Command::Encode.transform()).unwrap();
    assert_eq!(out, "q=rust%20lang\nnext=a%26b");
}

#[test]
fn test_encode_multiline_whole_text() {
    let text = "one two\r\nthree four";
    let out = apply_to_regions(text, &[], Command::Encode.transform()).unwrap();
    assert_eq!(out, "one%20two\r\nthree%20four");
}

#[test]
fn test_failing_region_leaves_error() {
    let text = "http://example.com/?&";
    let result = apply_to_regions(text, &[], Command::Parse.transform());
    assert_eq!(result, Err(UrlUtilsError::EmptyQuery));
}

#[test]
fn test_fetch_invalid_url() {
    assert!(matches!(fetch("example dot com"), Err(UrlUtilsError::InvalidUrl(_))));
}
