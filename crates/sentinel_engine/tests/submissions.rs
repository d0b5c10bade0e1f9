use pretty_assertions::assert_eq;
use sentinel_engine::{count_submissions, PollError};

#[test]
fn counts_rows_minus_header() {
    let html = "<html><body><table>\
        <tr><th>Name</th></tr>\
        <tr><td>a</td></tr>\
        <tr><td>b</td></tr>\
        </table></body></html>";
    assert_eq!(count_submissions(html), Ok(2));
}

#[test]
fn header_only_table_counts_zero() {
    let html = "<table><tr><th>Name</th></tr></table>";
    assert_eq!(count_submissions(html), Ok(0));
}

#[test]
fn only_the_first_table_is_counted() {
    let html = "<table><tr><th>h</th></tr><tr><td>a</td></tr></table>\
        <table><tr><td>x</td></tr><tr><td>y</td></tr><tr><td>z</td></tr></table>";
    assert_eq!(count_submissions(html), Ok(1));
}

#[test]
fn missing_table_is_an_error() {
    assert_eq!(
        count_submissions("<html><body>nothing</body></html>"),
        Err(PollError::NoTable)
    );
}

#[test]
fn rows_in_nested_tbody_are_counted() {
    let html = "<table><thead><tr><th>h</th></tr></thead>\
        <tbody><tr><td>a</td></tr><tr><td>b</td></tr></tbody></table>";
    assert_eq!(count_submissions(html), Ok(2));
}
