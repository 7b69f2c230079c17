use super::Cursor;
use crate::{Error, Expected};

#[test]
fn peek_does_not_advance() {
    let cursor = Cursor::new("ab");

    assert_eq!(cursor.peek(), Ok('a'));
    assert_eq!(cursor.peek(), Ok('a'));
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn consume_next_walks_input() {
    let mut cursor = Cursor::new("a|b");

    assert_eq!(cursor.consume_next(), Ok('a'));
    assert_eq!(cursor.consume_next(), Ok('|'));
    assert_eq!(cursor.rest(), "b");
    assert_eq!(cursor.consume_next(), Ok('b'));
    assert!(!cursor.has_more());
    assert_eq!(
        cursor.consume_next(),
        Err(Error::EmptyInputAtToken { offset: 3 })
    );
}

#[test]
fn peek_at_end() {
    let cursor = Cursor::new("");

    assert!(!cursor.has_more());
    assert_eq!(cursor.peek(), Err(Error::EmptyInputAtToken { offset: 0 }));
}

#[test]
fn consume_expected_match() {
    let mut cursor = Cursor::new("(a)");

    assert_eq!(cursor.consume_expected('('), Ok(()));
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn consume_expected_mismatch_keeps_position() {
    let mut cursor = Cursor::new("a)");

    let err = cursor.consume_expected(')').unwrap_err();

    assert_eq!(
        err,
        Error::UnexpectedCharacter {
            expected: Expected::Char(')'),
            found: Some('a'),
            offset: 0,
        }
    );
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn consume_expected_at_end() {
    let mut cursor = Cursor::new("");

    assert_eq!(
        cursor.consume_expected(')'),
        Err(Error::UnexpectedCharacter {
            expected: Expected::Char(')'),
            found: None,
            offset: 0,
        })
    );
}

#[test]
fn next_is() {
    let mut cursor = Cursor::new("*");

    assert!(cursor.next_is('*'));
    assert!(!cursor.next_is('|'));
    cursor.consume_next().unwrap();
    assert!(!cursor.next_is('*'));
}

#[test]
fn multibyte_offsets() {
    let mut cursor = Cursor::new("éa");

    assert_eq!(cursor.consume_next(), Ok('é'));
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.peek(), Ok('a'));
}
