//! BoundedString contract tests
//!
//! One test per observable behavior: construction, append, copy and move
//! semantics, comparison, concatenation, indexing, search, replacement,
//! and the failure paths.

use boundstr::{BoundedString, StringError};

fn bs(text: &str, capacity: usize) -> BoundedString {
    BoundedString::from_str_bounded(text, capacity).expect("text fits capacity")
}

#[test]
fn test_with_capacity_starts_empty() {
    let s = BoundedString::with_capacity(37);
    assert_eq!(37, s.capacity());
    assert_eq!(0, s.len());
    assert!(s.is_empty());
    assert_eq!("", s.as_str());
}

#[test]
fn test_from_str_bounded() {
    let s = bs("Hello", 37);
    assert_eq!(37, s.capacity());
    assert_eq!(5, s.len());
    assert_eq!("Hello", s.as_str());
}

#[test]
fn test_from_str_bounded_rejects_oversized_text() {
    let err = BoundedString::from_str_bounded("Hello", 3).unwrap_err();
    assert_eq!(
        StringError::CapacityExceeded {
            needed: 5,
            capacity: 3
        },
        err
    );
}

#[test]
fn test_push_str() {
    let mut s = bs("Hello", 37);
    s.push_str(" World!").unwrap();
    assert_eq!(37, s.capacity());
    assert_eq!(12, s.len());
    assert_eq!("Hello World!", s.as_str());
}

#[test]
fn test_push_line() {
    let mut s = BoundedString::with_capacity(37);
    s.push_line("Hello").unwrap();
    assert_eq!(6, s.len());
    assert_eq!("Hello\n", s.as_str());
    s.push_line(" World!").unwrap();
    assert_eq!(14, s.len());
    assert_eq!("Hello\n World!\n", s.as_str());
}

#[test]
fn test_push_str_beyond_capacity_leaves_content_unchanged() {
    let mut s = bs("Hello", 5);
    let err = s.push_str("!").unwrap_err();
    assert_eq!(
        StringError::CapacityExceeded {
            needed: 6,
            capacity: 5
        },
        err
    );
    assert_eq!("Hello", s.as_str());
    assert_eq!(5, s.len());
}

#[test]
fn test_push_line_is_atomic() {
    // "o" alone would fit; "o" plus the newline does not. Nothing lands.
    let mut s = bs("Hell", 5);
    assert!(s.push_line("o").is_err());
    assert_eq!("Hell", s.as_str());
    assert_eq!(4, s.len());
}

#[test]
fn test_clone_is_deep() {
    let src = bs("Hello", 37);
    let mut copy = src.clone();
    assert_eq!(37, copy.capacity());
    assert_eq!(5, copy.len());
    assert_ne!(src.as_ptr(), copy.as_ptr());
    assert_eq!("Hello", copy.as_str());

    copy.push_str(" World!").unwrap();
    assert_eq!("Hello World!", copy.as_str());
    // the source is untouched
    assert_eq!(37, src.capacity());
    assert_eq!(5, src.len());
    assert_eq!("Hello", src.as_str());
}

#[test]
fn test_clone_into_existing_binding() {
    let src = bs("Hello", 37);
    let mut copy = BoundedString::with_capacity(3);
    copy.push_str("AB").unwrap();

    copy = src.clone();
    assert_eq!(37, copy.capacity());
    assert_eq!("Hello", copy.as_str());
    assert_ne!(src.as_ptr(), copy.as_ptr());

    copy.push_str(" World!").unwrap();
    assert_eq!("Hello", src.as_str());
    assert_eq!(5, src.len());
}

#[test]
fn test_take_transfers_buffer_without_copying() {
    let mut src = bs("Hello", 37);
    let old_addr = src.as_ptr();

    let moved = src.take();

    assert_eq!(37, moved.capacity());
    assert_eq!(5, moved.len());
    assert_eq!(old_addr, moved.as_ptr());
    assert_eq!("Hello", moved.as_str());

    assert_eq!(0, src.capacity());
    assert_eq!(0, src.len());
    assert_eq!("", src.as_str());
}

#[test]
fn test_take_into_existing_binding() {
    let mut src = bs("Hello", 37);
    let old_addr = src.as_ptr();

    let mut dst = BoundedString::with_capacity(3);
    dst.push_str("AB").unwrap();
    dst = src.take();

    assert_eq!(37, dst.capacity());
    assert_eq!(5, dst.len());
    assert_eq!(old_addr, dst.as_ptr());
    assert_eq!("Hello", dst.as_str());

    assert_eq!(0, src.capacity());
    assert_eq!(0, src.len());
}

#[test]
fn test_equality_ignores_capacity() {
    assert_eq!(bs("Hello", 15), bs("Hello", 17));
    assert_ne!(bs("Hello", 15), bs("Helloa", 17));
    assert_ne!(bs("Hello", 15), bs("Hallo", 17));
    assert_ne!(bs("Hello", 15), bs("", 17));
    assert_eq!(bs("", 15), bs("", 17));
}

#[test]
fn test_add_mutates_neither_operand() {
    let hello = bs("Hello", 15);
    let world = bs("World", 15);
    let hello_world = &hello + &world;
    assert_eq!("Hello", hello.as_str());
    assert_eq!(5, hello.len());
    assert_eq!("World", world.as_str());
    assert_eq!(5, world.len());
    assert_eq!("HelloWorld", hello_world.as_str());
    assert_eq!(10, hello_world.len());
}

#[test]
fn test_add_result_always_fits() {
    // Both operands full: the summed capacity still holds the result.
    let a = bs("aaaaa", 5);
    let b = bs("bbb", 3);
    let joined = &a + &b;
    assert_eq!("aaaaabbb", joined.as_str());
    assert_eq!(8, joined.capacity());
}

#[test]
fn test_add_assign_mutates_receiver_in_place() {
    let mut hello = bs("Hello", 15);
    let world = bs("World", 15);
    let addr_before = hello.as_ptr();

    hello += &world;

    assert_eq!("HelloWorld", hello.as_str());
    assert_eq!(10, hello.len());
    assert_eq!(addr_before, hello.as_ptr());
    assert_eq!("World", world.as_str());
    assert_eq!(5, world.len());
}

#[test]
#[should_panic(expected = "capacity exceeded")]
fn test_add_assign_beyond_capacity_panics() {
    let mut hello = bs("Hello", 5);
    let world = bs("World", 15);
    hello += &world;
}

#[test]
fn test_index_operator() {
    let hello = bs("Hello", 15);
    assert_eq!(b'o', hello[4]);
}

#[test]
#[should_panic(expected = "index out of range")]
fn test_index_operator_at_len_panics() {
    let hello = bs("Hello", 15);
    let _ = hello[5];
}

#[test]
fn test_byte_at_checked() {
    let hello = bs("Hello", 15);
    assert_eq!(Ok(b'H'), hello.byte_at(0));
    assert_eq!(
        Err(StringError::IndexOutOfRange { index: 5, len: 5 }),
        hello.byte_at(5)
    );
    let empty = BoundedString::with_capacity(4);
    assert_eq!(
        Err(StringError::IndexOutOfRange { index: 0, len: 0 }),
        empty.byte_at(0)
    );
}

#[test]
fn test_ordering_is_lexicographic() {
    assert!(bs("Hello", 15) < bs("Hellob", 15));
    assert!(bs("Hella", 15) < bs("Hello", 15));
    assert!(bs("a", 15) < bs("bbbbbb", 15));
    assert!(bs("", 15) < bs("bbbbbb", 15));
    assert!(!(bs("Hello", 15) < bs("Hello", 15)));

    assert!(!(bs("Hellob", 15) < bs("Hello", 15)));
    assert!(!(bs("Hello", 15) < bs("Hella", 15)));
    assert!(!(bs("bbbbbb", 15) < bs("a", 15)));
    assert!(!(bs("bbbbbb", 15) < bs("", 15)));
}

#[test]
fn test_greater_and_inclusive_ordering() {
    assert!(bs("Hellob", 15) > bs("Hello", 15));
    assert!(bs("bbbbbb", 15) > bs("a", 17));
    assert!(!(bs("Hello", 15) > bs("Hello", 15)));
    assert!(bs("Hello", 15) <= bs("Hello", 17));
    assert!(bs("Hello", 15) >= bs("Hello", 17));
}

#[test]
fn test_replace_char() {
    let mut s = bs("Hello", 32);
    s.replace_char('l', 'p').unwrap();
    assert_eq!("Heppo", s.as_str());
    assert_eq!(5, s.len());
}

#[test]
fn test_replace_char_without_matches_is_noop() {
    let mut s = bs("Hello", 32);
    s.replace_char('z', 'q').unwrap();
    assert_eq!("Hello", s.as_str());
}

#[test]
fn test_as_str_borrows_the_buffer() {
    let s = bs("Hello", 32);
    assert_eq!("Hello", s.as_str());
    assert_eq!(s.as_ptr(), s.as_str().as_ptr());
}

#[test]
fn test_index_of() {
    assert_eq!(Some(2), bs("Hello", 15).index_of("ll"));
    assert_eq!(Some(2), bs("Hello", 15).index_of("llo"));
    assert_eq!(None, bs("Hello", 15).index_of("lla"));
    assert_eq!(None, bs("Hello", 15).index_of("p"));
    assert_eq!(Some(0), bs("Hello", 15).index_of("H"));
    // empty needle is defined to find nothing
    assert_eq!(None, bs("Hello", 15).index_of(""));
}

#[test]
fn test_display_and_write_to() {
    let s = bs("Hello", 15);
    assert_eq!("Hello", format!("{s}"));

    let mut out = Vec::new();
    s.write_to(&mut out).unwrap();
    assert_eq!(b"Hello", out.as_slice());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut s = bs("Hello", 15);
    s.clear();
    assert_eq!(0, s.len());
    assert_eq!("", s.as_str());
    assert_eq!(15, s.capacity());
    s.push_str("again").unwrap();
    assert_eq!("again", s.as_str());
}
