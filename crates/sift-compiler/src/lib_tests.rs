use crate::{compile, compile_bytes};

#[test]
fn compile_bytes_matches_compile() {
    let from_bytes = compile_bytes(b"+ @rootToken .five").unwrap();
    let from_text = compile("+ @rootToken .five").unwrap();
    assert_eq!(from_bytes, from_text);
}

#[test]
fn compile_bytes_rejects_invalid_utf8() {
    let err = compile_bytes(b".ok \xff").unwrap_err();
    assert_eq!(err.span.range(), 4..5);
    assert_eq!(err.message, "selector script is not valid UTF-8");
}

#[test]
fn compile_bytes_rejects_truncated_utf8() {
    let err = compile_bytes(b".a \xe2\x82").unwrap_err();
    assert_eq!(err.span.range(), 3..5);
}
