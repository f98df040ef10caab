//! Tests for the string interner.

use super::interner::*;

#[test]
fn test_atom_none_is_empty_string() {
    let interner = Interner::new();
    assert!(Atom::NONE.is_none());
    assert_eq!(interner.resolve(Atom::NONE), "");
    assert!(interner.is_empty());
}

#[test]
fn test_intern_deduplicates() {
    let mut interner = Interner::new();
    let a = interner.intern("/usr/include/stdio.h");
    let b = interner.intern("/usr/include/stdio.h");
    let c = interner.intern("main.c");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_intern_empty_string_is_none() {
    let mut interner = Interner::new();
    assert_eq!(interner.intern(""), Atom::NONE);
}

#[test]
fn test_resolved_strings_share_allocation() {
    let mut interner = Interner::new();
    let first = interner.intern(&String::from("a.c"));
    let second = interner.intern(&String::from("a.c"));
    let s1 = interner.resolve(first);
    let s2 = interner.resolve(second);
    assert!(std::ptr::eq(s1.as_ptr(), s2.as_ptr()));

    let shared = interner.resolve_shared(first).expect("atom should resolve");
    assert!(std::ptr::eq(shared.as_ptr(), s1.as_ptr()));
}

#[test]
fn test_get_does_not_insert() {
    let mut interner = Interner::new();
    assert_eq!(interner.get("VarDecl"), None);
    let atom = interner.intern("VarDecl");
    assert_eq!(interner.get("VarDecl"), Some(atom));
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_foreign_atom_resolves_to_empty() {
    let interner = Interner::with_capacity(4);
    assert_eq!(interner.resolve(Atom(999)), "");
    assert!(interner.resolve_shared(Atom(999)).is_none());
}
