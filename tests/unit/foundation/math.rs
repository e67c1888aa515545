use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"framekit");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'f');
    b.write_bytes(b"ramekit");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn signed_zero_hashes_equal() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn str_writes_are_length_prefixed() {
    let mut a = Fnv1a64::new_default();
    a.write_str("ab");
    a.write_str("c");
    let mut b = Fnv1a64::new_default();
    b.write_str("a");
    b.write_str("bc");
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn lerp_and_approx_eq() {
    assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
    assert!(!approx_eq(1.0, 1.1, 1e-3));
}
