#![no_main]

use libfuzzer_sys::fuzz_target;
use x07_int64::{ev_bytes, Int64, Operand};

// The library's entry points reference the runtime hooks; the fuzz
// binary runs without an evaluator, so stub them.
#[no_mangle]
extern "C" fn ev_bytes_alloc(len: u32) -> ev_bytes {
    let mut v = vec![0u8; len as usize];
    let ptr = v.as_mut_ptr();
    std::mem::forget(v);
    ev_bytes { ptr, len }
}

#[no_mangle]
extern "C" fn ev_trap(code: i32) -> ! {
    panic!("ev_trap({code})")
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 20 {
        return;
    }
    let a = i64::from_le_bytes(data[0..8].try_into().unwrap());
    let b = i64::from_le_bytes(data[8..16].try_into().unwrap());
    let n = i32::from_le_bytes(data[16..20].try_into().unwrap());

    let av = Int64::from_bits(a as u64);
    let bv = Int64::from_bits(b as u64);

    // Word split reconstructs the value.
    assert_eq!(Int64::from_words(av.low_word(), av.high_word()), av);

    // Wraparound add/sub are inverses.
    assert_eq!((av + bv) - bv, av);

    // The fits check agrees with a sign-extension round-trip.
    assert_eq!(av.fits_native(), Int64::from_native(av.low_word()) == av);

    // Hex rendering is always "0x" + 16 uppercase digits.
    let hex = av.to_hex();
    assert_eq!(&hex[0..2], b"0x");
    assert!(hex[2..]
        .iter()
        .all(|c| c.is_ascii_digit() || (b'A'..=b'F').contains(c)));

    // Division is defined for every nonzero divisor.
    match av.checked_div(bv) {
        Some(q) => {
            assert_ne!(b, 0);
            if !(a == i64::MIN && b == -1) {
                assert_eq!(q.get(), a / b);
            }
        }
        None => assert_eq!(b, 0),
    }

    // Native operands promote by sign extension.
    assert_eq!(Operand::Native(n).widen(), Int64::from_native(n));

    // Comparisons are the plain signed order.
    assert_eq!(av < bv, a < b);
    assert_eq!(av == bv, a == b);
});
