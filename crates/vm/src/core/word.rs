//! Modular arithmetic over 256-bit [`Word`]s.
//!
//! Every binary function takes its operands in pop order: `a` is the value that was on top of
//! the stack, `b` the one beneath it. Results wrap modulo 2^256 and never fault.

use alloy::primitives::U256;

/// The machine word. Every stack slot holds one.
pub type Word = U256;

#[inline]
fn boolean(condition: bool) -> Word {
    if condition {
        Word::from(1u8)
    } else {
        Word::ZERO
    }
}

/// Converts a shift operand into a bit count, or `None` when it shifts every bit out.
#[inline]
fn shift_amount(shift: Word) -> Option<usize> {
    usize::try_from(shift).ok().filter(|bits| *bits < Word::BITS)
}

/// `(a + b) mod 2^256`
///
/// ```
/// use minievm_vm::core::word::{self, Word};
///
/// assert_eq!(word::add(Word::MAX, Word::from(2u8)), Word::from(1u8));
/// ```
#[inline]
pub fn add(a: Word, b: Word) -> Word {
    a.wrapping_add(b)
}

/// `(a * b) mod 2^256`
#[inline]
pub fn mul(a: Word, b: Word) -> Word {
    a.wrapping_mul(b)
}

/// `(a - b) mod 2^256`, i.e. the top of the stack minus the value beneath it.
///
/// ```
/// use minievm_vm::core::word::{self, Word};
///
/// assert_eq!(word::sub(Word::from(3u8), Word::from(2u8)), Word::from(1u8));
/// assert_eq!(word::sub(Word::ZERO, Word::from(1u8)), Word::MAX);
/// ```
#[inline]
pub fn sub(a: Word, b: Word) -> Word {
    a.wrapping_sub(b)
}

/// `floor(b / a)`; the divisor is the top of the stack. Division by zero yields zero.
///
/// ```
/// use minievm_vm::core::word::{self, Word};
///
/// assert_eq!(word::div(Word::from(2u8), Word::from(6u8)), Word::from(3u8));
/// assert_eq!(word::div(Word::ZERO, Word::from(6u8)), Word::ZERO);
/// ```
#[inline]
pub fn div(a: Word, b: Word) -> Word {
    if a.is_zero() {
        Word::ZERO
    } else {
        b / a
    }
}

/// `b mod a`; the modulus is the top of the stack. A zero modulus yields zero.
#[inline]
pub fn rem(a: Word, b: Word) -> Word {
    if a.is_zero() {
        Word::ZERO
    } else {
        b % a
    }
}

/// 1 if `a < b`, unsigned.
#[inline]
pub fn lt(a: Word, b: Word) -> Word {
    boolean(a < b)
}

/// 1 if `a > b`, unsigned.
#[inline]
pub fn gt(a: Word, b: Word) -> Word {
    boolean(a > b)
}

/// 1 if `a == b`.
#[inline]
pub fn eq(a: Word, b: Word) -> Word {
    boolean(a == b)
}

/// `b & a`
#[inline]
pub fn and(a: Word, b: Word) -> Word {
    b & a
}

/// `b | a`
#[inline]
pub fn or(a: Word, b: Word) -> Word {
    b | a
}

/// `b ^ a`
#[inline]
pub fn xor(a: Word, b: Word) -> Word {
    b ^ a
}

/// `(2^256 - 1) - a`
#[inline]
pub fn not(a: Word) -> Word {
    !a
}

/// `a` shifted left by `b` bits, wrapping. Shifting by 256 or more yields zero.
///
/// ```
/// use minievm_vm::core::word::{self, Word};
///
/// assert_eq!(word::shl(Word::from(6u8), Word::from(2u8)), Word::from(24u8));
/// assert_eq!(word::shl(Word::MAX, Word::from(256u16)), Word::ZERO);
/// ```
#[inline]
pub fn shl(a: Word, b: Word) -> Word {
    shift_amount(b).map_or(Word::ZERO, |bits| a << bits)
}

/// `a` shifted right by `b` bits, logical. Shifting by 256 or more yields zero.
#[inline]
pub fn shr(a: Word, b: Word) -> Word {
    shift_amount(b).map_or(Word::ZERO, |bits| a >> bits)
}
