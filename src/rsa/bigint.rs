// Big integer primitives
// Modular arithmetic, Miller-Rabin testing, and prime generation over BigUint

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::rng::LcgRng;

/// Number of Miller-Rabin witness rounds used during prime generation.
///
/// A composite survives one round with probability at most 1/4, so the
/// false-positive bound after 40 rounds is 4^-40.
pub const MILLER_RABIN_ROUNDS: u32 = 40;

/// Modular exponentiation: base^exponent mod modulus
/// Uses the square-and-multiply algorithm over the exponent's bits.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent >>= 1;
    }

    result
}

/// Compute the modular inverse a^(-1) mod m via the iterative extended
/// Euclidean algorithm, tracking Bezout coefficients in signed integers and
/// normalizing the result into `[0, m)`.
///
/// Fails when m is 1 (the inverse is undefined) and when a and m share a
/// factor (no inverse exists).
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_one() {
        return Err(Error::DegenerateModulus);
    }
    if a.is_zero() {
        return Err(Error::NoInverse);
    }

    let m0 = BigInt::from(m.clone());
    let mut a = BigInt::from(a.clone());
    let mut m = m0.clone();
    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() {
        if m.is_zero() {
            // Euclidean chain bottomed out with a > 1: gcd(a, m) > 1.
            return Err(Error::NoInverse);
        }
        let q = &a / &m;
        let r = &a % &m;
        a = std::mem::replace(&mut m, r);
        let t = x0.clone();
        x0 = &x1 - &q * &x0;
        x1 = t;
    }

    // The final coefficient lies in (-m, m); one addition normalizes it.
    if x1.is_negative() {
        x1 += &m0;
    }

    x1.to_biguint().ok_or(Error::NoInverse)
}

/// Miller-Rabin primality test with `rounds` independent witnesses drawn
/// from `rng`.
///
/// One-sided: a `false` is always correct, a `true` is wrong with
/// probability at most 4^-rounds.
pub fn is_probable_prime(n: &BigUint, rounds: u32, rng: &mut LcgRng) -> bool {
    let one = BigUint::one();
    if n <= &one {
        return false;
    }
    if n <= &BigUint::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as 2^r * s with s odd.
    let n_minus_one = n - &one;
    let mut s = n_minus_one.clone();
    let mut r = 0u32;
    while s.is_even() {
        s >>= 1;
        r += 1;
    }

    let two = BigUint::from(2u8);
    let n_minus_two = n - &two;

    for _ in 0..rounds {
        // Witness in [2, n-1], derived from a single draw.
        let a = BigUint::from(rng.next_value()) % &n_minus_two + &two;
        let mut x = mod_pow(&a, &s, n);

        if x == one || x == n_minus_one {
            continue;
        }

        let mut witness_passed = false;
        for _ in 1..r {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                witness_passed = true;
                break;
            }
        }

        if !witness_passed {
            // Composite for certain
            return false;
        }
    }

    // Probably prime
    true
}

/// Generate a probable prime exactly `bits` wide: each candidate is one
/// draw reduced modulo 2^bits with its top and bottom bits forced, so the
/// result is odd and lies in `[2^(bits-1), 2^bits)`. Retries without bound.
///
/// `bits` must be at least 2. A single draw carries at most 31 bits, so
/// widths above 31 sample a narrower candidate space than the nominal
/// width before the forced bits are applied; that narrowing is part of the
/// reproducible-generation contract and is kept as-is.
pub fn generate_large_prime(bits: u32, rng: &mut LcgRng) -> BigUint {
    let width = BigUint::one() << bits;
    let high_bit = BigUint::one() << (bits - 1);

    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = BigUint::from(rng.next_value()) % &width | &high_bit | BigUint::one();
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng) {
            log::debug!("found {}-bit prime after {} candidates", bits, attempts);
            return candidate;
        }
    }
}
