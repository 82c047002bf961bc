use super::{Engine, NoInverse, NumEngine};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use rand::Rng;

const WORD_BITS: u64 = 64;

/// Find the greatest common divisor of two numbers using Lehmer's algorithm
/// (Knuth, TAOCP vol. 2, 4.5.2, Algorithm L).
///
/// Euclid steps are simulated on the leading 64 bits of both numbers for as
/// long as the quotient is provably the same as the full-precision one, and
/// then applied to the full numbers in one go.
pub fn lehmer_gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut u, mut v) = if a >= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };

    while v.bits() > WORD_BITS {
        let shift = u.bits() - WORD_BITS;
        let x = leading_word(&u, shift);
        let y = leading_word(&v, shift);

        let [ca, cb, cc, cd] = cofactors(x, y);
        if cb == 0 {
            // Not even one step could be simulated, do a full division
            let r = &u % &v;
            u = v;
            v = r;
        } else {
            let next_u = combine(&u, ca, &v, cb);
            let next_v = combine(&u, cc, &v, cd);
            u = next_u;
            v = next_v;
        }
    }

    // v now fits in a machine word
    let small = match v.to_u64() {
        Some(0) | None => return u,
        Some(small) => small
    };
    let rem = (&u % small).to_u64().unwrap_or(0);
    BigUint::from(small.gcd(&rem))
}

/// Return the 64 bits of `n` starting at bit `shift`
fn leading_word(n: &BigUint, shift: u64) -> u128 {
    (n >> shift).to_u64().unwrap_or(0) as u128
}

/// Simulate Euclid on `(x, y)` and return the cofactors `[A, B, C, D]`
fn cofactors(x: u128, y: u128) -> [i128; 4] {
    let (mut x, mut y) = (x as i128, y as i128);
    let (mut a, mut b, mut c, mut d) = (1i128, 0i128, 0i128, 1i128);

    loop {
        if y + c <= 0 || y + d <= 0 {
            break;
        }
        let q = (x + a).div_euclid(y + c);
        if q != (x + b).div_euclid(y + d) {
            break;
        }

        let t = a - q * c;
        a = c;
        c = t;
        let t = b - q * d;
        b = d;
        d = t;
        let t = x - q * y;
        x = y;
        y = t;
    }

    [a, b, c, d]
}

/// Return `p*u + q*v`, where `p` and `q` never share a sign and the result
/// is known to be non-negative
fn combine(u: &BigUint, p: i128, v: &BigUint, q: i128) -> BigUint {
    let left = u * p.unsigned_abs();
    let right = v * q.unsigned_abs();
    if q <= 0 {
        left - right
    } else {
        right - left
    }
}

/// Uses `lehmer_gcd` for gcd and `num-bigint` for everything else
#[derive(Clone, Copy, Debug, Default)]
pub struct LehmerEngine;

impl Engine for LehmerEngine {
    type Int = BigUint;

    fn name(&self) -> &'static str {
        "lehmer"
    }
    fn random<R: Rng + ?Sized>(&self, rng: &mut R, bits: u64) -> BigUint {
        NumEngine.random(rng, bits)
    }
    fn gcd(&self, a: &BigUint, b: &BigUint) -> BigUint {
        lehmer_gcd(a, b)
    }
    fn mod_inverse(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, NoInverse> {
        NumEngine.mod_inverse(a, b)
    }
    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        NumEngine.mul(a, b)
    }
    fn floor_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        NumEngine.floor_div(a, b)
    }
    fn modulo(&self, a: &BigUint, b: &BigUint) -> BigUint {
        NumEngine.modulo(a, b)
    }
    fn low16(&self, n: &BigUint) -> u16 {
        NumEngine.low16(n)
    }
}
