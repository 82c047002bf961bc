use super::{Engine, NoInverse};

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

/// An engine backed entirely by `num-bigint`
#[derive(Clone, Copy, Debug, Default)]
pub struct NumEngine;

impl Engine for NumEngine {
    type Int = BigUint;

    fn name(&self) -> &'static str {
        "num"
    }
    fn random<R: Rng + ?Sized>(&self, rng: &mut R, bits: u64) -> BigUint {
        rng.gen_biguint(bits)
    }
    fn gcd(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a.gcd(b)
    }
    fn mod_inverse(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, NoInverse> {
        // modinv panics on a zero modulus and calls everything invertible mod 1
        if *b <= BigUint::one() {
            return Err(NoInverse);
        }
        a.modinv(b).ok_or(NoInverse)
    }
    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b
    }
    fn floor_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a.div_floor(b)
    }
    fn modulo(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a.mod_floor(b)
    }
    fn low16(&self, n: &BigUint) -> u16 {
        n.iter_u32_digits().next().map_or(0, |digit| (digit & 0xFFFF) as u16)
    }
}
