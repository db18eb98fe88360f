//! The supplemented number-theoretic operations (SPEC_FULL.md §15): GCD/LCM
//! surfaced as public methods, modular square, integer roots, primality, and
//! the factorial/binomial/power family -- the `mpz_gcd`/`mpz_sqrtrem`/
//! `mpz_probab_prime_p`/`mpz_bin_ui`-shaped "external bignum API" operations
//! spec.md §6 lists but §1-4 only wire through the dispatcher for the core
//! arithmetic kernels.

use crate::ll;
use crate::Error;

use super::dispatch;
use super::Int;

/// The even-degree-root-of-a-negative-number domain error (spec.md §7).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RootError;

impl core::fmt::Display for RootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("even-degree root of a negative number")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RootError {}

impl<const N: usize> Int<N> {
    /// Greatest common divisor. `gcd(0, b) == |b|`, `gcd(0, 0) == 0`
    /// (spec.md §4.E, testable property 11).
    pub fn gcd(&self, other: &Int<N>) -> Int<N> {
        dispatch::gcd(self, other)
    }

    /// Least common multiple. `lcm(a, b) = |a / gcd(a, b) * b|`,
    /// `lcm(0, 0) == 0` (spec.md §4.E "Least common multiple").
    pub fn lcm(&self, other: &Int<N>) -> Int<N> {
        if self.is_zero() || other.is_zero() {
            return Int::ZERO;
        }
        let g = dispatch::gcd(self, other);
        let (_, a_mag) = self.view();
        let (_, g_mag) = g.view();
        let (quotient, _) = ll::div::tdiv_qr(a_mag, g_mag);
        let (_, b_mag) = other.view();
        let product = ll::trim(ll::mul::mul(&quotient, b_mag));
        Int::from_sign_magnitude(false, &product)
    }

    /// `(self * self) mod modulus` (spec.md §4.E "Modular square").
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if `modulus` is zero.
    pub fn mod_square(&self, modulus: &Int<N>) -> Result<Int<N>, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let squared = dispatch::square(self);
        let (_, sq_mag) = squared.view();
        let (_, mod_mag) = modulus.view();
        // The square of any value is nonnegative, so the truncated-division
        // remainder below is always nonnegative regardless of the modulus's
        // sign.
        let (_, r) = ll::div::tdiv_qr(sq_mag, mod_mag);
        Ok(Int::from_sign_magnitude(false, &ll::trim(r)))
    }

    /// Integer square root, truncated toward zero:
    /// `sqrt(a)^2 <= a < (sqrt(a) + 1)^2` (spec.md testable property 13).
    ///
    /// # Errors
    /// Returns [`RootError`] if `self` is negative.
    pub fn sqrt(&self) -> Result<Int<N>, RootError> {
        Ok(self.sqrtrem()?.0)
    }

    /// As [`Self::sqrt`], also returning the exact remainder
    /// `r = a - sqrt(a)^2`.
    pub fn sqrtrem(&self) -> Result<(Int<N>, Int<N>), RootError> {
        if self.is_negative() {
            return Err(RootError);
        }
        let (_, mag) = self.view();
        let (root, rem) = ll::root::sqrtrem(mag);
        Ok((
            Int::from_sign_magnitude(false, &root),
            Int::from_sign_magnitude(false, &rem),
        ))
    }

    /// Integer `n`-th root (`n >= 2`), truncated toward zero.
    ///
    /// # Errors
    /// Returns [`RootError`] if `n` is even and `self` is negative.
    pub fn root(&self, n: u32) -> Result<Int<N>, RootError> {
        Ok(self.rootrem(n)?.0)
    }

    /// As [`Self::root`], also returning the exact remainder.
    pub fn rootrem(&self, n: u32) -> Result<(Int<N>, Int<N>), RootError> {
        debug_assert!(n >= 2, "root degree must be at least 2");
        let negative = self.is_negative();
        if negative && n % 2 == 0 {
            return Err(RootError);
        }
        let (_, mag) = self.view();
        let (root, rem) = ll::root::rootrem(mag, n);
        Ok((
            Int::from_sign_magnitude(negative, &root),
            Int::from_sign_magnitude(negative, &rem),
        ))
    }

    /// Whether `self` is a perfect square (`n^2` for some integer `n`).
    /// Negative values are never perfect squares.
    pub fn is_perfect_square(&self) -> bool {
        if self.is_negative() {
            return false;
        }
        let (_, mag) = self.view();
        ll::misc::perfect_square_p(mag)
    }

    /// Whether `self` is a perfect `k`-th power for some `k >= 2`: `n^k ==
    /// self` for some integer `n`. A negative value can only be a perfect
    /// power via an odd exponent, since an even power is never negative.
    pub fn is_perfect_power(&self) -> bool {
        let (negative, mag) = self.view();
        if negative {
            ll::misc::perfect_power_p_odd(mag)
        } else {
            ll::misc::perfect_power_p(mag)
        }
    }

    /// Probabilistic primality test, GMP's `mpz_probab_prime_p` convention:
    /// `false` means composite for certain; `true` means prime (`reps == 0`
    /// skips the probabilistic rounds, relying only on trial division and
    /// the deterministic witness set) or probably prime.
    ///
    /// # Errors
    /// Returns [`Error::Domain`] if `self` is negative, or
    /// [`Error::InvalidArgument`] if `reps` is zero (spec.md §7's "invalid
    /// number-of-primality-repetitions").
    pub fn is_probably_prime(&self, reps: u32) -> Result<bool, Error> {
        if reps == 0 {
            return Err(Error::InvalidArgument("primality repetition count must be at least 1"));
        }
        if self.is_negative() {
            return Err(Error::Domain("primality of a negative number"));
        }
        let (_, mag) = self.view();
        Ok(ll::prime::probab_prime_p(mag, reps) != 0)
    }

    /// The smallest probable prime strictly greater than `self`.
    pub fn next_prime(&self) -> Int<N> {
        let (_, mag) = self.view();
        Int::from_sign_magnitude(false, &ll::trim(ll::prime::nextprime(mag)))
    }

    /// `self` raised to the power `exp`, by binary exponentiation.
    pub fn pow(&self, exp: u32) -> Int<N> {
        let (neg, mag) = self.view();
        let result_neg = neg && exp % 2 == 1;
        let product = ll::trim(ll::prime::pow_ui(mag, exp as u64));
        Int::from_sign_magnitude(result_neg, &product)
    }

    /// `n!`.
    pub fn factorial(n: u64) -> Int<N> {
        Int::from_sign_magnitude(false, &ll::trim(ll::prime::fac_ui(n)))
    }

    /// The binomial coefficient `C(n, k)`.
    pub fn binomial(n: u64, k: u64) -> Int<N> {
        Int::from_sign_magnitude(false, &ll::trim(ll::prime::bin_ui(n, k)))
    }
}

#[cfg(test)]
mod tests {
    use crate::int::Int2;
    use crate::Error;

    #[test]
    fn gcd_matches_spec_examples() {
        let a = Int2::from(18u64);
        let b = Int2::from(12u64);
        assert_eq!(a.gcd(&b), Int2::from(6u64));
        let neg_a = Int2::from(-18i64);
        assert_eq!(neg_a.gcd(&b), Int2::from(6u64));
    }

    #[test]
    fn is_perfect_power_respects_sign() {
        // -8 == (-2)^3, an odd power, so it is a perfect power.
        assert!(Int2::from(-8i64).is_perfect_power());
        // -4 has no integer k-th root for any k >= 2 (the even root isn't
        // real, and |4|'s only nontrivial power is the square, k == 2, which
        // is even).
        assert!(!Int2::from(-4i64).is_perfect_power());
        assert!(Int2::from(64u64).is_perfect_power());
    }

    #[test]
    fn lcm_zero_special_case() {
        assert_eq!(Int2::ZERO.lcm(&Int2::ZERO), Int2::ZERO);
        assert_eq!(Int2::from(4u64).lcm(&Int2::from(6u64)), Int2::from(12u64));
    }

    #[test]
    fn sqrt_matches_spec_examples() {
        let a = Int2::from(1_000_000u64);
        assert_eq!(a.sqrt().unwrap(), Int2::from(1000u64));

        let b = Int2::from(1_000_001u64);
        let (root, rem) = b.sqrtrem().unwrap();
        assert_eq!(root, Int2::from(1000u64));
        assert_eq!(rem, Int2::from(1u64));
    }

    #[test]
    fn even_root_of_negative_is_a_domain_error() {
        let a = Int2::from(-4i64);
        assert!(a.sqrt().is_err());
        assert!(a.root(4).is_err());
        // Odd roots of negatives are well-defined.
        assert!(a.root(3).is_ok());
    }

    #[test]
    fn primality_matches_known_values() {
        assert_eq!(Int2::from(97u64).is_probably_prime(25), Ok(true));
        assert_eq!(Int2::from(91u64).is_probably_prime(25), Ok(false));
        assert_eq!(
            Int2::from(-1i64).is_probably_prime(25),
            Err(Error::Domain("primality of a negative number"))
        );
        assert!(Int2::from(97u64).is_probably_prime(0).is_err());
    }

    #[test]
    fn next_prime_and_factorial_match_known_values() {
        assert_eq!(Int2::from(14u64).next_prime(), Int2::from(17u64));
        assert_eq!(Int2::factorial(5), Int2::from(120u64));
        assert_eq!(Int2::binomial(5, 2), Int2::from(10u64));
    }
}
