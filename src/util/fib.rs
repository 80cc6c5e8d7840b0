//! Iterative Fibonacci over arbitrary-precision integers.

use num_bigint::BigUint;

/// Compute the `n`-th Fibonacci number iteratively.
///
/// `fibonacci(0) == 0`, `fibonacci(1) == 1`. `BigUint` keeps large indices
/// exact; `fibonacci(200)` already exceeds every fixed-width integer type.
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::ZERO;
    let mut b = BigUint::from(1u8);

    if n < 2 {
        return BigUint::from(n);
    }

    for _ in 2..=n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    b
}
