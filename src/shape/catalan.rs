use num_bigint::BigUint;

/// The n-th Catalan number, i.e. the number of full binary trees with
/// `n` internal nodes.
pub fn catalan(n: usize) -> BigUint {
    // C(k+1) = C(k) * 2(2k+1) / (k+2), exact at every step
    let mut c = BigUint::from(1u32);
    for k in 0..n {
        c = c * BigUint::from(2 * (2 * k + 1)) / BigUint::from(k + 2);
    }
    c
}
