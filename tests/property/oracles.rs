//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations in wider integer types or on `Vec`,
//! used as ground truth for the container and rational properties.

use std::cmp::Ordering;

/// What `erase(pos, count)` does to a `Vec`.
pub fn oracle_erase<T>(oracle: &mut Vec<T>, pos: usize, count: usize) {
    if pos > oracle.len() {
        return;
    }
    let count = if count == 0 { oracle.len() } else { count };
    let end = pos.saturating_add(count).min(oracle.len());
    oracle.drain(pos..end);
}

/// What `insert_slice(pos, items)` does to a `Vec`.
pub fn oracle_insert<T: Clone>(oracle: &mut Vec<T>, pos: usize, items: &[T]) {
    let at = pos.min(oracle.len());
    oracle.splice(at..at, items.iter().cloned());
}

/// Capacity the sanitize step allows for `len` elements.
pub fn sanitized_bound(len: usize) -> usize {
    if len == 0 {
        labkit::INITIAL_CAPACITY
    } else {
        len * labkit::SANITIZE_FACTOR
    }
}

/// Compare `an/ad` and `bn/bd` (positive denominators) by cross-multiplying in i128.
pub fn oracle_cmp(an: i64, ad: i64, bn: i64, bd: i64) -> Ordering {
    (an as i128 * bd as i128).cmp(&(bn as i128 * ad as i128))
}

/// Reduce `n/d` in i128 with the sign on the numerator.
pub fn oracle_reduce(n: i64, d: i64) -> (i128, i128) {
    let (mut n, mut d) = (n as i128, d as i128);
    if d < 0 {
        n = -n;
        d = -d;
    }
    let (mut a, mut b) = (n.abs(), d);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    (n / a, d / a)
}
