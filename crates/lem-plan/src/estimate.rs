//! Token distribution and the turn-count estimator.

/// Split `token_count` tokens over `route_count` routes, round-robin.
///
/// Route `i` receives `⌊N / R⌋` tokens plus one more when `i < N mod R`,
/// which is exactly what repeatedly dealing one token per route in order
/// produces.  Returns an empty `Vec` when `route_count == 0`.
pub fn distribute(token_count: u32, route_count: usize) -> Vec<u32> {
    if route_count == 0 {
        return Vec::new();
    }
    let r = route_count as u64;
    let n = token_count as u64;
    let base = n / r;
    let extra = n % r;
    (0..r)
        .map(|i| (base + u64::from(i < extra)) as u32)
        .collect()
}

/// Estimated turns to move `token_count` tokens over routes of the given
/// lengths (tunnel counts).
///
/// Lengths are sorted ascending (stable) before tokens are dealt, so shorter
/// routes never get fewer tokens than longer ones.  Returns `None` for an
/// empty length list.
pub fn estimate_turns(lengths: &[usize], token_count: u32) -> Option<u64> {
    if lengths.is_empty() {
        return None;
    }
    let mut sorted = lengths.to_vec();
    sorted.sort();

    let allocation = distribute(token_count, sorted.len());
    let finish = sorted
        .iter()
        .zip(&allocation)
        .filter(|(_, k)| **k > 0)
        .map(|(len, k)| *len as u64 + u64::from(*k) - 1)
        .max()
        .unwrap_or(0);
    Some(finish)
}
