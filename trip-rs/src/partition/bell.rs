/// Number of set partitions of an `n`-element set, computed with the Bell triangle.
///
/// Returns `None` when the value (or the last entry of its triangle row) no longer fits in a `u128`.
pub fn bell_number(n: usize) -> Option<u128> {
    let mut row: Vec<u128> = vec![1];
    for _ in 0..n {
        let mut next_row = Vec::with_capacity(row.len() + 1);
        next_row.push(*row.last()?);
        for above in &row {
            let left = *next_row.last()?;
            next_row.push(left.checked_add(*above)?);
        }
        row = next_row;
    }
    row.first().copied()
}
