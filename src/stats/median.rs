/// Median of the values projected by `selector`.
///
/// Returns `0` for an empty input. For an even number of values the two
/// central values are averaged with integer division, truncating toward zero
/// (`[-3, 0]` gives `-1`). The sum is taken in 128-bit arithmetic so extreme
/// values cannot overflow.
pub fn median<I, F>(source: I, selector: F) -> i64
where
    I: IntoIterator,
    F: FnMut(I::Item) -> i64,
{
    let mut values: Vec<i64> = source.into_iter().map(selector).collect();
    values.sort_unstable();

    let center = values.len() / 2;
    match values.len() {
        0 => 0,
        1 => values[0],
        len if len % 2 == 0 => {
            let sum = i128::from(values[center - 1]) + i128::from(values[center]);
            (sum / 2) as i64
        }
        _ => values[center],
    }
}
