//! Pascal's triangle row generation

/// Generate the first `count` rows of Pascal's triangle
///
/// Row `r` has `r + 1` entries; the ends are 1 and every interior entry is
/// the sum of the two entries above it. `count = 0` yields an empty
/// triangle.
pub fn rows(count: usize) -> Vec<Vec<u64>> {
    let mut triangle: Vec<Vec<u64>> = Vec::with_capacity(count);

    for row in 0..count {
        let mut current = vec![1u64; row + 1];
        for col in 1..row {
            current[col] = triangle[row - 1][col - 1] + triangle[row - 1][col];
        }
        triangle.push(current);
    }

    triangle
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_zero_rows() {
        assert!(rows(0).is_empty());
    }

    #[test]
    fn test_first_row_is_unit() {
        assert_eq!(rows(1), vec![vec![1]]);
    }

    #[test]
    fn test_first_five_rows() {
        let triangle = rows(5);
        assert_eq!(
            triangle,
            vec![
                vec![1],
                vec![1, 1],
                vec![1, 2, 1],
                vec![1, 3, 3, 1],
                vec![1, 4, 6, 4, 1],
            ]
        );
    }

    #[test]
    fn test_rows_sum_to_powers_of_two() {
        for (row, entries) in rows(8).iter().enumerate() {
            let sum: u64 = entries.iter().sum();
            assert_eq!(sum, 1 << row);
        }
    }
}
