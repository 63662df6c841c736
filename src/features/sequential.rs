use crate::{Dataset, Error, Result};
use crate::common::{checker, utils};
use super::format_cell;


/// Which neighbor each column is compared with.
/// The selection wraps around at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Column `i` is paired with column `i + 1`.
    #[default]
    Forward,
    /// Column `i` is paired with column `i - 1`.
    Backward,
}


impl Direction {
    #[inline]
    fn neighbor(&self, i: usize, n: usize) -> usize {
        match self {
            Self::Forward  => (i + 1) % n,
            Self::Backward => (i + n - 1) % n,
        }
    }
}


impl Dataset {
    /// Returns a copy of this dataset with one column per entry of
    /// `columns`, named `Distance(current-neighbor)` and holding
    /// `neighbor - current`.
    ///
    /// Cells are written with four decimals;
    /// a non-numeric operand gives `0.0000`.
    pub fn with_sequential_distances(
        &self,
        columns: &[usize],
        direction: Direction,
    ) -> Result<Self>
    {
        if columns.len() < 2 {
            return Err(Error::invalid("columns", "need at least two columns"));
        }
        for &j in columns {
            checker::check_column(self, j)?;
        }

        let n = columns.len();
        let mut dataset = self.clone();
        for i in 0..n {
            let current = columns[i];
            let next = columns[direction.neighbor(i, n)];

            let values = self.rows()
                .iter()
                .map(|row| {
                    let a = utils::parse_numeric(&row[current]);
                    let b = utils::parse_numeric(&row[next]);
                    match (a, b) {
                        (Some(a), Some(b)) => format_cell(b - a),
                        _ => format_cell(0f64),
                    }
                })
                .collect::<Vec<_>>();

            let name = format!(
                "Distance({}-{})",
                self.headers()[current],
                self.headers()[next],
            );
            dataset = dataset.with_column(&name, values)?;
        }
        Ok(dataset)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_wrap_around() {
        assert_eq!(Direction::Forward.neighbor(2, 3), 0);
        assert_eq!(Direction::Backward.neighbor(0, 3), 2);
        assert_eq!(Direction::Backward.neighbor(2, 3), 1);
    }
}
