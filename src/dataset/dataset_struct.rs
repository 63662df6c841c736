use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use polars::prelude::{DataFrame, DataType as PolarsType};
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{ColumnInfo, DataType, Error, Result};
use crate::common::utils;


const BUF_SIZE: usize = 256;


/// Struct `Dataset` holds the column headers and the rows of a table.
///
/// Every row has exactly one cell per header.
/// A `Dataset` is never modified in place by the algorithms;
/// operations that derive new columns return a new `Dataset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub(super) headers: Vec<String>,
    pub(super) rows: Vec<Vec<String>>,
}


impl Dataset {
    /// Construct a dataset from headers and rows.
    /// Returns [`Error::RaggedRow`] if some row has the wrong length.
    pub fn new<H, R, C>(headers: H, rows: R) -> Result<Self>
        where H: IntoIterator,
              H::Item: ToString,
              R: IntoIterator<Item = C>,
              C: IntoIterator,
              C::Item: ToString,
    {
        let headers = headers.into_iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(|c| c.to_string()).collect())
            .collect::<Vec<Vec<String>>>();

        let expected = headers.len();
        if let Some((row, cells)) = rows.iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(Error::RaggedRow { row, expected, got: cells.len() });
        }

        Ok(Self { headers, rows })
    }


    /// Read a comma-separated file.
    ///
    /// If `has_header` is `false`,
    /// the columns are named `Feat. [1]`, `Feat. [2]`, ...
    /// Blank lines are skipped.
    /// Cells are split on `,` without quoting rules.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut headers = Vec::new();
        if has_header {
            match lines.next() {
                Some(line) => {
                    headers = split_line(&line?);
                },
                None => { return Ok(Self { headers, rows: Vec::new() }); },
            }
        }

        let mut rows = Vec::with_capacity(BUF_SIZE);
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = split_line(&line);

            // if the header does not exist,
            // construct a dummy header.
            if headers.is_empty() {
                headers = (1..=cells.len())
                    .map(|i| format!("Feat. [{i}]"))
                    .collect();
            }
            rows.push(cells);
        }

        Self::new(headers, rows)
    }


    /// Convert `polars::DataFrame` into `Dataset`.
    /// Every column is cast to strings; nulls become empty cells.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let headers = data.get_column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let columns = data.get_columns()
            .par_iter()
            .map(|series| -> Result<Vec<String>> {
                let series = series.cast(&PolarsType::Utf8)?;
                let cells = series.utf8()?
                    .into_iter()
                    .map(|cell| cell.unwrap_or("").to_string())
                    .collect::<Vec<_>>();
                Ok(cells)
            })
            .collect::<Result<Vec<_>>>()?;

        let n_rows = data.height();
        let rows = (0..n_rows)
            .map(|i| columns.iter().map(|col| col[i].clone()).collect())
            .collect::<Vec<Vec<String>>>();

        Ok(Self { headers, rows })
    }


    /// Write the dataset as a comma-separated file with a header row.
    pub fn to_csv<P>(&self, file: P) -> Result<()>
        where P: AsRef<Path>,
    {
        let file = File::create(file)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", self.headers.join(","))?;
        for row in self.rows.iter() {
            writeln!(writer, "{}", row.join(","))?;
        }
        writer.flush()?;
        Ok(())
    }


    /// Returns the pair of the number of rows and
    /// the number of columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }


    /// Returns the column headers.
    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers[..]
    }


    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows[..]
    }


    /// Returns the `i`-th row.
    ///
    /// # Panics
    /// Panics if `i` is not less than the number of rows.
    #[inline]
    pub fn row(&self, i: usize) -> &[String] {
        &self.rows[i][..]
    }


    /// Returns the cell at (`row`, `column`).
    ///
    /// # Panics
    /// Panics if `row` or `column` is out of range.
    /// [`Dataset::column`] is the checked way to read a column.
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }


    /// Returns the cells of `column`.
    /// Returns [`Error::ColumnOutOfRange`] for an unknown index.
    pub fn column(&self, column: usize) -> Result<Vec<&str>> {
        if column >= self.headers.len() {
            let n_columns = self.headers.len();
            return Err(Error::ColumnOutOfRange { index: column, n_columns });
        }
        let cells = self.rows.iter()
            .map(|row| row[column].as_str())
            .collect();
        Ok(cells)
    }


    /// Returns the index of the column named `name`.
    #[inline]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }


    /// Returns the index of the first column named `class`,
    /// compared case-insensitively.
    pub fn class_column(&self) -> Option<usize> {
        self.headers.iter()
            .position(|h| h.trim().eq_ignore_ascii_case("class"))
    }


    /// Returns every column index except `label`.
    pub fn feature_columns(&self, label: Option<usize>) -> Vec<usize> {
        (0..self.headers.len())
            .filter(|&j| Some(j) != label)
            .collect()
    }


    /// Classifies every column.
    /// The column `label`, if given, is annotated as [`DataType::Label`].
    pub fn annotate(&self, label: Option<usize>) -> Vec<ColumnInfo> {
        let n_columns = self.headers.len();
        (0..n_columns).into_par_iter()
            .map(|j| {
                let name = &self.headers[j];
                if Some(j) == label {
                    return ColumnInfo::new(name, DataType::Label);
                }
                let values = self.rows.iter()
                    .map(|row| row[j].as_str())
                    .collect::<Vec<_>>();
                ColumnInfo::infer(name, &values)
            })
            .collect()
    }


    /// Returns the selected columns as a row-major numeric matrix.
    /// Non-numeric cells become `0.0`.
    pub fn numeric_matrix(&self, columns: &[usize]) -> Result<Vec<Vec<f64>>> {
        let n_columns = self.headers.len();
        if let Some(&index) = columns.iter().find(|&&j| j >= n_columns) {
            return Err(Error::ColumnOutOfRange { index, n_columns });
        }

        let matrix = self.rows.iter()
            .map(|row| {
                columns.iter()
                    .map(|&j| utils::raw_numeric(&row[j]))
                    .collect()
            })
            .collect();
        Ok(matrix)
    }


    /// Returns a name based on `base` that no column uses yet.
    #[inline]
    pub fn unique_column_name(&self, base: &str) -> String {
        utils::unique_name(base, &self.headers)
    }


    /// Returns a copy of this dataset with an extra column.
    /// The column name is made unique with a ` (k)` suffix if needed.
    pub fn with_column<S>(&self, base: &str, values: Vec<S>) -> Result<Self>
        where S: ToString
    {
        let n_rows = self.rows.len();
        if values.len() != n_rows {
            return Err(Error::invalid(
                "values",
                format!("expected {n_rows} cells, got {}", values.len()),
            ));
        }

        let mut dataset = self.clone();
        dataset.headers.push(self.unique_column_name(base));
        dataset.rows.iter_mut()
            .zip(values)
            .for_each(|(row, value)| { row.push(value.to_string()); });

        Ok(dataset)
    }


    /// Returns the dataset made of the rows at `indices`, in that order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let rows = indices.iter()
            .map(|&i| self.rows[i].clone())
            .collect();
        Self { headers: self.headers.clone(), rows }
    }


    /// Split the rows `ix[start..end]` as a test set
    /// and the remaining rows as a training set.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let test = self.subset(&ix[start..end]);
        let train = ix[..start].iter()
            .chain(&ix[end..])
            .copied()
            .collect::<Vec<_>>();
        let train = self.subset(&train);

        (train, test)
    }
}


fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| cell.trim_end_matches('\r').to_string())
        .collect()
}
