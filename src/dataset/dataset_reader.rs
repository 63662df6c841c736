use std::path::Path;

use crate::{Error, Result};
use super::dataset_struct::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a comma-separated file to [`Dataset`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use tablelens::prelude::*;
///
/// let filename = "/path/to/csv/file.csv";
/// let dataset = DatasetReader::new()
///     .file(filename)
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P, S> {
    file: Option<P>,
    has_header: bool,
    class: Option<S>,
}


impl<P, S> DatasetReader<P, S> {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            class: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for DatasetReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that must hold the class labels.
    /// [`DatasetReader::read`] fails if no such column exists.
    /// Names are compared ignoring ASCII case,
    /// like [`Dataset::class_column`].
    pub fn class_column(mut self, column: S) -> Self {
        self.class = Some(column);
        self
    }
}


impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Dataset>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let file = self.file
            .ok_or_else(|| Error::invalid("file", "the file name is not set"))?;

        let dataset = Dataset::from_csv(file.as_ref(), self.has_header)?;

        if let Some(class) = self.class {
            let class = class.as_ref();
            let found = dataset.headers()
                .iter()
                .any(|h| h.eq_ignore_ascii_case(class));
            if !found {
                return Err(Error::UnknownColumn(class.to_string()));
            }
        }

        tracing::debug!(
            rows = dataset.shape().0,
            columns = dataset.shape().1,
            "read dataset"
        );
        Ok(dataset)
    }
}
