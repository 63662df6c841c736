use std::env;
use std::fs;
use std::path::PathBuf;

use polars::prelude::*;
use tablelens::prelude::*;
use tablelens::Error;


fn temp_file(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("tablelens-{}-{name}", std::process::id()));
    path
}


/// Tests for reading, writing and summarizing datasets.
#[cfg(test)]
pub mod dataset_tests {
    use super::*;

    #[test]
    fn csv_round_trip() {
        let path = temp_file("round_trip.csv");
        let data = Dataset::new(
            ["x", "name", "Class"],
            [["1.5", "a b", "p"], ["", "c", "q"], ["-2", "d", "p"]],
        ).unwrap();

        data.to_csv(&path).unwrap();
        let read = DatasetReader::new()
            .file(&path)
            .has_header(true)
            .class_column("Class")
            .read()
            .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(read, data);
        assert_eq!(read.class_column(), Some(2));
    }


    #[test]
    fn class_column_name_ignores_case() {
        let path = temp_file("upper_class.csv");
        fs::write(&path, "x,Class\n1,a\n2,b\n").unwrap();

        let data = DatasetReader::new()
            .file(&path)
            .has_header(true)
            .class_column("class")
            .read()
            .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(data.class_column(), Some(1));
    }


    #[test]
    fn headerless_file_gets_dummy_names() {
        let path = temp_file("headerless.csv");
        fs::write(&path, "1,2\n3,4\n\n").unwrap();

        let data = Dataset::from_csv(&path, false).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(data.headers(), &["Feat. [1]", "Feat. [2]"]);
        assert_eq!(data.shape(), (2, 2));
    }


    #[test]
    fn reader_reports_missing_column_and_file() {
        let path = temp_file("missing_column.csv");
        fs::write(&path, "x,y\n1,2\n").unwrap();

        let err = DatasetReader::new()
            .file(&path)
            .has_header(true)
            .class_column("class")
            .read()
            .unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::UnknownColumn(name) if name == "class"));

        let err = DatasetReader::<_, &str>::new()
            .file(temp_file("does_not_exist.csv"))
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }


    #[test]
    fn ragged_file_is_rejected() {
        let path = temp_file("ragged.csv");
        fs::write(&path, "x,y\n1,2\n3\n").unwrap();

        let err = Dataset::from_csv(&path, true).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::RaggedRow { row: 1, expected: 2, got: 1 }));
    }


    #[test]
    fn dataframe_ingestion() {
        let s1 = Series::new("x", &[Some(1_i64), None, Some(3)]);
        let s2 = Series::new("class", &["a", "b", "a"]);
        let df = DataFrame::new(vec![s1, s2]).unwrap();

        let data = Dataset::from_dataframe(&df).unwrap();
        assert_eq!(data.headers(), &["x", "class"]);
        assert_eq!(data.column(0).unwrap(), vec!["1", "", "3"]);
        assert_eq!(data.column(1).unwrap(), vec!["a", "b", "a"]);
    }


    #[test]
    fn stats_and_normalization() {
        let data = Dataset::new(
            ["x", "y", "class"],
            [["0", "10", "p"], ["5", "20", "q"], ["10", "15", "p"]],
        ).unwrap();

        let stats = data.stats();
        assert_eq!(stats.n_cases, 3);
        assert_eq!(stats.n_classes, Some(2));
        assert_eq!(stats.ranges.len(), 2);

        let normalized = data.normalize(Normalization::MinMax, data.class_column());
        for j in 0..2 {
            for cell in normalized.column(j).unwrap() {
                let v = cell.parse::<f64>().unwrap();
                assert!((0.0..=1.0).contains(&v));
            }
        }
        assert_eq!(normalized.column(0).unwrap(), vec!["0", "0.5", "1"]);
        assert_eq!(normalized.column(2).unwrap(), data.column(2).unwrap());
    }


    #[test]
    fn unique_column_names() {
        let data = Dataset::new(["PC1"], [["1"]]).unwrap();
        let data = data.with_column("PC1", vec![2]).unwrap();
        let data = data.with_column("PC1", vec![3]).unwrap();
        assert_eq!(data.headers(), &["PC1", "PC1 (1)", "PC1 (2)"]);
    }


    #[test]
    fn column_is_the_checked_accessor() {
        let data = Dataset::new(["x"], [["1"]]).unwrap();
        assert_eq!(data.cell(0, 0), "1");
        assert!(matches!(
            data.column(3),
            Err(Error::ColumnOutOfRange { index: 3, n_columns: 1 })
        ));
    }


    #[test]
    #[should_panic]
    fn cell_out_of_range_panics() {
        let data = Dataset::new(["x"], [["1"]]).unwrap();
        let _ = data.cell(0, 3);
    }
}
