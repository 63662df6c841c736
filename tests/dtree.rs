use std::env;
use std::fs;

use polars::prelude::*;
use tablelens::prelude::*;
use tablelens::{gini, Error};


fn separable() -> Dataset {
    let rows = (1..=10).map(|x| {
        let label = if x <= 5 { "a" } else { "b" };
        vec![x.to_string(), "7".to_string(), label.to_string()]
    });
    Dataset::new(["x", "noise", "class"], rows).unwrap()
}


/// Tests for `DecisionTree`.
#[cfg(test)]
pub mod dtree_tests {
    use super::*;

    #[test]
    fn splits_at_separating_threshold() {
        let data = separable();
        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        assert_eq!(f.questions(), vec!["Is x <= 5?".to_string()]);
        assert_eq!(f.depth(), 1);
        assert_eq!(f.n_leaves(), 2);
        assert_eq!(f.accuracy(&data), 1.0);
        assert_eq!(f.predict(&["2.5", "0", "?"]), "a");
        assert_eq!(f.predict(&["n/a", "0", "?"]), "b");
        assert_eq!(
            f.to_string(),
            "Q: Is x <= 5?\n  Predict: a (5 cases)\n  Predict: b (5 cases)\n"
        );
    }


    #[test]
    fn single_label_is_a_leaf() {
        let data = Dataset::new(
            ["x", "class"],
            [["1", "a"], ["2", "a"], ["3", "a"]],
        ).unwrap();
        let f = DecisionTreeBuilder::new(&data)
            .label_column(1)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        assert_eq!(f.to_string(), "Predict: a (3 cases)\n");
        assert!(f.questions().is_empty());
    }


    #[test]
    fn non_numeric_cells_go_right() {
        let data = Dataset::new(
            ["x", "class"],
            [["1", "a"], ["2", "a"], ["?", "b"], ["", "b"]],
        ).unwrap();
        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        assert_eq!(f.questions(), vec!["Is x <= 2?".to_string()]);
        assert_eq!(f.accuracy(&data), 1.0);
    }


    #[test]
    fn nan_cells_go_right() {
        let data = Dataset::new(
            ["x", "class"],
            [["1", "a"], ["2", "a"], ["NaN", "b"], ["8", "b"], ["nan", "b"]],
        ).unwrap();
        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        assert_eq!(f.questions(), vec!["Is x <= 2?".to_string()]);
        assert_eq!(f.accuracy(&data), 1.0);
        assert_eq!(f.predict(&["NaN", "?"]), "b");
    }


    #[test]
    fn majority_tie_picks_smallest_label() {
        let data = Dataset::new(
            ["x", "class"],
            [["1", "b"], ["1", "a"]],
        ).unwrap();
        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        assert_eq!(f.to_string(), "Predict: a (2 cases)\n");
    }


    #[test]
    fn max_depth_limits_growth() {
        let rows = (0..9).map(|x| {
            let label = ["a", "b", "c"][x / 3];
            vec![x.to_string(), label.to_string()]
        });
        let data = Dataset::new(["x", "class"], rows).unwrap();

        let full = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();
        assert_eq!(full.depth(), 2);
        assert_eq!(full.accuracy(&data), 1.0);

        let stump = DecisionTreeBuilder::new(&data)
            .max_depth(1)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();
        assert_eq!(stump.depth(), 1);
        assert!(DecisionTreeBuilder::new(&data).max_depth(0).build().is_err());
    }


    #[test]
    fn gini_impurity() {
        assert!((gini(["A", "A", "B", "B"]) - 0.5).abs() < 1e-12);
        assert_eq!(gini(["A", "A", "A"]), 0.0);
    }


    #[test]
    fn invalid_invocations_fail() {
        let empty = Dataset::new(["x", "class"], Vec::<Vec<String>>::new()).unwrap();
        let tree = DecisionTreeBuilder::new(&empty).build().unwrap();
        assert!(matches!(tree.produce(&empty), Err(Error::EmptyDataset)));

        let no_class = Dataset::new(["x", "y"], [["1", "2"]]).unwrap();
        assert!(matches!(
            DecisionTreeBuilder::new(&no_class).build(),
            Err(Error::UnknownColumn(_))
        ));
        assert!(matches!(
            DecisionTreeBuilder::new(&no_class).label_column(5).build(),
            Err(Error::ColumnOutOfRange { index: 5, n_columns: 2 })
        ));
    }


    #[test]
    fn prediction_column_uses_first_seen_order() {
        let data = Dataset::new(
            ["x", "class"],
            [["1", "b"], ["2", "b"], ["3", "a"], ["4", "a"]],
        ).unwrap();
        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        let data = data.with_predictions(&f).unwrap();
        assert_eq!(data.headers()[2], "DT_prediction");
        assert_eq!(data.column(2).unwrap(), vec!["0", "0", "1", "1"]);
    }


    #[test]
    fn serde_and_dot_export() {
        let data = separable();
        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        let json = serde_json::to_string(&f).unwrap();
        let g: DecisionTreeClassifier = serde_json::from_str(&json).unwrap();
        assert_eq!(f, g);

        let mut path = env::temp_dir();
        path.push(format!("tablelens-{}-tree.dot", std::process::id()));
        f.to_dot_file(&path).unwrap();
        let dot = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("x <= 5 ?"));
    }


    // Toy example  (o/x are the pos/neg examples)
    //
    // 15|                     |
    //   |                   5 |
    //   |                  x  |
    //   |                     |         6
    //   |                     |        x
    // 10|       4             |________________________ 9.5
    //   |      x              |             1
    //   |                     |            o
    //   |                     |
    //   |                     |   0
    //  5|                     |  o
    //   |                     |                 2
    //   |                     |                o
    //   |            3        |
    //   |           x         |
    //   |_____________________|____________________
    //  0            5         | 10            15
    //                         |
    //                        9.0
    #[test]
    fn full_binary_tree_from_dataframe() {
        let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0]);
        let s2 = Series::new("y", &[5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0]);
        let target = Series::new("class", &[1_i64, 1, 1, -1, -1, -1, -1]);

        let df = DataFrame::new(vec![s1, s2, target]).unwrap();
        let data = Dataset::from_dataframe(&df).unwrap();

        let f = DecisionTreeBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();

        assert_eq!(f.accuracy(&data), 1.0);
        assert!(f.n_leaves() >= 2);
    }
}
