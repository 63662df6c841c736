use tablelens::prelude::*;
use tablelens::Error;


fn two_values() -> Dataset {
    let rows = (0..20).map(|i| {
        let (x, label) = if i % 2 == 0 { ("1", "a") } else { ("2", "b") };
        vec![x.to_string(), label.to_string()]
    });
    Dataset::new(["x", "class"], rows).unwrap()
}


/// Tests for `RandomForest`.
#[cfg(test)]
pub mod random_forest_tests {
    use super::*;

    #[test]
    fn default_forest_fits_clean_data() {
        let data = two_values();
        let forest = RandomForestBuilder::new(&data).build().unwrap();
        assert_eq!(forest.n_trees(), 10);

        let f = forest.produce(&data).unwrap();
        assert_eq!(f.n_trees(), 10);
        assert_eq!(f.label_column(), 1);
        assert_eq!(f.accuracy(&data), 1.0);
        assert_eq!(f.predict(&["1", "?"]), "a");
        assert_eq!(f.predict(&["2", "?"]), "b");
        assert_eq!(f.predict_all(&data)[..2], ["a".to_string(), "b".to_string()]);
    }


    #[test]
    fn same_seed_grows_the_same_forest() {
        let data = two_values();
        let grow = |seed| {
            RandomForestBuilder::new(&data)
                .n_trees(4)
                .sample_ratio(0.5)
                .seed(seed)
                .build()
                .unwrap()
                .produce(&data)
                .unwrap()
        };
        assert_eq!(grow(7), grow(7));
        assert_eq!(grow(8).trees().len(), 4);
    }


    #[test]
    fn depth_limit_reaches_every_tree() {
        let data = two_values();
        let f = RandomForestBuilder::new(&data)
            .max_depth(1)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();
        assert!(f.trees().iter().all(|tree| tree.depth() <= 1));
    }


    #[test]
    fn invalid_parameters_are_rejected() {
        let data = two_values();
        let invalid = |builder: RandomForestBuilder| {
            matches!(builder.build(), Err(Error::InvalidParameter { .. }))
        };
        assert!(invalid(RandomForestBuilder::new(&data).n_trees(0)));
        assert!(invalid(RandomForestBuilder::new(&data).sample_ratio(0.0)));
        assert!(invalid(RandomForestBuilder::new(&data).sample_ratio(1.5)));
        assert!(invalid(RandomForestBuilder::new(&data).max_depth(0)));
        assert!(matches!(
            RandomForestBuilder::new(&data).label_column(5).build(),
            Err(Error::ColumnOutOfRange { index: 5, n_columns: 2 })
        ));

        let empty = Dataset::new(["x", "class"], Vec::<Vec<String>>::new())
            .unwrap();
        let forest = RandomForestBuilder::new(&data).build().unwrap();
        assert!(matches!(forest.produce(&empty), Err(Error::EmptyDataset)));
    }


    #[test]
    fn forest_predictions_are_appended() {
        let data = two_values();
        let f = RandomForestBuilder::new(&data)
            .build()
            .unwrap()
            .produce(&data)
            .unwrap();
        let with = data.with_forest_predictions(&f).unwrap();

        assert_eq!(with.headers().last().unwrap(), "RF_prediction");
        assert_eq!(with.row(0).last().unwrap(), "0");
        assert_eq!(with.row(1).last().unwrap(), "1");
    }
}
