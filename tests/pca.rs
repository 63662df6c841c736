use tablelens::prelude::*;
use tablelens::Error;


fn line() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0],
        vec![2.0, 4.0],
        vec![3.0, 6.0],
    ]
}


/// Tests for `PcaModel`.
#[cfg(test)]
pub mod pca_tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn points_on_a_line() {
        let model = PcaModel::fit(&line()).unwrap();

        assert_eq!(model.n_components(), 2);
        assert_eq!(model.means(), &[2.0, 4.0]);

        let sigma = model.singular_values();
        assert!((sigma[0] - 10f64.sqrt()).abs() < EPS);
        assert!(sigma[1].abs() < EPS);
        assert!(sigma[0] >= sigma[1]);

        let v = &model.components()[0];
        let r = 5f64.sqrt();
        assert!((v[0].abs() - 1.0 / r).abs() < EPS);
        assert!((v[1].abs() - 2.0 / r).abs() < EPS);
        assert!(v[0] * v[1] > 0.0);

        let u = &model.components()[1];
        let dot = v[0] * u[0] + v[1] * u[1];
        assert!(dot.abs() < EPS);
        assert!(((u[0] * u[0] + u[1] * u[1]).sqrt() - 1.0).abs() < EPS);
    }


    #[test]
    fn projection_and_reconstruction() {
        let model = PcaModel::fit(&line()).unwrap();

        let p = model.project(&[3.0, 6.0], 0).unwrap();
        assert!((p.abs() - 5f64.sqrt()).abs() < EPS);
        assert!((model.project_centered(&[1.0, 2.0], 0).unwrap() - p).abs() < EPS);

        let back = model.reconstruct(&[p]).unwrap();
        assert!((back[0] - 1.0).abs() < EPS);
        assert!((back[1] - 2.0).abs() < EPS);

        let projected = model.transform(&line(), 1).unwrap();
        assert_eq!(projected.len(), 3);
        assert!(projected[1][0].abs() < EPS);

        assert!(model.transform(&line(), 0).is_err());
        assert!(model.transform(&line(), 3).is_err());
    }


    #[test]
    fn all_components_reconstruct_a_full_rank_matrix() {
        let matrix = vec![
            vec![2.0, 0.0, 1.0],
            vec![0.0, 1.0, 3.0],
            vec![1.0, 4.0, 0.0],
            vec![5.0, 2.0, 2.0],
            vec![3.0, 3.0, 4.0],
        ];
        let model = PcaModel::fit(&matrix).unwrap();
        assert!(model.singular_values().iter().all(|&s| s >= 0.0));

        let components = model.components();
        for (a, u) in components.iter().enumerate() {
            for (b, v) in components.iter().enumerate() {
                let dot = u.iter().zip(v).map(|(x, y)| x * y).sum::<f64>();
                let expected = if a == b { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < EPS);
            }
        }

        for row in matrix.iter() {
            let projections = (0..3)
                .map(|k| model.project(row, k).unwrap())
                .collect::<Vec<_>>();
            let centered = model.reconstruct(&projections).unwrap();
            for ((c, m), x) in centered.iter().zip(model.means()).zip(row) {
                assert!((c + m - x).abs() < EPS);
            }
        }
    }


    #[test]
    fn out_of_range_projections_fail() {
        let model = PcaModel::fit(&line()).unwrap();
        assert!(model.project(&[1.0, 2.0], 2).is_err());
        assert!(model.project(&[1.0, 2.0, 3.0], 0).is_err());
        assert!(model.project_centered(&[1.0], 0).is_err());
        assert!(model.reconstruct(&[1.0, 2.0, 3.0]).is_err());
        assert!(model.transform(&[vec![1.0]], 1).is_err());
    }


    #[test]
    fn dataset_components_skip_the_label() {
        let data = Dataset::new(
            ["x", "PC1", "class"],
            [["1", "2", "a"], ["2", "4", "b"], ["3", "6", "a"]],
        ).unwrap();

        let model = PcaModel::from_dataset(&data, data.class_column()).unwrap();
        assert_eq!(model.columns(), Some(&[0, 1][..]));

        let data = data.with_components(&model, 2).unwrap();
        assert_eq!(data.headers(), &["x", "PC1", "class", "PC1 (1)", "PC2"]);
        assert_eq!(data.column(2).unwrap(), vec!["a", "b", "a"]);

        let middle = data.cell(1, 3).parse::<f64>().unwrap();
        assert!(middle.abs() < EPS);
    }


    #[test]
    fn invalid_inputs_fail() {
        let only_label = Dataset::new(["class"], [["a"], ["b"]]).unwrap();
        assert!(matches!(
            PcaModel::from_dataset(&only_label, Some(0)),
            Err(Error::NoFeatureColumns)
        ));

        let empty = Dataset::new(["x"], Vec::<Vec<String>>::new()).unwrap();
        assert!(matches!(
            PcaModel::from_dataset(&empty, None),
            Err(Error::EmptyDataset)
        ));

        let model = PcaModel::fit(&line()).unwrap();
        assert!(empty.with_components(&model, 1).is_err());
    }


    #[test]
    fn serde_round_trip() {
        let model = PcaModel::fit(&line()).unwrap();
        let json = serde_json::to_string(&model).unwrap();
        let restored: PcaModel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.singular_values(), model.singular_values());
        assert_eq!(restored.components(), model.components());
    }
}
