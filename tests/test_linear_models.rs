use lsq_classifier::metrics::{accuracy_score, mean_squared_error};
use lsq_classifier::preprocessing::add_bias_column;
use lsq_classifier::{LinearClassifier, LinearModelError, LinearRegression, Matrix, Vector};
use ndarray::{Array, Axis, array, concatenate};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn two_clusters(n_per_class: usize, seed: u64) -> (Matrix, Vector) {
    let mut rng = StdRng::seed_from_u64(seed);
    let positive = Array::random_using((n_per_class, 2), Uniform::new(1.0, 3.0), &mut rng);
    let negative = Array::random_using((n_per_class, 2), Uniform::new(-3.0, -1.0), &mut rng);

    let features = concatenate![Axis(0), positive, negative];
    let mut labels = Vector::ones(2 * n_per_class);
    labels.slice_mut(ndarray::s![n_per_class..]).fill(-1.0);

    (add_bias_column(&features), labels)
}

#[test]
fn test_classifier_separates_clusters() {
    let (x, y) = two_clusters(50, 42);

    let mut model = LinearClassifier::new();
    model.fit(&x, &y).unwrap();

    let predictions = model.predict(&x).unwrap();
    assert_eq!(accuracy_score(&y, &predictions).unwrap(), 1.0);

    let (x_test, y_test) = two_clusters(20, 7);
    assert_eq!(model.score(&x_test, &y_test).unwrap(), 1.0);
}

#[test]
fn test_boundary_lies_between_clusters() {
    let (x, y) = two_clusters(50, 3);

    let mut model = LinearClassifier::new();
    model.fit(&x, &y).unwrap();

    // Every boundary point sits outside both cluster boxes.
    let abscissas = Array::linspace(-3.0, 3.0, 13);
    let ordinates = model.decision_boundary(&abscissas, 0.0).unwrap();
    for (&a, &o) in abscissas.iter().zip(ordinates.iter()) {
        let inside_positive = (1.0..=3.0).contains(&a) && (1.0..=3.0).contains(&o);
        let inside_negative = (-3.0..=-1.0).contains(&a) && (-3.0..=-1.0).contains(&o);
        assert!(!inside_positive && !inside_negative, "({a}, {o})");
    }
}

#[test]
fn test_regression_recovers_noisy_plane() {
    let mut rng = StdRng::seed_from_u64(11);
    let features = Array::random_using((200, 2), Uniform::new(-5.0, 5.0), &mut rng);
    let noise = Array::random_using(200, Uniform::new(-0.05, 0.05), &mut rng);

    let y = features.column(0).mapv(|v| 2.0 * v) - features.column(1).mapv(|v| 0.5 * v) + 3.0 + noise;
    let x = add_bias_column(&features);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let w = model.coefficients().unwrap();
    assert!((w[0] - 3.0).abs() < 0.05);
    assert!((w[1] - 2.0).abs() < 0.05);
    assert!((w[2] + 0.5).abs() < 0.05);

    let predictions = model.predict(&x).unwrap();
    assert!(mean_squared_error(&y, &predictions).unwrap() < 0.01);
}

#[test]
fn test_classifier_is_sign_of_regression() {
    let (x, y) = two_clusters(30, 5);

    let mut regression = LinearRegression::new();
    regression.fit(&x, &y).unwrap();
    let mut classifier = LinearClassifier::new();
    classifier.fit(&x, &y).unwrap();

    let scores = regression.predict(&x).unwrap();
    let labels = classifier.predict(&x).unwrap();
    for (score, label) in scores.iter().zip(labels.iter()) {
        assert_eq!(score.signum(), *label);
    }
}

#[test]
fn test_unfitted_models_fail() {
    let x = array![[1.0, 0.0, 0.0]];

    assert_eq!(
        LinearRegression::new().predict(&x),
        Err(LinearModelError::NotFitted("LinearRegression"))
    );
    assert_eq!(
        LinearClassifier::new().predict(&x),
        Err(LinearModelError::NotFitted("LinearClassifier"))
    );
}
