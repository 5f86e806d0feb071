use lsq_classifier::preprocessing::add_bias_column;
use lsq_classifier::LinearClassifier;
use ndarray::{Array, Axis, concatenate, s};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lsq_classifier=info".into()),
        )
        .init();

    println!("=== Least Squares Linear Classifier Example ===\n");

    let n_per_class = 40;
    let mut rng = StdRng::seed_from_u64(2024);
    let positive = Array::random_using((n_per_class, 2), Uniform::new(0.5, 3.5), &mut rng);
    let negative = Array::random_using((n_per_class, 2), Uniform::new(-3.5, -0.5), &mut rng);

    let features = concatenate![Axis(0), positive, negative];
    let mut labels = Array::ones(2 * n_per_class);
    labels.slice_mut(s![n_per_class..]).fill(-1.0);

    // Layout [1, x₁, x₂] so the boundary helper can read w₀, w₁, w₂.
    let x = add_bias_column(&features);

    let mut model = LinearClassifier::new();
    model.fit(&x, &labels)?;

    println!("Weights: {:.4}", model.weights()?);
    println!("Training accuracy: {:.2}%", model.score(&x, &labels)? * 100.0);

    println!("\nDecision boundary (x₁ → x₂):");
    let abscissas = Array::linspace(-4.0, 4.0, 9);
    let ordinates = model.decision_boundary(&abscissas, 0.0)?;
    for (a, o) in abscissas.iter().zip(ordinates.iter()) {
        println!("  {:>5.1} → {:>7.3}", a, o);
    }

    // Parallel lines where the score is ±1, the regression targets.
    let upper = model.decision_boundary_ordinate(0.0, 1.0)?;
    let lower = model.decision_boundary_ordinate(0.0, -1.0)?;
    println!("\nScore = +1 line crosses x₁ = 0 at x₂ = {:.3}", upper);
    println!("Score = -1 line crosses x₁ = 0 at x₂ = {:.3}", lower);

    let new_points = add_bias_column(&ndarray::array![[1.5, 2.5], [-3.0, -0.5], [0.0, 0.0]]);
    println!("\nPredictions on new data: {}", model.predict(&new_points)?);

    Ok(())
}
