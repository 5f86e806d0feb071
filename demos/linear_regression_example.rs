use lsq_classifier::preprocessing::add_bias_column;
use lsq_classifier::LinearRegression;
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lsq_classifier=info".into()),
        )
        .init();

    println!("=== Least Squares Regression Example ===\n");

    // y = 2x + 3 with small noise
    let x_raw = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![5.1, 6.9, 9.2, 11.1, 12.8];

    // The model fits no intercept on its own.
    let x = add_bias_column(&x_raw);

    let mut model = LinearRegression::new();
    model.fit(&x, &y)?;

    let w = model.coefficients()?;
    let predictions = model.predict(&x)?;
    let mse = lsq_classifier::metrics::mean_squared_error(&y, &predictions)?;

    println!("Bias: {:.4}", w[0]);
    println!("Slope: {:.4}", w[1]);
    println!("R² score: {:.4}", model.score(&x, &y)?);
    println!("MSE: {:.4}", mse);

    println!("\nPredictions vs Actual:");
    for (i, (pred, actual)) in predictions.iter().zip(y.iter()).enumerate() {
        println!(
            "Sample {}: Predicted={:.2}, Actual={:.2}, Error={:.2}",
            i + 1,
            pred,
            actual,
            (pred - actual).abs()
        );
    }

    // Two identical feature columns: the Gram matrix is singular and the
    // minimum-norm solution splits the slope between them.
    let duplicated = array![[1.0, 1.0, 1.0], [1.0, 2.0, 2.0], [1.0, 3.0, 3.0]];
    let mut model = LinearRegression::new();
    model.fit(&duplicated, &array![2.0, 4.0, 6.0])?;
    println!("\nWeights with duplicated column: {:.4}", model.coefficients()?);

    Ok(())
}
