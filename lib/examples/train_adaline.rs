use adaline_rs::{metrics::accuracy, AdalineConfig, AdalineGD};

fn main() -> adaline_rs::Result<()> {
    let x = vec![
        vec![1.0, 1.0],
        vec![2.0, 1.0],
        vec![1.0, 2.0],
        vec![4.0, 5.0],
        vec![5.0, 4.0],
        vec![4.0, 4.0],
    ];
    let y = vec![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

    for eta in [0.01, 0.0001] {
        let mut clf = AdalineGD::new(AdalineConfig::new(eta, 50));
        clf.fit(&x, &y)?;

        let costs = clf.cost_history().map(|h| h.as_slice()).unwrap_or_default();
        println!("eta = {eta}");
        println!("  weights: {:?}", clf.weights().unwrap_or_default());
        println!(
            "  cost: {:.4} -> {:.4}",
            costs.first().copied().unwrap_or(f64::NAN),
            costs.last().copied().unwrap_or(f64::NAN)
        );
        println!("  training accuracy: {:.2}", accuracy(&y, &clf.predict(&x)?)?);
    }

    Ok(())
}
