//! Offline-progress simulation: production formula over elapsed `time`
//! seconds. Demonstrates the caller-side clamp-to-zero policy — negative
//! production is a caller decision, not part of the evaluator contract.

use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let formula = "rate * time + bonus * floor(time / 60) - 0.5 * time ** 1.2";
    let rate = 2.5;
    let bonus = 40.0;

    println!("formula: {formula}  (rate = {rate}, bonus = {bonus})");
    for minutes in [1, 5, 15, 60, 240, 480] {
        let time = (minutes * 60) as f64;
        let vars = HashMap::from([
            ("rate".to_string(), rate),
            ("bonus".to_string(), bonus),
            ("time".to_string(), time),
        ]);
        match formulite::evaluate(formula, &vars) {
            // Callers floor production at zero before showing it.
            Ok(value) => println!("{minutes:>4} min offline: {:>12.1}", value.max(0.0)),
            Err(err) => {
                println!("{minutes:>4} min offline: {err}");
                break;
            }
        }
    }
}
