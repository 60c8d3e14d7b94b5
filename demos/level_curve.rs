//! Level-curve sweep: the call-site shape of the curve visualizer. One
//! formula string, evaluated once per level with fresh bindings.

use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let formula = "base * 1.1 ** level";
    let base = 10.0;

    println!("formula: {formula}  (base = {base})");
    for level in 0..=20 {
        let vars = HashMap::from([
            ("base".to_string(), base),
            ("level".to_string(), level as f64),
        ]);
        match formulite::evaluate(formula, &vars) {
            Ok(value) => println!("level {level:>2}: {value:>12.2}"),
            Err(err) => {
                println!("level {level:>2}: {err}");
                break;
            }
        }
    }
}
