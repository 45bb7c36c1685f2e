//! Boundary configuration fixtures.
//!
//! Each fixture is plain JSON so the tests exercise the same parsing path
//! as a configuration file.

use serde_json::{json, Value};

/// A named configuration for a bounded axis.
pub struct BoundedCase {
    pub name: &'static str,
    pub config: Value,
}

/// One configuration per accepted shape and rule for a bounded axis.
///
/// Covers bare ids, typed maps, keyed maps, `{low, high}` maps, two-element
/// sequences, and the auto-periodic fallbacks.
pub fn bounded_cases() -> Vec<BoundedCase> {
    vec![
        BoundedCase {
            name: "bare dirichlet",
            config: json!("dirichlet"),
        },
        BoundedCase {
            name: "bare neumann",
            config: json!("neumann"),
        },
        BoundedCase {
            name: "extrapolate",
            config: json!("extrapolate"),
        },
        BoundedCase {
            name: "typed value",
            config: json!({"type": "value", "value": 1.5}),
        },
        BoundedCase {
            name: "keyed derivative",
            config: json!({"derivative": -0.25}),
        },
        BoundedCase {
            name: "typed mixed",
            config: json!({"type": "mixed", "value": 2.0, "const": 0.5}),
        },
        BoundedCase {
            name: "keyed robin",
            config: json!({"robin": 1.0, "const": -1.0}),
        },
        BoundedCase {
            name: "keyed curvature",
            config: json!({"curvature": 0.75}),
        },
        BoundedCase {
            name: "low/high map",
            config: json!({"low": {"value": 2.0}, "high": "extrapolate"}),
        },
        BoundedCase {
            name: "two-element sequence",
            config: json!([{"derivative": 1.0}, {"curvature": -2.0}]),
        },
        BoundedCase {
            name: "auto periodic neumann",
            config: json!("auto_periodic_neumann"),
        },
        BoundedCase {
            name: "auto periodic dirichlet",
            config: json!("auto_periodic_dirichlet"),
        },
    ]
}

/// Configurations valid only on a periodic axis.
pub fn periodic_cases() -> Vec<Value> {
    vec![
        json!("periodic"),
        json!("anti-periodic"),
        json!({"type": "periodic"}),
        json!({"type": "anti-periodic"}),
        json!("auto_periodic_neumann"),
    ]
}

/// Configurations that every parser must reject.
pub fn invalid_cases() -> Vec<Value> {
    vec![
        json!("no_such_rule"),
        json!({"type": "unknown", "value": 1.0}),
        json!({"low": "dirichlet"}),
        json!(["dirichlet", "neumann", "dirichlet"]),
        json!({"value": "one"}),
        json!({"value": 1.0, "derivative": 2.0}),
        json!(["periodic", "dirichlet"]),
        json!(42),
        json!(null),
    ]
}
