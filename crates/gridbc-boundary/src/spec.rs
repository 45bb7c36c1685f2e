//! Boundary configuration shapes.
//!
//! [`BoundarySpec`] is the closed set of configuration forms accepted for
//! one axis. Parsing validates up front and rejects every other shape with
//! a message naming the offending keys, length or type identifier.
//!
//! | Form | Meaning |
//! |------|---------|
//! | `"periodic"`, `{"type": "periodic"}` | wraparound axis |
//! | `"anti-periodic"`, `{"type": "anti-periodic"}` | sign-flipping wraparound |
//! | `"auto_periodic_neumann"`, `"auto_periodic_dirichlet"` | periodic if the axis is, else zero derivative / zero value |
//! | `"value"`, `{"value": 2}`, `{"type": "value", "value": 2}` | one condition on both sides |
//! | `{"low": .., "high": ..}` | independent conditions |
//! | `[low, high]` | independent conditions, positional |

use crate::condition::ConditionRule;
use crate::value::BcValue;
use gridbc_core::BoundaryError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PERIODIC: &str = "periodic";
const ANTI_PERIODIC: &str = "anti-periodic";
const AUTO_NEUMANN: &str = "auto_periodic_neumann";
const AUTO_DIRICHLET: &str = "auto_periodic_dirichlet";

/// Condition used by `auto_periodic_*` specs on bounded axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoFallback {
    /// Zero derivative on both sides.
    Neumann,
    /// Zero value on both sides.
    Dirichlet,
}

/// A validated boundary configuration for one axis.
///
/// Converts to and from `serde_json::Value`, so it can be embedded in any
/// serde-deserialized configuration.
///
/// # Examples
///
/// ```
/// use gridbc_boundary::{BoundarySpec, ConditionRule};
/// use serde_json::json;
///
/// let spec = BoundarySpec::from_value(&json!([{"value": 1.0}, "extrapolate"])).unwrap();
/// assert_eq!(
///     spec,
///     BoundarySpec::Pair {
///         low: ConditionRule::Value(1.0.into()),
///         high: ConditionRule::Extrapolate,
///     }
/// );
/// assert_eq!(spec.to_value(), json!({"low": {"type": "value", "value": 1.0}, "high": "extrapolate"}));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum BoundarySpec {
    /// Wraparound axis; `flip_sign` makes it anti-periodic.
    Periodic {
        /// Negate values across the edge.
        flip_sign: bool,
    },
    /// Periodic on periodic axes, otherwise the fallback on both sides.
    AutoPeriodic(AutoFallback),
    /// The same condition on both sides.
    Both(ConditionRule),
    /// Independent lower and upper conditions.
    Pair {
        /// Lower-side condition.
        low: ConditionRule,
        /// Upper-side condition.
        high: ConditionRule,
    },
}

impl BoundarySpec {
    /// Every accepted type identifier, axis-level forms first.
    pub fn supported_types() -> Vec<&'static str> {
        let mut ids = vec![PERIODIC, ANTI_PERIODIC, AUTO_NEUMANN, AUTO_DIRICHLET];
        ids.extend_from_slice(ConditionRule::SUPPORTED);
        ids
    }

    /// Parse one of the recognized configuration shapes.
    pub fn from_value(value: &Value) -> Result<Self, BoundaryError> {
        match value {
            Value::String(s) => match axis_level(s) {
                Some(spec) => Ok(spec),
                None => Ok(Self::Both(rule_from_name(s)?)),
            },
            Value::Array(items) => match items.as_slice() {
                [low, high] => Ok(Self::Pair {
                    low: parse_condition(low, "low")?,
                    high: parse_condition(high, "high")?,
                }),
                _ => Err(BoundaryError::invalid(format!(
                    "boundary sequence must have 2 entries [low, high], got {}",
                    items.len()
                ))),
            },
            Value::Object(map) if map.contains_key("low") || map.contains_key("high") => {
                parse_low_high(map)
            }
            Value::Object(map) => {
                if let Some(Value::String(kind)) = map.get("type") {
                    if let Some(spec) = axis_level(kind) {
                        reject_unused(map, &["type"], kind)?;
                        return Ok(spec);
                    }
                }
                Ok(Self::Both(parse_condition(value, "boundary")?))
            }
            other => Err(BoundaryError::invalid(format!(
                "boundary specification must be a string, mapping or 2-element sequence, got {other}"
            ))),
        }
    }

    /// Canonical JSON form.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Periodic { flip_sign: false } => Value::from(PERIODIC),
            Self::Periodic { flip_sign: true } => Value::from(ANTI_PERIODIC),
            Self::AutoPeriodic(AutoFallback::Neumann) => Value::from(AUTO_NEUMANN),
            Self::AutoPeriodic(AutoFallback::Dirichlet) => Value::from(AUTO_DIRICHLET),
            Self::Both(rule) => condition_to_value(rule),
            Self::Pair { low, high } => {
                let mut map = Map::new();
                map.insert("low".into(), condition_to_value(low));
                map.insert("high".into(), condition_to_value(high));
                Value::Object(map)
            }
        }
    }
}

impl TryFrom<Value> for BoundarySpec {
    type Error = BoundaryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<BoundarySpec> for Value {
    fn from(spec: BoundarySpec) -> Self {
        spec.to_value()
    }
}

fn axis_level(kind: &str) -> Option<BoundarySpec> {
    match kind {
        PERIODIC => Some(BoundarySpec::Periodic { flip_sign: false }),
        ANTI_PERIODIC => Some(BoundarySpec::Periodic { flip_sign: true }),
        AUTO_NEUMANN => Some(BoundarySpec::AutoPeriodic(AutoFallback::Neumann)),
        AUTO_DIRICHLET => Some(BoundarySpec::AutoPeriodic(AutoFallback::Dirichlet)),
        _ => None,
    }
}

fn rule_from_name(name: &str) -> Result<ConditionRule, BoundaryError> {
    ConditionRule::from_name(name, None, None).map_err(|_| unsupported(name))
}

fn unsupported(name: &str) -> BoundaryError {
    BoundaryError::invalid(format!(
        "unsupported boundary condition type '{name}'; supported: {}",
        BoundarySpec::supported_types().join(", ")
    ))
}

fn reject_unused(map: &Map<String, Value>, allowed: &[&str], what: &str) -> Result<(), BoundaryError> {
    let unused: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|k| !allowed.contains(k))
        .collect();
    if unused.is_empty() {
        Ok(())
    } else {
        Err(BoundaryError::invalid(format!(
            "unused keys for '{what}' boundary: {}",
            unused.join(", ")
        )))
    }
}

fn parse_low_high(map: &Map<String, Value>) -> Result<BoundarySpec, BoundaryError> {
    reject_unused(map, &["low", "high"], "low/high")?;
    match (map.get("low"), map.get("high")) {
        (Some(low), Some(high)) => Ok(BoundarySpec::Pair {
            low: parse_condition(low, "low")?,
            high: parse_condition(high, "high")?,
        }),
        (None, _) => Err(BoundaryError::invalid("low/high boundary is missing key 'low'")),
        (_, None) => Err(BoundaryError::invalid("low/high boundary is missing key 'high'")),
    }
}

fn parse_param(map: &Map<String, Value>, key: &str) -> Result<Option<BcValue>, BoundaryError> {
    map.get(key).map(BcValue::from_json).transpose()
}

/// Parse a single-sided condition. `side` only labels error messages.
fn parse_condition(value: &Value, side: &str) -> Result<ConditionRule, BoundaryError> {
    match value {
        Value::String(s) if axis_level(s).is_some() => Err(BoundaryError::invalid(format!(
            "'{s}' applies to a whole axis and cannot be used for the {side} condition"
        ))),
        Value::String(s) => rule_from_name(s),
        Value::Object(map) => match map.get("type") {
            Some(Value::String(kind)) => {
                let allowed: &[&str] = match kind.as_str() {
                    "extrapolate" => &["type"],
                    "mixed" | "robin" => &["type", "value", "const"],
                    _ => &["type", "value"],
                };
                let rule = rule_from_name(kind)?;
                reject_unused(map, allowed, kind)?;
                ConditionRule::from_name(
                    rule.name(),
                    parse_param(map, "value")?,
                    parse_param(map, "const")?,
                )
            }
            Some(other) => Err(BoundaryError::invalid(format!(
                "{side} condition 'type' must be a string, got {other}"
            ))),
            None => parse_keyed_condition(map, side),
        },
        other => Err(BoundaryError::invalid(format!(
            "{side} condition must be a string or mapping, got {other}"
        ))),
    }
}

/// The `{"<rule>": value}` form, with an optional `"const"` for mixed rules.
fn parse_keyed_condition(map: &Map<String, Value>, side: &str) -> Result<ConditionRule, BoundaryError> {
    let named: Vec<&String> = map
        .keys()
        .filter(|k| ConditionRule::SUPPORTED.contains(&k.as_str()))
        .collect();
    let kind = match named.as_slice() {
        [kind] => kind.as_str(),
        [] => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            return Err(BoundaryError::invalid(format!(
                "{side} condition names no supported type (keys: {}); supported: {}",
                keys.join(", "),
                BoundarySpec::supported_types().join(", ")
            )));
        }
        many => {
            let keys: Vec<&str> = many.iter().map(|k| k.as_str()).collect();
            return Err(BoundaryError::invalid(format!(
                "{side} condition names several types: {}",
                keys.join(", ")
            )));
        }
    };
    let mixed_keys = [kind, "const"];
    let plain_keys = [kind];
    let allowed: &[&str] = if matches!(kind, "mixed" | "robin") {
        &mixed_keys
    } else {
        &plain_keys
    };
    reject_unused(map, allowed, kind)?;
    let value = match &map[kind] {
        Value::Null if kind == "extrapolate" => None,
        v if kind == "extrapolate" => {
            return Err(BoundaryError::invalid(format!(
                "'extrapolate' takes no value, got {v}"
            )))
        }
        v => Some(BcValue::from_json(v)?),
    };
    ConditionRule::from_name(kind, value, parse_param(map, "const")?)
}

fn condition_to_value(rule: &ConditionRule) -> Value {
    let mut map = Map::new();
    map.insert("type".into(), Value::from(rule.name()));
    match rule {
        ConditionRule::Extrapolate => return Value::from(rule.name()),
        ConditionRule::Value(v) | ConditionRule::Derivative(v) | ConditionRule::Curvature(v) => {
            map.insert("value".into(), v.to_json());
        }
        ConditionRule::Mixed { value, constant } => {
            map.insert("value".into(), value.to_json());
            map.insert("const".into(), constant.to_json());
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn err_msg(value: Value) -> String {
        BoundarySpec::from_value(&value).unwrap_err().to_string()
    }

    // ── Recognized shapes ───────────────────────────────────────

    #[test]
    fn periodic_forms() {
        let expected = BoundarySpec::Periodic { flip_sign: false };
        assert_eq!(BoundarySpec::from_value(&json!("periodic")).unwrap(), expected);
        assert_eq!(
            BoundarySpec::from_value(&json!({"type": "periodic"})).unwrap(),
            expected
        );
        assert_eq!(
            BoundarySpec::from_value(&json!("anti-periodic")).unwrap(),
            BoundarySpec::Periodic { flip_sign: true }
        );
    }

    #[test]
    fn single_condition_forms() {
        let expected = BoundarySpec::Both(ConditionRule::Value(2.0.into()));
        assert_eq!(BoundarySpec::from_value(&json!({"value": 2.0})).unwrap(), expected);
        assert_eq!(
            BoundarySpec::from_value(&json!({"type": "dirichlet", "value": 2})).unwrap(),
            expected
        );
        assert_eq!(
            BoundarySpec::from_value(&json!("neumann")).unwrap(),
            BoundarySpec::Both(ConditionRule::Derivative(0.0.into()))
        );
        assert_eq!(
            BoundarySpec::from_value(&json!({"mixed": 1.0, "const": 3.0})).unwrap(),
            BoundarySpec::Both(ConditionRule::Mixed {
                value: 1.0.into(),
                constant: 3.0.into()
            })
        );
        assert_eq!(
            BoundarySpec::from_value(&json!({"extrapolate": null})).unwrap(),
            BoundarySpec::Both(ConditionRule::Extrapolate)
        );
    }

    #[test]
    fn low_high_mapping_and_sequence_agree() {
        let a = BoundarySpec::from_value(&json!({"low": "extrapolate", "high": {"derivative": 1}}))
            .unwrap();
        let b = BoundarySpec::from_value(&json!(["extrapolate", {"derivative": 1}])).unwrap();
        assert_eq!(a, b);
    }

    // ── Rejected shapes ─────────────────────────────────────────

    #[test]
    fn wrong_sequence_length_names_length() {
        let msg = err_msg(json!(["value", "value", "value"]));
        assert!(msg.contains("got 3"), "{msg}");
        let msg = err_msg(json!([]));
        assert!(msg.contains("got 0"), "{msg}");
    }

    #[test]
    fn unused_keys_are_named() {
        let msg = err_msg(json!({"low": "value", "high": "value", "middle": "value"}));
        assert!(msg.contains("middle"), "{msg}");
        let msg = err_msg(json!({"type": "value", "value": 1, "scale": 2}));
        assert!(msg.contains("scale"), "{msg}");
        let msg = err_msg(json!({"type": "periodic", "value": 1}));
        assert!(msg.contains("value"), "{msg}");
        let msg = err_msg(json!({"derivative": 1, "const": 2}));
        assert!(msg.contains("const"), "{msg}");
    }

    #[test]
    fn missing_side_named() {
        let msg = err_msg(json!({"low": "value"}));
        assert!(msg.contains("'high'"), "{msg}");
    }

    #[test]
    fn unsupported_type_lists_supported() {
        let msg = err_msg(json!("reflective"));
        assert!(msg.contains("'reflective'"), "{msg}");
        for id in BoundarySpec::supported_types() {
            assert!(msg.contains(id), "{msg} missing {id}");
        }
        let msg = err_msg(json!({"type": "sticky", "value": 0}));
        assert!(msg.contains("'sticky'"), "{msg}");
    }

    #[test]
    fn periodic_cannot_be_one_side() {
        let msg = err_msg(json!(["periodic", "value"]));
        assert!(msg.contains("whole axis"), "{msg}");
    }

    #[test]
    fn non_container_rejected() {
        assert!(BoundarySpec::from_value(&json!(3.0)).is_err());
        assert!(BoundarySpec::from_value(&json!(null)).is_err());
        assert!(BoundarySpec::from_value(&json!({"type": 3})).is_err());
    }

    #[test]
    fn keyed_form_with_two_types_rejected() {
        let msg = err_msg(json!({"value": 1, "derivative": 2}));
        assert!(msg.contains("several types"), "{msg}");
    }

    // ── Serialization ───────────────────────────────────────────

    #[test]
    fn canonical_values() {
        assert_eq!(
            BoundarySpec::Periodic { flip_sign: false }.to_value(),
            json!("periodic")
        );
        assert_eq!(
            BoundarySpec::Both(ConditionRule::Mixed {
                value: 1.0.into(),
                constant: 0.0.into()
            })
            .to_value(),
            json!({"type": "mixed", "value": 1.0, "const": 0.0})
        );
        assert_eq!(
            BoundarySpec::AutoPeriodic(AutoFallback::Dirichlet).to_value(),
            json!("auto_periodic_dirichlet")
        );
    }

    #[test]
    fn serde_round_trip_through_json_text() {
        let specs = [
            BoundarySpec::Periodic { flip_sign: true },
            BoundarySpec::AutoPeriodic(AutoFallback::Neumann),
            BoundarySpec::Both(ConditionRule::Curvature((-0.5).into())),
            BoundarySpec::Pair {
                low: ConditionRule::Extrapolate,
                high: ConditionRule::Value(4.0.into()),
            },
        ];
        for spec in specs {
            let text = serde_json::to_string(&spec).unwrap();
            let back: BoundarySpec = serde_json::from_str(&text).unwrap();
            assert_eq!(back, spec, "round trip through {text}");
        }
    }

    #[test]
    fn serde_error_carries_diagnostic() {
        let err = serde_json::from_str::<BoundarySpec>(r#"["value"]"#).unwrap_err();
        assert!(err.to_string().contains("got 1"), "{err}");
    }
}
