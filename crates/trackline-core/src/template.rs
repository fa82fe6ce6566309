//! Parameterized event text: per-event placeholder values, optional action
//! buttons, and the `{name}` substitution routine that produces the final
//! displayed string.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// TemplateValue / TemplateValues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateValue {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Ordered placeholder-name → value mapping. Order follows the payload so
/// substitution walks keys the way the server listed them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateValues(pub IndexMap<String, TemplateValue>);

impl TemplateValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TemplateAction
// ---------------------------------------------------------------------------

/// A named UI action attached to a rendered message (e.g. "view invoice").
/// Display-only from this crate's perspective; hosts wire the behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateAction {
    pub on: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub target: String,
}

/// The upstream payload emits a bare object when exactly one action exists
/// and an array otherwise. Both normalize to a `Vec`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<TemplateAction>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(TemplateAction),
        Many(Vec<TemplateAction>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(action) => vec![action],
        OneOrMany::Many(actions) => actions,
    })
}

// ---------------------------------------------------------------------------
// TemplateConfiguration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateConfiguration {
    #[serde(default)]
    pub values: TemplateValues,
    #[serde(default, deserialize_with = "one_or_many")]
    pub actions: Vec<TemplateAction>,
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace every occurrence of `{name}` for each known placeholder with its
/// value. Pure and total:
/// - unknown placeholders are left verbatim;
/// - empty values are not substituted (the placeholder remains);
/// - malformed placeholder syntax simply never matches.
pub fn substitute(template: &str, values: &TemplateValues) -> String {
    if template.is_empty() || values.is_empty() {
        return template.to_string();
    }

    let mut out = template.to_string();
    for (key, value) in &values.0 {
        if value.value.is_empty() {
            continue;
        }
        let placeholder = format!("{{{key}}}");
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, &value.value);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> TemplateValues {
        TemplateValues(
            pairs
                .iter()
                .map(|(k, v)| {
                    (
                        k.to_string(),
                        TemplateValue {
                            kind: "string".to_string(),
                            value: v.to_string(),
                        },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn replaces_known_placeholders() {
        let result = substitute(
            "Order {status} for {name}",
            &values(&[("status", "shipped"), ("name", "Rahim")]),
        );
        assert_eq!(result, "Order shipped for Rahim");
    }

    #[test]
    fn empty_value_leaves_placeholder() {
        let result = substitute(
            "Order {status} for {name}",
            &values(&[("status", "shipped"), ("name", "")]),
        );
        assert_eq!(result, "Order shipped for {name}");
    }

    #[test]
    fn unknown_placeholder_untouched() {
        let result = substitute("Hi {who}", &values(&[("status", "ok")]));
        assert_eq!(result, "Hi {who}");
    }

    #[test]
    fn replaces_every_occurrence() {
        let result = substitute("{x} and {x} and {x}", &values(&[("x", "y")]));
        assert_eq!(result, "y and y and y");
    }

    #[test]
    fn malformed_syntax_never_matches() {
        let result = substitute("{status", &values(&[("status", "shipped")]));
        assert_eq!(result, "{status");
        let result = substitute("{{status}}", &values(&[("status", "shipped")]));
        // Inner {status} still matches; the stray braces survive.
        assert_eq!(result, "{shipped}");
    }

    #[test]
    fn idempotent_without_braces_in_values() {
        let vals = values(&[("a", "alpha"), ("b", "beta")]);
        let once = substitute("{a}-{b}-{c}", &vals);
        let twice = substitute(&once, &vals);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_inputs_pass_through() {
        assert_eq!(substitute("", &values(&[("a", "b")])), "");
        assert_eq!(substitute("plain", &TemplateValues::default()), "plain");
    }

    #[test]
    fn values_preserve_payload_order() {
        let json = r#"{"zeta": {"type": "string", "value": "z"},
                       "alpha": {"type": "string", "value": "a"}}"#;
        let vals: TemplateValues = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = vals.0.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn actions_accept_single_object() {
        let json = r#"{"values": {},
                       "actions": {"on": "click", "name": "open",
                                   "label": null, "target": "/orders/1"}}"#;
        let config: TemplateConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.actions.len(), 1);
        assert_eq!(config.actions[0].name, "open");
    }

    #[test]
    fn actions_accept_array() {
        let json = r#"{"values": {},
                       "actions": [
                           {"on": "click", "name": "open", "target": "/a"},
                           {"on": "click", "name": "dismiss", "target": "/b"}
                       ]}"#;
        let config: TemplateConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.actions.len(), 2);
        assert_eq!(config.actions[1].name, "dismiss");
    }
}
