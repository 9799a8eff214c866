use serde::{Deserialize, Serialize};

/// One formal parameter of a callable
///
/// `None` in `default` means the parameter has no default at all, which
/// keeps "no default" distinguishable from a default that renders as
/// "None".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as declared
    pub name: String,
    /// Declared type annotation, if any
    pub annotation: Option<String>,
    /// Textual form of the default value, if the parameter has one
    pub default: Option<String>,
}

/// A callable with its resolved display name and ordered parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callable {
    /// Display name: the declared name, or a textual fallback
    /// representation when the source exposes none
    pub name: String,
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
}

impl Callable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_serde_roundtrip() {
        let param = Parameter {
            name: "timeout".to_string(),
            annotation: Some("float".to_string()),
            default: Some("30.0".to_string()),
        };

        let json = serde_json::to_string(&param).unwrap();
        let parsed: Parameter = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, param);
    }

    #[test]
    fn test_parameter_missing_fields_deserialize_as_none() {
        let parsed: Parameter = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(parsed.name, "x");
        assert_eq!(parsed.annotation, None);
        assert_eq!(parsed.default, None);
    }

    #[test]
    fn test_callable_new_has_no_parameters() {
        let callable = Callable::new("f");
        assert_eq!(callable.name, "f");
        assert!(callable.parameters.is_empty());
    }
}
