//! Serde-backed formatters.

use crate::tabmark::document::Document;

use super::registry::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Typed document as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Typed document as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::parse;

    #[test]
    fn test_json_shape() {
        let doc = parse("Some *text*\n");
        let json: serde_json::Value = serde_json::from_str(&JsonFormatter.serialize(&doc).unwrap()).unwrap();
        assert_eq!(json["children"][0]["type"], "paragraph");
        assert_eq!(json["children"][0]["fragments"][1]["type"], "text/emphasis/1");
        assert_eq!(json["children"][0]["fragments"][1]["data"], "text");
    }

    #[test]
    fn test_yaml_lists_tagged_elements() {
        let doc = parse("- a\n");
        let yaml = YamlFormatter.serialize(&doc).unwrap();
        assert!(yaml.contains("type: set"));
        assert!(yaml.contains("data: a"));
    }
}
