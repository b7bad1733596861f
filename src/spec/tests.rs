//! Tests for specification loading

#[cfg(test)]
mod tests {
    use crate::spec::{SpecError, load_spec, parse_spec};

    #[test]
    fn test_parse_full_specification() {
        let yaml = r#"
workflow:
  type: serial
  specification:
    steps:
      - name: gendata
        environment: python:3.11
        kubernetes_queue: fast
      - name: fitdata
        environment: python:3.11
"#;

        let spec = parse_spec(yaml).unwrap();
        let steps = &spec.workflow.specification.steps;

        // Step order and queue annotations survive parsing; unknown keys
        // (type, environment) are ignored
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "gendata");
        assert_eq!(steps[0].kubernetes_queue.as_deref(), Some("fast"));
        assert_eq!(steps[1].name, "fitdata");
        assert_eq!(steps[1].kubernetes_queue, None);
    }

    #[test]
    fn test_parse_rejects_missing_steps() {
        let yaml = r#"
workflow:
  specification: {}
"#;

        let err = parse_spec(yaml).unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = parse_spec("workflow: [unclosed").unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_spec("does/not/exist.yaml").unwrap_err();
        match err {
            SpecError::Io { path, .. } => assert_eq!(path, "does/not/exist.yaml"),
            _ => panic!("Expected SpecError::Io"),
        }
    }
}
