//! Tests for specification validation
//!
//! Verifies queue checking behavior for every combination of feature flag,
//! supported queue list, and per-step queue annotations.

#[cfg(test)]
mod tests {
    use crate::{
        SpecDocument, Specification, Step, ValidationError, Workflow, config::KueueConfig,
        validation::Validator,
    };

    /// Helper function to create a step with an optional queue annotation
    fn create_step(name: &str, queue: Option<&str>) -> Step {
        Step {
            name: name.to_string(),
            kubernetes_queue: queue.map(String::from),
        }
    }

    /// Helper function to wrap steps into a full specification document
    fn create_spec(steps: Vec<Step>) -> SpecDocument {
        SpecDocument {
            workflow: Workflow {
                specification: Specification { steps },
            },
        }
    }

    /// Helper function to build a validator from flag and queue list
    fn create_validator(enabled: bool, supported: &[&str]) -> Validator {
        Validator::new(KueueConfig {
            enabled,
            supported_queues: supported.iter().map(|q| q.to_string()).collect(),
        })
    }

    #[test]
    fn test_no_queues_always_valid() {
        let spec = create_spec(vec![
            create_step("gendata", None),
            create_step("fitdata", None),
        ]);

        // No step requests a queue, so flag and supported list are irrelevant
        assert!(create_validator(false, &[]).validate(&spec).is_ok());
        assert!(create_validator(true, &[]).validate(&spec).is_ok());
        assert!(create_validator(true, &["fast"]).validate(&spec).is_ok());
    }

    #[test]
    fn test_queue_rejected_when_kueue_disabled() {
        let validator = create_validator(false, &["fast"]);
        let spec = create_spec(vec![create_step("a", Some("fast"))]);

        let err = validator.validate(&spec).unwrap_err();
        match &err {
            ValidationError::KueueNotEnabled { queue, step_name } => {
                assert_eq!(queue, "fast");
                assert_eq!(step_name, "a");
            }
            _ => panic!("Expected KueueNotEnabled, got {:?}", err),
        }
        assert_eq!(
            err.to_string(),
            "Kubernetes queue \"fast\" found in step \"a\" but Kueue is not enabled."
        );
    }

    #[test]
    fn test_unknown_queue_rejected_when_kueue_enabled() {
        let validator = create_validator(true, &["fast"]);
        let spec = create_spec(vec![create_step("b", Some("slow"))]);

        let err = validator.validate(&spec).unwrap_err();
        match &err {
            ValidationError::QueueNotSupported {
                queue,
                step_name,
                supported,
            } => {
                assert_eq!(queue, "slow");
                assert_eq!(step_name, "b");
                assert_eq!(supported, &vec!["fast".to_string()]);
            }
            _ => panic!("Expected QueueNotSupported, got {:?}", err),
        }
        assert_eq!(
            err.to_string(),
            "Kubernetes queue \"slow\" in step \"b\" is not in list of supported queues: fast"
        );
    }

    #[test]
    fn test_supported_queue_accepted() {
        let validator = create_validator(true, &["fast", "slow"]);
        let spec = create_spec(vec![
            create_step("a", Some("fast")),
            create_step("b", Some("slow")),
        ]);

        assert!(validator.validate(&spec).is_ok());
    }

    #[test]
    fn test_first_invalid_step_reported() {
        // Both steps request unknown queues; the failure must name the
        // first one in declaration order
        let validator = create_validator(true, &["fast"]);
        let spec = create_spec(vec![
            create_step("first", Some("gpu")),
            create_step("second", Some("slow")),
        ]);

        let err = validator.validate(&spec).unwrap_err();
        match err {
            ValidationError::QueueNotSupported {
                queue, step_name, ..
            } => {
                assert_eq!(queue, "gpu");
                assert_eq!(step_name, "first");
            }
            _ => panic!("Expected QueueNotSupported"),
        }
    }

    #[test]
    fn test_valid_steps_before_invalid_one_are_skipped() {
        let validator = create_validator(true, &["fast"]);
        let spec = create_spec(vec![
            create_step("a", None),
            create_step("b", Some("fast")),
            create_step("c", Some("slow")),
        ]);

        let err = validator.validate(&spec).unwrap_err();
        match err {
            ValidationError::QueueNotSupported { step_name, .. } => {
                assert_eq!(step_name, "c");
            }
            _ => panic!("Expected QueueNotSupported"),
        }
    }

    #[test]
    fn test_empty_queue_treated_as_absent() {
        // An empty string is the same as no queue annotation at all,
        // even when Kueue is disabled
        let validator = create_validator(false, &[]);
        let spec = create_spec(vec![create_step("a", Some(""))]);

        assert!(validator.validate(&spec).is_ok());
    }

    #[test]
    fn test_supported_list_rendered_in_configured_order() {
        let validator = create_validator(true, &["fast", "slow", "batch"]);
        let spec = create_spec(vec![create_step("train", Some("gpu"))]);

        let err = validator.validate(&spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Kubernetes queue \"gpu\" in step \"train\" is not in list of supported queues: fast, slow, batch"
        );
    }

    #[test]
    fn test_step_without_queue_passes_with_empty_supported_list() {
        let validator = create_validator(false, &[]);
        let spec = create_spec(vec![create_step("c", None)]);

        assert!(validator.validate(&spec).is_ok());
    }

    #[test]
    fn test_empty_step_list() {
        let validator = create_validator(false, &[]);
        let spec = create_spec(vec![]);

        assert!(validator.validate(&spec).is_ok());
    }
}
