use crate::{SpecDocument, Step, ValidationError, config::KueueConfig};
use tracing::{debug, warn};

pub struct Validator {
    kueue_enabled: bool,
    supported_queues: Vec<String>,
}

impl Validator {
    pub fn new(kueue: KueueConfig) -> Self {
        Self {
            kueue_enabled: kueue.enabled,
            supported_queues: kueue.supported_queues,
        }
    }

    /// Validate a workflow specification document
    /// Returns Ok(()) if every step is valid, Err(ValidationError) for the
    /// first invalid step in declaration order
    pub fn validate(&self, spec: &SpecDocument) -> Result<(), ValidationError> {
        let steps = &spec.workflow.specification.steps;
        debug!("Validating specification with {} steps", steps.len());

        for step in steps {
            self.check_queue(step)?;
        }

        debug!("Specification validation successful");
        Ok(())
    }

    /// Check a single step's Kubernetes queue annotation
    fn check_queue(&self, step: &Step) -> Result<(), ValidationError> {
        // Absent or empty queue field means the step places no constraint
        let queue = match step.requested_queue() {
            Some(queue) => queue,
            None => return Ok(()),
        };

        // A queue annotation is only allowed when Kueue is active
        if !self.kueue_enabled {
            warn!(
                "Step {:?} requests queue {:?} but Kueue is disabled",
                step.name, queue
            );
            return Err(ValidationError::KueueNotEnabled {
                queue: queue.to_string(),
                step_name: step.name.clone(),
            });
        }

        // The queue must be one the cluster recognizes
        if !self.supported_queues.iter().any(|q| q == queue) {
            warn!(
                "Step {:?} requests unknown queue {:?}, supported: {:?}",
                step.name, queue, self.supported_queues
            );
            return Err(ValidationError::QueueNotSupported {
                queue: queue.to_string(),
                step_name: step.name.clone(),
                supported: self.supported_queues.clone(),
            });
        }

        Ok(())
    }
}
