use serde::{Deserialize, Serialize};

/// Workflow specification document submitted for validation
///
/// Top-level shape: `{ workflow: { specification: { steps: [...] } } }`.
/// Unknown keys elsewhere in the document are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecDocument {
    pub workflow: Workflow,
}

/// Workflow section of a specification document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub specification: Specification,
}

/// Workflow specification body holding the ordered step list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specification {
    pub steps: Vec<Step>,
}

/// One unit of work in a workflow specification
///
/// A step may request a Kubernetes queue by name. An absent or empty
/// queue field means the step places no queueing constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_queue: Option<String>,
}

impl Step {
    /// Queue requested by this step, if any
    ///
    /// Returns `None` for both an absent and an empty queue field.
    pub fn requested_queue(&self) -> Option<&str> {
        match self.kubernetes_queue.as_deref() {
            Some(queue) if !queue.is_empty() => Some(queue),
            _ => None,
        }
    }
}

/// Validation errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ValidationError {
    KueueNotEnabled {
        queue: String,
        step_name: String,
    },
    QueueNotSupported {
        queue: String,
        step_name: String,
        supported: Vec<String>,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::KueueNotEnabled { queue, step_name } => {
                write!(
                    f,
                    "Kubernetes queue \"{}\" found in step \"{}\" but Kueue is not enabled.",
                    queue, step_name
                )
            }
            ValidationError::QueueNotSupported {
                queue,
                step_name,
                supported,
            } => {
                write!(
                    f,
                    "Kubernetes queue \"{}\" in step \"{}\" is not in list of supported queues: {}",
                    queue,
                    step_name,
                    supported.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Verdict sent to callers after a specification is validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub status: VerdictStatus,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerdictStatus {
    Accepted,
    Rejected { reason: String },
}
