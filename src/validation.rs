//! Output mapping validation.
//!
//! Checks that a strategy produced a total, single assignment: every task
//! id in `0..ntasks` appears in exactly one PE's set. Detects:
//! - Tasks assigned more than once
//! - Tasks never assigned
//! - Assigned ids outside `0..ntasks`

use crate::models::{MigrationElement, TaskId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending task id.
    pub task: TaskId,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task appears in more than one slot.
    DuplicateTask,
    /// A task in `0..ntasks` appears nowhere.
    UnassignedTask,
    /// An assigned id is not a known task.
    TaskOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task: TaskId, message: impl Into<String>) -> Self {
        Self {
            kind,
            task,
            message: message.into(),
        }
    }
}

/// Validates that `mapping` assigns each of `ntasks` tasks exactly once.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Example
/// ```
/// use u_balance::models::MigrationElement;
/// use u_balance::validation::{validate_mapping, ValidationErrorKind};
///
/// let mut mapping = MigrationElement::new(2);
/// mapping.set(0, 0);
/// mapping.set(1, 0);
///
/// let errors = validate_mapping(&mapping, 2).unwrap_err();
/// assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateTask);
/// assert_eq!(errors[1].kind, ValidationErrorKind::UnassignedTask);
/// ```
pub fn validate_mapping(mapping: &MigrationElement, ntasks: usize) -> ValidationResult {
    let mut errors = Vec::new();
    let mut owner = vec![None; ntasks];

    for (pe, tasks) in mapping.iter() {
        for &task in tasks {
            match owner.get_mut(task) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::TaskOutOfRange,
                    task,
                    format!("PE {pe} holds task {task}, but only {ntasks} tasks exist"),
                )),
                Some(Some(first)) => errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateTask,
                    task,
                    format!("Task {task} assigned to PE {first} and PE {pe}"),
                )),
                Some(slot) => *slot = Some(pe),
            }
        }
    }

    for (task, slot) in owner.iter().enumerate() {
        if slot.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnassignedTask,
                task,
                format!("Task {task} is not assigned to any PE"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(sets: &[&[TaskId]]) -> MigrationElement {
        let mut m = MigrationElement::new(sets.len());
        for (pe, tasks) in sets.iter().enumerate() {
            for &task in *tasks {
                m.set(pe, task);
            }
        }
        m
    }

    #[test]
    fn test_valid_mapping() {
        let m = mapping(&[&[0], &[2, 1]]);
        assert!(validate_mapping(&m, 3).is_ok());
    }

    #[test]
    fn test_empty_mapping_zero_tasks() {
        let m = MigrationElement::new(4);
        assert!(validate_mapping(&m, 0).is_ok());
    }

    #[test]
    fn test_duplicate_task() {
        let m = mapping(&[&[0, 1], &[1]]);
        let errors = validate_mapping(&m, 2).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateTask);
        assert_eq!(errors[0].task, 1);
    }

    #[test]
    fn test_unassigned_task() {
        let m = mapping(&[&[0], &[]]);
        let errors = validate_mapping(&m, 3).unwrap_err();
        let missing: Vec<TaskId> = errors.iter().map(|e| e.task).collect();
        assert_eq!(missing, vec![1, 2]);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::UnassignedTask));
    }

    #[test]
    fn test_task_out_of_range() {
        let m = mapping(&[&[0, 7]]);
        let errors = validate_mapping(&m, 1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TaskOutOfRange);
        assert!(errors[0].message.contains("7"));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let m = mapping(&[&[0, 0], &[9]]);
        let errors = validate_mapping(&m, 2).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
