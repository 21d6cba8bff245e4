//! Rule registration metadata exposed to hosts.

use crate::lint::Severity;

/// Rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Correctness,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Correctness => write!(f, "correctness"),
        }
    }
}

/// Registration descriptor for one rule: what hosts list, and what the
/// rendered diagnostic is attributed to.
#[derive(Debug, Clone, Copy)]
pub struct Issue {
    pub id: &'static str,
    pub brief: &'static str,
    pub explanation: &'static str,
    pub category: Category,
    /// Relative importance, 1..=10.
    pub priority: u8,
    pub severity: Severity,
}

pub const VALID_CONTROLLER: Issue = Issue {
    id: "ValidController",
    brief: "Controller not instantiatable",
    explanation: "Non-abstract Controller instances must have a default or single-argument \
                  constructor that takes a Bundle in order for the system to re-create them in \
                  the case of the process being killed.",
    category: Category::Correctness,
    priority: 6,
    severity: Severity::Fatal,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_controller_registration() {
        assert_eq!(VALID_CONTROLLER.id, "ValidController");
        assert_eq!(VALID_CONTROLLER.category, Category::Correctness);
        assert_eq!(VALID_CONTROLLER.severity, Severity::Fatal);
        assert!((1..=10).contains(&VALID_CONTROLLER.priority));
    }
}
