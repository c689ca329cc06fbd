// ============================================================
// Layer 3 — Decision Presenter
// ============================================================
// Maps the classifier's binary label to one of exactly two
// fixed user-facing messages. There is no third outcome: every
// successful submission ends in one of these.

use crate::domain::feature::Label;

/// How the verdict should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Positive screening result — render as a warning.
    Warning,
    /// Negative screening result — render as a success.
    Success,
}

/// One of the two fixed verdicts shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionMessage {
    pub severity: Severity,
    pub text:     &'static str,
}

const POSITIVE_TEXT: &str = "The prediction indicates that you may have diabetes. \
     Please consult a healthcare professional for further advice.";

const NEGATIVE_TEXT: &str = "The prediction indicates that you do not have diabetes.";

/// Pure mapping from label to message; the caller renders it.
pub fn present(label: Label) -> DecisionMessage {
    match label {
        Label::Positive => DecisionMessage {
            severity: Severity::Warning,
            text:     POSITIVE_TEXT,
        },
        Label::Negative => DecisionMessage {
            severity: Severity::Success,
            text:     NEGATIVE_TEXT,
        },
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_maps_to_one_of_two_messages() {
        // The presenter must never invent a third verdict.
        let allowed = [present(Label::Negative), present(Label::Positive)];
        for label in [Label::Negative, Label::Positive] {
            assert!(allowed.contains(&present(label)));
        }
        assert_ne!(allowed[0], allowed[1]);
    }

    #[test]
    fn test_positive_is_warning_negative_is_success() {
        assert_eq!(present(Label::Positive).severity, Severity::Warning);
        assert_eq!(present(Label::Negative).severity, Severity::Success);
    }

    #[test]
    fn test_positive_text_advises_a_professional() {
        assert!(present(Label::Positive).text.contains("healthcare professional"));
        assert!(present(Label::Negative).text.contains("do not have diabetes"));
    }
}
