//! Editorial workflow
//!
//! Article lifecycle states, the actions that move between them, and the
//! score gate guarding submission.
//!
//! ```text
//!   any ──submit (score ≥ gate)──▶ submitted
//!   submitted ──reject──▶ rejected
//!   any ──certify──▶ certified (frozen)
//! ```
//!
//! `blocked` and `submittable` are part of the status vocabulary but no
//! action leads into them. Frozen (certified) articles ignore submit and
//! reject; the repository enforces that before consulting [`transition`].

use serde::{Deserialize, Serialize};

/// Default minimum score for submission
pub const DEFAULT_SUBMISSION_THRESHOLD: u8 = 66;

/// Lifecycle state of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Blocked,
    Submittable,
    Submitted,
    Rejected,
    Certified,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 6] = [
        ArticleStatus::Draft,
        ArticleStatus::Blocked,
        ArticleStatus::Submittable,
        ArticleStatus::Submitted,
        ArticleStatus::Rejected,
        ArticleStatus::Certified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Blocked => "blocked",
            ArticleStatus::Submittable => "submittable",
            ArticleStatus::Submitted => "submitted",
            ArticleStatus::Rejected => "rejected",
            ArticleStatus::Certified => "certified",
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::ALL
            .iter()
            .find(|st| st.as_str() == s.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

/// Explicit workflow actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Submit,
    Reject,
    Certify,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Submit => write!(f, "submit"),
            Action::Reject => write!(f, "reject"),
            Action::Certify => write!(f, "certify"),
        }
    }
}

/// Caller role, as decided by the access-control layer.
///
/// The repository never checks roles; front ends use [`Role::permits`]
/// before invoking an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Visitor,
    Editor,
    Admin,
}

impl Role {
    pub fn permits(&self, action: Action) -> bool {
        match action {
            Action::Submit => *self == Role::Editor,
            Action::Reject | Action::Certify => *self == Role::Admin,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Visitor => write!(f, "visitor"),
            Role::Editor => write!(f, "editor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "visitor" => Ok(Role::Visitor),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Minimum score an article needs before it may be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionGate {
    threshold: u8,
}

impl SubmissionGate {
    /// Thresholds above 100 are clamped to 100
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(100),
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// `score >= threshold`
    pub fn allows(&self, score: u8) -> bool {
        score >= self.threshold
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMISSION_THRESHOLD)
    }
}

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDenied {
    /// Score below the submission gate
    Gate { score: u8, threshold: u8 },
    /// Action not allowed from the current state
    State,
}

/// Target state of `action` taken from `from` with the article's current score
pub fn transition(
    from: ArticleStatus,
    action: Action,
    score: u8,
    gate: &SubmissionGate,
) -> Result<ArticleStatus, TransitionDenied> {
    match action {
        Action::Submit => {
            if !gate.allows(score) {
                return Err(TransitionDenied::Gate {
                    score,
                    threshold: gate.threshold(),
                });
            }
            Ok(ArticleStatus::Submitted)
        }
        Action::Reject => {
            if from != ArticleStatus::Submitted {
                return Err(TransitionDenied::State);
            }
            Ok(ArticleStatus::Rejected)
        }
        // Re-certification and fast-tracking are both allowed
        Action::Certify => Ok(ArticleStatus::Certified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_boundary() {
        let gate = SubmissionGate::default();
        assert_eq!(gate.threshold(), 66);
        assert!(!gate.allows(65));
        assert!(gate.allows(66));
        assert!(gate.allows(100));
    }

    #[test]
    fn test_gate_threshold_is_clamped() {
        assert_eq!(SubmissionGate::new(150).threshold(), 100);
    }

    #[test]
    fn test_submit_requires_gate() {
        let gate = SubmissionGate::default();
        assert_eq!(
            transition(ArticleStatus::Draft, Action::Submit, 60, &gate),
            Err(TransitionDenied::Gate {
                score: 60,
                threshold: 66
            })
        );
        assert_eq!(
            transition(ArticleStatus::Draft, Action::Submit, 67, &gate),
            Ok(ArticleStatus::Submitted)
        );
        assert_eq!(
            transition(ArticleStatus::Rejected, Action::Submit, 67, &gate),
            Ok(ArticleStatus::Submitted)
        );
    }

    #[test]
    fn test_submit_only_checks_the_gate() {
        let gate = SubmissionGate::default();
        for from in ArticleStatus::ALL {
            assert_eq!(
                transition(from, Action::Submit, 66, &gate),
                Ok(ArticleStatus::Submitted)
            );
        }
    }

    #[test]
    fn test_reject_only_from_submitted() {
        let gate = SubmissionGate::default();
        assert_eq!(
            transition(ArticleStatus::Submitted, Action::Reject, 0, &gate),
            Ok(ArticleStatus::Rejected)
        );
        for from in [ArticleStatus::Draft, ArticleStatus::Rejected, ArticleStatus::Certified] {
            assert_eq!(
                transition(from, Action::Reject, 0, &gate),
                Err(TransitionDenied::State)
            );
        }
    }

    #[test]
    fn test_certify_from_any_state() {
        let gate = SubmissionGate::default();
        for from in ArticleStatus::ALL {
            assert_eq!(
                transition(from, Action::Certify, 0, &gate),
                Ok(ArticleStatus::Certified)
            );
        }
    }

    #[test]
    fn test_role_permissions() {
        assert!(Role::Editor.permits(Action::Submit));
        assert!(!Role::Editor.permits(Action::Certify));
        assert!(Role::Admin.permits(Action::Reject));
        assert!(Role::Admin.permits(Action::Certify));
        assert!(!Role::Admin.permits(Action::Submit));
        assert!(!Role::Visitor.permits(Action::Submit));
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in ArticleStatus::ALL {
            assert_eq!(status.as_str().parse::<ArticleStatus>(), Ok(status));
        }
        assert!("published".parse::<ArticleStatus>().is_err());
    }
}
