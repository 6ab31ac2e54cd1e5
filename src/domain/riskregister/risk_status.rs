use std::fmt::{Display, Formatter};

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum RiskStatus {
    #[default]
    Open,
    InProgress,
    Mitigated,
    Accepted,
}

impl RiskStatus {
    /// Resolves a wire tag to a status. Unrecognized tags fold into `Open`.
    pub fn from_tag(tag: &str) -> RiskStatus {
        if tag.eq_ignore_ascii_case("in progress") {
            RiskStatus::InProgress
        } else if tag.eq_ignore_ascii_case("mitigated") {
            RiskStatus::Mitigated
        } else if tag.eq_ignore_ascii_case("accepted") {
            RiskStatus::Accepted
        } else {
            RiskStatus::Open
        }
    }

    pub fn is_mitigated(&self) -> bool {
        matches!(self, Self::Mitigated)
    }
}

impl Display for RiskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskStatus::Open => "Open",
                RiskStatus::InProgress => "In Progress",
                RiskStatus::Mitigated => "Mitigated",
                RiskStatus::Accepted => "Accepted",
            }
        )
    }
}
