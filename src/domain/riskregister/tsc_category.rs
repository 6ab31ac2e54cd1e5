use std::fmt::{Display, Formatter};

/// SOC 2 Trust Service Criteria category used to group risks in charts.
///
/// Category is a data-source field; it is never synthesized from other risk
/// attributes.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum TscCategory {
    #[default]
    Security,
    Availability,
    Confidentiality,
    ProcessingIntegrity,
    Privacy,
}

impl TscCategory {
    /// Bare tag used on the wire; `Display` renders the chart label instead.
    pub fn tag(&self) -> &'static str {
        match self {
            TscCategory::Security => "Security",
            TscCategory::Availability => "Availability",
            TscCategory::Confidentiality => "Confidentiality",
            TscCategory::ProcessingIntegrity => "Processing Integrity",
            TscCategory::Privacy => "Privacy",
        }
    }

    /// Resolves a wire tag to a category. Absent or unrecognized tags fold
    /// into the default bucket, `Security (CC)`.
    pub fn from_tag(tag: &str) -> TscCategory {
        if tag.eq_ignore_ascii_case("availability") {
            TscCategory::Availability
        } else if tag.eq_ignore_ascii_case("confidentiality") {
            TscCategory::Confidentiality
        } else if tag.eq_ignore_ascii_case("processing integrity") {
            TscCategory::ProcessingIntegrity
        } else if tag.eq_ignore_ascii_case("privacy") {
            TscCategory::Privacy
        } else {
            TscCategory::Security
        }
    }
}

impl Display for TscCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TscCategory::Security => "Security (CC)",
                TscCategory::Availability => "Availability (A)",
                TscCategory::Confidentiality => "Confidentiality (C)",
                TscCategory::ProcessingIntegrity => "Processing Integrity (PI)",
                TscCategory::Privacy => "Privacy (P)",
            }
        )
    }
}
