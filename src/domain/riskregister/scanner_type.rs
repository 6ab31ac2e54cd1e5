use std::fmt::{Display, Formatter};

/// Origin of a risk record: which kind of scanner produced it, or `Manual`
/// for risks entered by hand.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum ScannerType {
    #[default]
    Manual,
    VulnerabilityScanner,
    AttackSurfaceScanner,
    CloudConfiguration,
    DependencyScanner,
    Availability,
}

impl ScannerType {
    /// Resolves a wire tag to a scanner type. Absent or unrecognized tags
    /// fold into the default bucket, `Manual`.
    pub fn from_tag(tag: &str) -> ScannerType {
        if tag.eq_ignore_ascii_case("vulnerability scanner") {
            ScannerType::VulnerabilityScanner
        } else if tag.eq_ignore_ascii_case("attack surface scanner") {
            ScannerType::AttackSurfaceScanner
        } else if tag.eq_ignore_ascii_case("cloud configuration") {
            ScannerType::CloudConfiguration
        } else if tag.eq_ignore_ascii_case("dependency scanner") {
            ScannerType::DependencyScanner
        } else if tag.eq_ignore_ascii_case("availability") {
            ScannerType::Availability
        } else {
            ScannerType::Manual
        }
    }
}

impl Display for ScannerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ScannerType::Manual => "Manual",
                ScannerType::VulnerabilityScanner => "Vulnerability Scanner",
                ScannerType::AttackSurfaceScanner => "Attack Surface Scanner",
                ScannerType::CloudConfiguration => "Cloud Configuration",
                ScannerType::DependencyScanner => "Dependency Scanner",
                ScannerType::Availability => "Availability",
            }
        )
    }
}
