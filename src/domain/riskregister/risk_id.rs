use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Risk identifier, assigned by the upstream risk store. The store may use
/// numeric or string identifiers; both normalize to their string form here.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct RiskId(String);

impl RiskId {
    pub fn new(id: impl Into<String>) -> RiskId {
        RiskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RiskId {
    fn from(value: u64) -> Self {
        RiskId(value.to_string())
    }
}

impl From<&str> for RiskId {
    fn from(value: &str) -> Self {
        RiskId(value.to_string())
    }
}

impl Display for RiskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_normalize_to_the_same_form() {
        assert_eq!(RiskId::from(7u64), RiskId::from("7"));
        assert_eq!(RiskId::from(7u64).to_string(), "7");
        assert_eq!(RiskId::new("risk-api-3").as_str(), "risk-api-3");
    }
}
