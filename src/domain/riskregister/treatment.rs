use std::fmt::{Display, Formatter};

/// Risk treatment decision recorded alongside remediation fields.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum Treatment {
    Accept,
    #[default]
    Mitigate,
    Transfer,
    Avoid,
}

impl Treatment {
    /// Resolves a wire tag to a treatment. Unrecognized tags fold into
    /// `Mitigate`, the register's default treatment.
    pub fn from_tag(tag: &str) -> Treatment {
        if tag.eq_ignore_ascii_case("accept") {
            Treatment::Accept
        } else if tag.eq_ignore_ascii_case("transfer") {
            Treatment::Transfer
        } else if tag.eq_ignore_ascii_case("avoid") {
            Treatment::Avoid
        } else {
            Treatment::Mitigate
        }
    }
}

impl Display for Treatment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Treatment::Accept => "Accept",
                Treatment::Mitigate => "Mitigate",
                Treatment::Transfer => "Transfer",
                Treatment::Avoid => "Avoid",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_unrecognized_tags_into_mitigate() {
        assert_eq!(Treatment::from_tag("accept"), Treatment::Accept);
        assert_eq!(Treatment::from_tag("Transfer"), Treatment::Transfer);
        assert_eq!(Treatment::from_tag("AVOID"), Treatment::Avoid);
        assert_eq!(Treatment::from_tag("ignore"), Treatment::Mitigate);
        assert_eq!(Treatment::from_tag(""), Treatment::Mitigate);
    }
}
