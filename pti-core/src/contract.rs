use std::fmt;

/// File name offered when the contract is downloaded.
pub const CONTRACT_FILE_NAME: &str = "path-to-independence-contract.txt";
/// MIME type of the downloaded contract.
pub const CONTRACT_MIME_TYPE: &str = "text/plain";

pub const CONTRACT_SIMPLE: &str = "
Path to Independence Contract (Simple)

1) Keep the mission real.
2) Track your savings.
3) Cut debt.
4) Level up income.
5) Repeat.

This is your quest log.
";

pub const CONTRACT_DETAILED: &str = "
Path to Independence Contract (Detailed)

1) Goal: Build financial stability through consistent saving and smart spending.
2) Track progress weekly and adjust the plan as needed.
3) Reduce debt using a prioritized payoff strategy.
4) Increase income via skill upgrades, career growth, and side missions.
5) Maintain health, relationships, and focus while building wealth.
6) Celebrate milestones, but never lose the mission.

Signed,
The Future You
";

/// Contract verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractMode {
    #[default]
    Simple,
    Detailed,
}

impl ContractMode {
    pub const ALL: [Self; 2] = [Self::Simple, Self::Detailed];

    /// Interpret a control value. Only the exact literal `detailed` selects
    /// the detailed text; anything else reads as simple.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == Self::Detailed.as_str() {
            Self::Detailed
        } else {
            Self::Simple
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Detailed => "detailed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Detailed => "Detailed",
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Simple => CONTRACT_SIMPLE,
            Self::Detailed => CONTRACT_DETAILED,
        }
    }
}

impl fmt::Display for ContractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract text for a contract-mode control value.
#[must_use]
pub fn contract_text(mode_value: &str) -> &'static str {
    ContractMode::from_value(mode_value).text()
}

/// Everything needed to hand the displayed contract to the browser as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractDownload {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub body: &'static str,
}

impl ContractDownload {
    #[must_use]
    pub fn for_mode(mode_value: &str) -> Self {
        Self {
            file_name: CONTRACT_FILE_NAME,
            mime_type: CONTRACT_MIME_TYPE,
            body: contract_text(mode_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_literal_selects_detailed_text() {
        assert_eq!(contract_text("detailed"), CONTRACT_DETAILED);
        assert!(contract_text("detailed").contains("The Future You"));
    }

    #[test]
    fn any_other_value_falls_back_to_simple() {
        for value in ["simple", "", "Detailed", "verbose"] {
            assert_eq!(contract_text(value), CONTRACT_SIMPLE, "value {value:?}");
        }
    }

    #[test]
    fn download_carries_displayed_text_verbatim() {
        let detailed = ContractDownload::for_mode("detailed");
        assert_eq!(detailed.file_name, "path-to-independence-contract.txt");
        assert_eq!(detailed.mime_type, "text/plain");
        assert_eq!(detailed.body, CONTRACT_DETAILED);

        let simple = ContractDownload::for_mode("simple");
        assert_eq!(simple.body, CONTRACT_SIMPLE);
    }

    #[test]
    fn texts_keep_surrounding_newlines() {
        assert!(CONTRACT_SIMPLE.starts_with('\n'));
        assert!(CONTRACT_SIMPLE.ends_with("quest log.\n"));
    }
}
