use serde::{Deserialize, Serialize};

/// What the user tells us about themselves. Not linked to the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub income: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
}

impl Profile {
    pub fn set_income(&mut self, income: u64) {
        self.income = income;
    }

    /// Stores the goal; blank input removes it.
    pub fn set_goal(&mut self, goal: Option<&str>) {
        self.goal_name = goal
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_goal_clears_existing_value() {
        let mut profile = Profile::default();
        profile.set_goal(Some("Laptop"));
        assert_eq!(profile.goal_name.as_deref(), Some("Laptop"));
        profile.set_goal(Some("   "));
        assert!(profile.goal_name.is_none());
    }
}
