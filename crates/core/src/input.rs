//! Inbound request payload for an analysis run.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default component names used when the `components` field is blank.
pub const DEFAULT_COMPONENTS: [&str; 3] = ["API", "Database", "Frontend"];

/// Maximum number of component names derived from the `components` field.
pub const MAX_COMPONENT_NAMES: usize = 4;

/// Free-text description of a system architecture, as submitted by the
/// frontend form.
///
/// All fields are opaque strings and default to empty when absent from the
/// request body. Only `system_name` and `components` are required; presence
/// is checked by [`validate`](Self::validate) before any generation path
/// runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchitectureInput {
    pub system_name: String,
    pub components: String,
    pub databases: String,
    pub caching: String,
    pub message_queue: String,
    #[serde(rename = "externalAPIs")]
    pub external_apis: String,
    pub traffic_load: String,
    pub scaling: String,
    pub redundancy: String,
}

impl ArchitectureInput {
    /// Check the required fields. Optional fields are always accepted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.system_name.is_empty() || self.components.is_empty() {
            return Err(CoreError::Validation(
                "Missing required fields: systemName or components".to_string(),
            ));
        }
        Ok(())
    }

    /// The string hashed into the fallback generator seed.
    ///
    /// Concatenation of system name, component list, and database
    /// description, in that order. Changing any of the three changes the
    /// seed and therefore every seed-derived value in a fallback report.
    pub fn seed_source(&self) -> String {
        format!("{}{}{}", self.system_name, self.components, self.databases)
    }

    /// Derive display names from the comma-separated `components` field.
    ///
    /// Each comma-split entry is trimmed and reduced to its first
    /// whitespace-delimited token; at most [`MAX_COMPONENT_NAMES`] entries
    /// are kept. A blank field yields [`DEFAULT_COMPONENTS`].
    pub fn component_names(&self) -> Vec<String> {
        if self.components.is_empty() {
            return DEFAULT_COMPONENTS.iter().map(|s| s.to_string()).collect();
        }

        self.components
            .split(',')
            .take(MAX_COMPONENT_NAMES)
            .map(|entry| {
                entry
                    .trim()
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(system_name: &str, components: &str) -> ArchitectureInput {
        ArchitectureInput {
            system_name: system_name.to_string(),
            components: components.to_string(),
            ..Default::default()
        }
    }

    // -- validate --

    #[test]
    fn validate_accepts_required_fields() {
        assert!(input("Shop", "API,DB").validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_system_name() {
        assert!(input("", "API,DB").validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_components() {
        assert!(input("Shop", "").validate().is_err());
    }

    // -- seed_source --

    #[test]
    fn seed_source_concatenates_three_fields() {
        let mut record = input("Shop", "API");
        record.databases = "single postgres".to_string();
        record.caching = "redis".to_string(); // must not influence the seed
        assert_eq!(record.seed_source(), "ShopAPIsingle postgres");
    }

    // -- component_names --

    #[test]
    fn component_names_takes_first_token_of_each_entry() {
        let record = input("X", "Auth Service, Payment-Gateway, DB");
        assert_eq!(record.component_names(), vec!["Auth", "Payment-Gateway", "DB"]);
    }

    #[test]
    fn component_names_truncates_to_four() {
        let record = input("X", "a,b,c,d,e,f");
        assert_eq!(record.component_names(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn component_names_defaults_when_blank() {
        let record = input("X", "");
        assert_eq!(record.component_names(), vec!["API", "Database", "Frontend"]);
    }

    #[test]
    fn component_names_keeps_empty_entries() {
        // "a,,b" has an empty middle entry; it stays empty rather than
        // being filtered out, matching the derivation contract.
        let record = input("X", "a,,b");
        assert_eq!(record.component_names(), vec!["a", "", "b"]);
    }

    // -- serde field names --

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "systemName": "Shop",
            "components": "API,DB",
            "externalAPIs": "Stripe",
            "messageQueue": "none"
        }"#;
        let record: ArchitectureInput = serde_json::from_str(json).unwrap();
        assert_eq!(record.system_name, "Shop");
        assert_eq!(record.external_apis, "Stripe");
        assert_eq!(record.message_queue, "none");
        assert_eq!(record.databases, "");
    }
}
