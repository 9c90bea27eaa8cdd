//! Environment lookup table
//!
//! Flattens a document's environments into one name → value map with the
//! precedence HTTPie uses for unqualified variables.

use std::collections::BTreeMap;

use postie_domain::source::HttpieEnvironment;

/// Name → value bindings drawn from every declared environment.
///
/// The default environment (the first one flagged `isDefault`, or else the
/// first declared) seeds the table. Every other environment only contributes
/// names that are still missing, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentTable {
    values: BTreeMap<String, String>,
    seeded_from: Option<String>,
}

impl EnvironmentTable {
    /// Builds the table from a document's environments.
    #[must_use]
    pub fn from_environments(environments: &[HttpieEnvironment]) -> Self {
        let primary = environments
            .iter()
            .position(|env| env.is_default)
            .or_else(|| (!environments.is_empty()).then_some(0));

        let mut table = Self::default();
        let Some(primary) = primary else {
            return table;
        };

        let seed = &environments[primary];
        table.seeded_from = Some(seed.name.clone());
        for var in &seed.variables {
            table.values.insert(var.name.clone(), var.value.clone());
        }

        for (index, env) in environments.iter().enumerate() {
            if index == primary {
                continue;
            }
            for var in &env.variables {
                table
                    .values
                    .entry(var.name.clone())
                    .or_insert_with(|| var.value.clone());
            }
        }

        table
    }

    /// Looks up a variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Name of the environment that seeded the table, if any.
    #[must_use]
    pub fn seeded_from(&self) -> Option<&str> {
        self.seeded_from.as_deref()
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no environment declared any variable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
