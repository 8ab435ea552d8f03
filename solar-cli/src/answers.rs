//! Calculator answers supplied on the command line or in a TOML file.
//!
//! ## File format
//!
//! Every key is optional. Missing keys keep the calculator defaults, and
//! command-line flags take precedence over the file.
//!
//! ```toml
//! gas_bill = 1200
//! water_heating = "high"   # low | typical | high | 0.3 | 0.5 | 0.7
//! household = 3            # 1 = 1-2 people, 2 = 3-4, 3 = 5+
//! region = "Chihuahua"
//! name = "Luis"
//! email = "luis@example.mx"
//! ```

use std::{fmt, path::Path};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while reading an answers file.
#[derive(Debug, Error)]
pub enum AnswersError {
    #[error("cannot read answers file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid answers file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raw answers for each wizard step. `None` means "keep the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    pub gas_bill: Option<u32>,
    pub water_heating: Option<String>,
    pub household: Option<u8>,
    pub region: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Answers {
    pub fn from_toml_str(input: &str) -> Result<Self, AnswersError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, AnswersError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AnswersError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Fills every field that `overrides` leaves unset from `self`.
    pub fn overridden_by(
        self,
        overrides: Answers,
    ) -> Answers {
        Answers {
            gas_bill: overrides.gas_bill.or(self.gas_bill),
            water_heating: overrides.water_heating.or(self.water_heating),
            household: overrides.household.or(self.household),
            region: overrides.region.or(self.region),
            name: overrides.name.or(self.name),
            email: overrides.email.or(self.email),
        }
    }
}

impl fmt::Display for Answers {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fn show<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "—".to_string())
        }

        writeln!(f, "Gas bill:      {}", show(&self.gas_bill))?;
        writeln!(f, "Water heating: {}", show(&self.water_heating))?;
        writeln!(f, "Household:     {}", show(&self.household))?;
        writeln!(f, "Region:        {}", show(&self.region))?;
        writeln!(f, "Name:          {}", show(&self.name))?;
        writeln!(f, "Email:         {}", show(&self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_TOML: &str = r#"
gas_bill = 1200
water_heating = "high"
household = 3
region = "Chihuahua"
name = "Luis"
email = "luis@example.mx"
"#;

    #[test]
    fn parses_every_key() {
        let answers = Answers::from_toml_str(FULL_TOML).unwrap();

        assert_eq!(answers.gas_bill, Some(1200));
        assert_eq!(answers.water_heating.as_deref(), Some("high"));
        assert_eq!(answers.household, Some(3));
        assert_eq!(answers.region.as_deref(), Some("Chihuahua"));
    }

    #[test]
    fn missing_keys_are_none() {
        let answers = Answers::from_toml_str("region = \"Sonora\"").unwrap();

        assert_eq!(
            answers,
            Answers {
                region: Some("Sonora".to_string()),
                ..Answers::default()
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Answers::from_toml_str("gas_bil = 800");

        assert!(matches!(result, Err(AnswersError::Parse(_))));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let file = Answers::from_toml_str(FULL_TOML).unwrap();
        let flags = Answers {
            gas_bill: Some(900),
            name: Some("Ana".to_string()),
            ..Answers::default()
        };

        let merged = file.overridden_by(flags);

        assert_eq!(merged.gas_bill, Some(900));
        assert_eq!(merged.name.as_deref(), Some("Ana"));
        assert_eq!(merged.region.as_deref(), Some("Chihuahua"));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = Answers::load(Path::new("/nonexistent/answers.toml"));

        let message = result.unwrap_err().to_string();
        assert!(message.contains("/nonexistent/answers.toml"));
    }
}
