//! Solar radiation reference data.
//!
//! The [`RadiationTable`] maps a region (a Mexican state in the built-in
//! table) to its average daily solar radiation in kWh/m²/day. Lookups are
//! total: any region the table does not know, including the empty string,
//! resolves to the table's default index.
//!
//! [`RadiationQuality`] buckets an index into the four bands shown next to
//! the state selector.
//!
//! ## CSV Format
//!
//! A replacement table can be loaded with [`RadiationTable::from_csv`]:
//!
//! ```csv
//! region,radiation
//! Sonora,6.2
//! Tabasco,4.8
//! DEFAULT,5.2
//! ```
//!
//! The optional `DEFAULT` row overrides the fallback index.

use std::{collections::BTreeMap, io::Read, sync::OnceLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Region key that sets the fallback index in a CSV table.
pub const DEFAULT_REGION_KEY: &str = "DEFAULT";

const BUILTIN_REGIONS: &[(&str, i64)] = &[
    ("Aguascalientes", 55),
    ("Baja California", 60),
    ("Baja California Sur", 63),
    ("Campeche", 52),
    ("Chiapas", 50),
    ("Chihuahua", 58),
    ("Ciudad de México", 51),
    ("Coahuila", 57),
    ("Colima", 54),
    ("Durango", 59),
    ("Estado de México", 51),
    ("Guanajuato", 54),
    ("Guerrero", 53),
    ("Hidalgo", 50),
    ("Jalisco", 53),
    ("Michoacán", 53),
    ("Morelos", 52),
    ("Nayarit", 54),
    ("Nuevo León", 54),
    ("Oaxaca", 52),
    ("Puebla", 51),
    ("Querétaro", 53),
    ("Quintana Roo", 55),
    ("San Luis Potosí", 53),
    ("Sinaloa", 56),
    ("Sonora", 62),
    ("Tabasco", 48),
    ("Tamaulipas", 53),
    ("Tlaxcala", 50),
    ("Veracruz", 48),
    ("Yucatán", 55),
    ("Zacatecas", 56),
];

/// Errors that can occur when loading a radiation table from CSV.
#[derive(Debug, Error)]
pub enum RadiationTableError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("region '{region}' appears more than once (row {row})")]
    DuplicateRegion { region: String, row: usize },

    #[error("radiation for '{region}' must be positive, got {value} (row {row})")]
    InvalidIndex {
        region: String,
        value: Decimal,
        row: usize,
    },

    #[error("row {0} has an empty region")]
    EmptyRegion(usize),
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    region: String,
    radiation: Decimal,
}

/// Immutable region → radiation index lookup with a default fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiationTable {
    regions: BTreeMap<String, Decimal>,
    default_index: Decimal,
}

impl RadiationTable {
    /// Fallback index for unknown regions in the built-in table.
    pub const DEFAULT_INDEX: Decimal = Decimal::from_parts(52, 0, 0, false, 1);

    /// Builds a table from explicit entries.
    pub fn new<I, S>(
        entries: I,
        default_index: Decimal,
    ) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            regions: entries
                .into_iter()
                .map(|(region, index)| (region.into(), index))
                .collect(),
            default_index,
        }
    }

    /// The shared built-in table of Mexican states, created on first use.
    pub fn builtin() -> &'static RadiationTable {
        static BUILTIN: OnceLock<RadiationTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::new(
                BUILTIN_REGIONS
                    .iter()
                    .map(|(region, tenths)| (*region, Decimal::new(*tenths, 1))),
                Self::DEFAULT_INDEX,
            )
        })
    }

    /// Parses a table from CSV with `region` and `radiation` columns.
    ///
    /// # Errors
    ///
    /// * [`RadiationTableError::Parse`] if the CSV is malformed or a value is
    ///   not a number.
    /// * [`RadiationTableError::DuplicateRegion`] if a region or the
    ///   `DEFAULT` row repeats.
    /// * [`RadiationTableError::InvalidIndex`] if an index is zero or negative.
    /// * [`RadiationTableError::EmptyRegion`] if a region cell is blank.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, RadiationTableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut regions = BTreeMap::new();
        let mut default_index = Self::DEFAULT_INDEX;
        let mut default_seen = false;

        for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
            let row = result?;
            let row_number = idx + 1;

            if row.region.is_empty() {
                return Err(RadiationTableError::EmptyRegion(row_number));
            }
            if row.radiation <= Decimal::ZERO {
                return Err(RadiationTableError::InvalidIndex {
                    region: row.region,
                    value: row.radiation,
                    row: row_number,
                });
            }

            if row.region == DEFAULT_REGION_KEY {
                if default_seen {
                    return Err(RadiationTableError::DuplicateRegion {
                        region: row.region,
                        row: row_number,
                    });
                }
                default_seen = true;
                default_index = row.radiation;
                continue;
            }
            if regions.contains_key(&row.region) {
                return Err(RadiationTableError::DuplicateRegion {
                    region: row.region,
                    row: row_number,
                });
            }
            regions.insert(row.region, row.radiation);
        }

        debug!(regions = regions.len(), %default_index, "loaded radiation table");
        Ok(Self {
            regions,
            default_index,
        })
    }

    /// Radiation index for `region`, or the default index when the region is
    /// empty or unknown.
    pub fn lookup(
        &self,
        region: &str,
    ) -> Decimal {
        match self.regions.get(region) {
            Some(index) => *index,
            None => {
                debug!(region, "region not in radiation table, using default");
                self.default_index
            }
        }
    }

    pub fn contains(
        &self,
        region: &str,
    ) -> bool {
        self.regions.contains_key(region)
    }

    pub fn default_index(&self) -> Decimal {
        self.default_index
    }

    /// Known regions and their indices in alphabetical order.
    pub fn regions(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.regions
            .iter()
            .map(|(region, index)| (region.as_str(), *index))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Radiation and quality band for a selected region, as shown under the
    /// state selector.
    pub fn describe(
        &self,
        region: &str,
    ) -> RegionRadiation {
        let index = self.lookup(region);
        RegionRadiation {
            region: region.to_string(),
            index,
            quality: RadiationQuality::classify(index),
            known: self.contains(region),
        }
    }
}

impl Default for RadiationTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Quality band for a radiation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiationQuality {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl RadiationQuality {
    /// Bands in descending threshold order.
    pub fn all() -> &'static [RadiationQuality] {
        &[
            RadiationQuality::Excellent,
            RadiationQuality::Good,
            RadiationQuality::Moderate,
            RadiationQuality::Low,
        ]
    }

    /// Picks the highest band whose minimum `index` meets.
    pub fn classify(index: Decimal) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|band| index >= band.min())
            .unwrap_or(Self::Low)
    }

    /// Minimum radiation index for the band.
    pub fn min(&self) -> Decimal {
        match self {
            Self::Excellent => Decimal::new(58, 1),
            Self::Good => Decimal::new(53, 1),
            Self::Moderate => Decimal::new(49, 1),
            Self::Low => Decimal::ZERO,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excelente",
            Self::Good => "Muy buena",
            Self::Moderate => "Buena",
            Self::Low => "Moderada",
        }
    }

    /// Accent colour as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#22c55e",
            Self::Good => "#f59e0b",
            Self::Moderate => "#3b82f6",
            Self::Low => "#94a3b8",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Excellent => "🔥",
            Self::Good => "☀️",
            Self::Moderate => "⛅",
            Self::Low => "🌤️",
        }
    }
}

/// Radiation details for a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRadiation {
    pub region: String,
    pub index: Decimal,
    pub quality: RadiationQuality,
    /// `false` when `index` is the table default.
    pub known: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // builtin table tests
    // =========================================================================

    #[test]
    fn builtin_has_all_states() {
        assert_eq!(RadiationTable::builtin().len(), 32);
    }

    #[test]
    fn builtin_lookup_known_region() {
        let table = RadiationTable::builtin();

        assert_eq!(table.lookup("Sonora"), dec!(6.2));
        assert_eq!(table.lookup("Baja California Sur"), dec!(6.3));
        assert_eq!(table.lookup("Ciudad de México"), dec!(5.1));
    }

    #[test]
    fn lookup_unknown_region_uses_default() {
        let table = RadiationTable::builtin();

        assert_eq!(table.lookup("Atlantis"), dec!(5.2));
        assert_eq!(table.lookup(""), dec!(5.2));
        assert_eq!(table.lookup("DEFAULT"), dec!(5.2));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = RadiationTable::builtin();

        assert_eq!(table.lookup("sonora"), table.default_index());
    }

    #[test]
    fn regions_are_listed_alphabetically() {
        let table = RadiationTable::builtin();
        let first = table.regions().next();

        assert_eq!(first, Some(("Aguascalientes", dec!(5.5))));
    }

    #[test]
    fn describe_reports_unknown_regions() {
        let table = RadiationTable::builtin();

        let info = table.describe("Atlantis");

        assert_eq!(info.index, dec!(5.2));
        assert_eq!(info.quality, RadiationQuality::Moderate);
        assert!(!info.known);
    }

    // =========================================================================
    // from_csv tests
    // =========================================================================

    #[test]
    fn from_csv_reads_regions_and_default() {
        let csv = "region,radiation\nSonora,6.2\n Tabasco , 4.8 \nDEFAULT,5.0\n";

        let table = RadiationTable::from_csv(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Tabasco"), dec!(4.8));
        assert_eq!(table.lookup("Nowhere"), dec!(5.0));
    }

    #[test]
    fn from_csv_without_default_row_keeps_builtin_default() {
        let csv = "region,radiation\nSonora,6.2\n";

        let table = RadiationTable::from_csv(csv.as_bytes()).unwrap();

        assert_eq!(table.default_index(), dec!(5.2));
    }

    #[test]
    fn from_csv_rejects_duplicates() {
        let csv = "region,radiation\nSonora,6.2\nSonora,6.0\n";

        let result = RadiationTable::from_csv(csv.as_bytes());

        assert!(matches!(
            result,
            Err(RadiationTableError::DuplicateRegion { row: 2, .. })
        ));
    }

    #[test]
    fn from_csv_rejects_repeated_default_row() {
        let csv = "region,radiation\nDEFAULT,5.5\nSonora,6.2\nDEFAULT,4.0\n";

        let result = RadiationTable::from_csv(csv.as_bytes());

        match result {
            Err(RadiationTableError::DuplicateRegion { region, row }) => {
                assert_eq!(region, "DEFAULT");
                assert_eq!(row, 3);
            }
            other => panic!("expected duplicate DEFAULT row, got {other:?}"),
        }
    }

    #[test]
    fn from_csv_rejects_non_positive_index() {
        let csv = "region,radiation\nSonora,0\n";

        let result = RadiationTable::from_csv(csv.as_bytes());

        assert!(matches!(
            result,
            Err(RadiationTableError::InvalidIndex { row: 1, .. })
        ));
    }

    #[test]
    fn from_csv_rejects_bad_numbers() {
        let csv = "region,radiation\nSonora,sunny\n";

        let result = RadiationTable::from_csv(csv.as_bytes());

        assert!(matches!(result, Err(RadiationTableError::Parse(_))));
    }

    // =========================================================================
    // RadiationQuality tests
    // =========================================================================

    #[test]
    fn classify_picks_highest_band_met() {
        assert_eq!(RadiationQuality::classify(dec!(6.3)), RadiationQuality::Excellent);
        assert_eq!(RadiationQuality::classify(dec!(5.8)), RadiationQuality::Excellent);
        assert_eq!(RadiationQuality::classify(dec!(5.5)), RadiationQuality::Good);
        assert_eq!(RadiationQuality::classify(dec!(5.3)), RadiationQuality::Good);
        assert_eq!(RadiationQuality::classify(dec!(5.0)), RadiationQuality::Moderate);
        assert_eq!(RadiationQuality::classify(dec!(4.8)), RadiationQuality::Low);
    }

    #[test]
    fn classify_falls_back_to_low_for_negative_index() {
        assert_eq!(RadiationQuality::classify(dec!(-1)), RadiationQuality::Low);
    }

    #[test]
    fn band_labels() {
        assert_eq!(RadiationQuality::Excellent.label(), "Excelente");
        assert_eq!(RadiationQuality::Low.label(), "Moderada");
        assert_eq!(RadiationQuality::Good.color(), "#f59e0b");
    }
}
