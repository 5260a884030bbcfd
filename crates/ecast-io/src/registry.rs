use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ecast_core::{HistoricalSeries, SeriesSource};
use tracing::{debug, info};

use crate::records::{load_series, parse_csv_records};

/// A dataset compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDataset {
    pub id: &'static str,
    pub name: &'static str,
    pub csv: &'static str,
}

/// Yearly 2000-2025 series for the four North African countries.
pub const BUILTIN_DATASETS: [BuiltinDataset; 4] = [
    BuiltinDataset {
        id: "tunisia",
        name: "Tunisia",
        csv: include_str!("../data/tunisia.csv"),
    },
    BuiltinDataset {
        id: "algeria",
        name: "Algeria",
        csv: include_str!("../data/algeria.csv"),
    },
    BuiltinDataset {
        id: "morocco",
        name: "Morocco",
        csv: include_str!("../data/morocco.csv"),
    },
    BuiltinDataset {
        id: "libya",
        name: "Libya",
        csv: include_str!("../data/libya.csv"),
    },
];

/// Historical series keyed by lowercase country identifier.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    series: BTreeMap<String, HistoricalSeries>,
    names: BTreeMap<String, String>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the compiled-in datasets.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for dataset in BUILTIN_DATASETS {
            let records = parse_csv_records(dataset.csv.as_bytes())
                .with_context(|| format!("parsing built-in dataset '{}'", dataset.id))?;
            let series = HistoricalSeries::new(records)
                .with_context(|| format!("validating built-in dataset '{}'", dataset.id))?;
            registry.insert_named(dataset.id, dataset.name, series);
        }
        Ok(registry)
    }

    /// Registry with one series per `.csv`/`.json` file in `dir`, keyed by file stem.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::new();
        registry.extend_from_dir(dir)?;
        Ok(registry)
    }

    /// Add every dataset file in `dir`, replacing entries with the same id.
    pub fn extend_from_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("listing {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("json")
                    })
            })
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let series = load_series(&path)?;
            debug!(country = stem, years = series.len(), "registered dataset");
            self.insert(stem, series);
            loaded += 1;
        }
        info!(dir = %dir.display(), loaded, "loaded dataset directory");
        Ok(loaded)
    }

    pub fn insert(&mut self, country: &str, series: HistoricalSeries) -> Option<HistoricalSeries> {
        self.series.insert(country.to_lowercase(), series)
    }

    pub fn insert_named(
        &mut self,
        country: &str,
        name: &str,
        series: HistoricalSeries,
    ) -> Option<HistoricalSeries> {
        self.names.insert(country.to_lowercase(), name.to_string());
        self.insert(country, series)
    }

    pub fn get(&self, country: &str) -> Option<&HistoricalSeries> {
        self.series.get(&country.to_lowercase())
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Human-readable name: the registered one, else the capitalised id.
    pub fn display_name(&self, country: &str) -> String {
        let key = country.to_lowercase();
        if let Some(name) = self.names.get(&key) {
            return name.clone();
        }
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl SeriesSource for DatasetRegistry {
    fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        self.get(country)
    }

    fn canonical_id<'a>(&self, country: &'a str) -> Cow<'a, str> {
        if country.chars().any(char::is_uppercase) {
            Cow::Owned(country.to_lowercase())
        } else {
            Cow::Borrowed(country)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecast_core::Field;
    use tempfile::tempdir;

    #[test]
    fn builtin_covers_four_countries() {
        let registry = DatasetRegistry::builtin().unwrap();
        let ids: Vec<_> = registry.countries().collect();
        assert_eq!(ids, vec!["algeria", "libya", "morocco", "tunisia"]);
        for id in ids {
            let series = registry.get(id).unwrap();
            assert_eq!(series.first_year(), 2000);
            assert_eq!(series.last_year(), 2025);
        }
    }

    #[test]
    fn builtin_tunisia_matches_source_values() {
        let registry = DatasetRegistry::builtin().unwrap();
        let last = registry.get("Tunisia").unwrap().last();
        assert_eq!(last.get(Field::RenewableShare), 15.0);
        assert_eq!(last.get(Field::OilReserves), 300.0);
        assert_eq!(last.get(Field::OilProduction), 1.0);
        assert_eq!(registry.display_name("tunisia"), "Tunisia");
    }

    #[test]
    fn canonical_id_folds_case() {
        let registry = DatasetRegistry::builtin().unwrap();
        assert_eq!(registry.canonical_id("Tunisia"), "tunisia");
        assert_eq!(registry.canonical_id("LIBYA"), registry.canonical_id("libya"));
        assert!(matches!(registry.canonical_id("morocco"), Cow::Borrowed(_)));
    }

    #[test]
    fn loads_directory_by_file_stem() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("egypt.csv"), "year,gdp\n2024,1\n2025,2\n").unwrap();
        fs::write(
            dir.path().join("Chad.json"),
            r#"[{"year": 2025, "population": 18.3}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let registry = DatasetRegistry::load_dir(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.series("chad").is_some());
        assert_eq!(registry.display_name("egypt"), "Egypt");
    }

    #[test]
    fn directory_with_invalid_file_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.csv"), "year,gdp\n2025,1\n2024,2\n").unwrap();
        assert!(DatasetRegistry::load_dir(dir.path()).is_err());
    }
}
