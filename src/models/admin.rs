//! Administrative subdivision types: single levels, validated collections and
//! the raw entries a provider response yields.

use hashbrown::HashSet;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AddressError, Result};

/// One administrative subdivision, e.g. sub-locality level 2 = "Brooklyn".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminLevel {
    level: u32,
    name: String,
    code: Option<String>,
}

impl AdminLevel {
    /// Build a level descriptor. Fails unless `level` is a positive integer
    /// and `name` is non-empty.
    pub fn new(level: i64, name: impl Into<String>, code: Option<String>) -> Result<Self> {
        let name = name.into();
        let checked = u32::try_from(level).ok().filter(|l| *l > 0);

        match checked {
            Some(level) if !name.is_empty() => Ok(Self { level, name, code }),
            _ => Err(AddressError::InvalidAdminLevel { level, name }),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short code (e.g. "BK"), if the provider supplied one
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Composite identity used for exact-duplicate removal.
    fn identity(&self) -> (u32, &str, Option<&str>) {
        (self.level, self.name.as_str(), self.code.as_deref())
    }
}

impl std::fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// What to do when two distinct entries claim the same level number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Fail with `DuplicateAdminLevel`
    #[default]
    Reject,
    /// Keep the first entry seen at a level and drop the rest
    KeepFirst,
}

/// Ordered admin levels, unique by level number.
///
/// Insertion order is preserved. A collection is never mutated after
/// construction; a new set of levels always means a new collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminLevelCollection {
    levels: Vec<AdminLevel>,
}

impl AdminLevelCollection {
    /// Build a collection, failing on the first repeated level number.
    pub fn new(levels: Vec<AdminLevel>) -> Result<Self> {
        Self::with_policy(levels, ConflictPolicy::Reject)
    }

    /// Build a collection, resolving repeated level numbers with `policy`.
    pub fn with_policy(levels: Vec<AdminLevel>, policy: ConflictPolicy) -> Result<Self> {
        let mut seen: HashSet<u32> = HashSet::with_capacity(levels.len());
        let mut kept = Vec::with_capacity(levels.len());

        for admin_level in levels {
            if seen.insert(admin_level.level) {
                kept.push(admin_level);
                continue;
            }

            match policy {
                ConflictPolicy::Reject => {
                    return Err(AddressError::DuplicateAdminLevel {
                        level: admin_level.level,
                    });
                }
                ConflictPolicy::KeepFirst => {
                    warn!(
                        "Dropping admin level {} '{}': level already taken",
                        admin_level.level, admin_level.name
                    );
                }
            }
        }

        Ok(Self { levels: kept })
    }

    /// Build a collection from raw provider entries.
    ///
    /// Entries without a level or without a usable name are skipped, exact
    /// duplicates (same level, name and code) are collapsed to their first
    /// occurrence, and the remainder goes through [`Self::with_policy`].
    pub fn from_raw(raw: &[RawAdminLevel], policy: ConflictPolicy) -> Result<Self> {
        let mut levels = Vec::with_capacity(raw.len());
        for entry in raw {
            if let Some(admin_level) = entry.to_admin_level()? {
                levels.push(admin_level);
            }
        }

        Self::with_policy(dedup_exact(levels), policy)
    }

    /// Look up the entry stored at `level`.
    pub fn get(&self, level: u32) -> Result<&AdminLevel> {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .ok_or(AddressError::AdminLevelNotFound { level })
    }

    pub fn has(&self, level: u32) -> bool {
        self.levels.iter().any(|l| l.level == level)
    }

    pub fn first(&self) -> Option<&AdminLevel> {
        self.levels.first()
    }

    /// Up to `length` entries starting at `offset`, clamped to the collection.
    pub fn slice(&self, offset: usize, length: usize) -> &[AdminLevel] {
        let start = offset.min(self.levels.len());
        let end = start.saturating_add(length).min(self.levels.len());
        &self.levels[start..end]
    }

    pub fn all(&self) -> &[AdminLevel] {
        &self.levels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdminLevel> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdminLevelCollection {
    type Item = &'a AdminLevel;
    type IntoIter = std::slice::Iter<'a, AdminLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Remove exact duplicates, keeping the first occurrence of each identity.
fn dedup_exact(levels: Vec<AdminLevel>) -> Vec<AdminLevel> {
    let mut keep = Vec::with_capacity(levels.len());
    {
        let mut seen = HashSet::with_capacity(levels.len());
        for admin_level in &levels {
            keep.push(seen.insert(admin_level.identity()));
        }
    }

    levels
        .into_iter()
        .zip(keep)
        .filter_map(|(admin_level, first_seen)| {
            if !first_seen {
                debug!(
                    "Removing duplicate admin level {} '{}'",
                    admin_level.level, admin_level.name
                );
            }
            first_seen.then_some(admin_level)
        })
        .collect()
}

/// A sub-locality entry as the provider response adapter hands it over.
///
/// Every key is optional. `level` accepts a whole number or a numeric string;
/// `null`, `false`, `""` and zero mean absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAdminLevel {
    #[serde(default, deserialize_with = "deserialize_level")]
    pub level: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}

impl RawAdminLevel {
    /// Resolve to an `AdminLevel`, or `None` when the entry is unusable.
    ///
    /// Name falls back to code. A negative level is not treated as absent and
    /// fails construction.
    pub fn to_admin_level(&self) -> Result<Option<AdminLevel>> {
        let level = match self.level {
            Some(level) if level != 0 => level,
            _ => {
                debug!("Skipping sub-locality entry without level: {:?}", self);
                return Ok(None);
            }
        };

        let code = self.code.as_deref().filter(|c| !c.is_empty());
        let name = match self.name.as_deref().filter(|n| !n.is_empty()).or(code) {
            Some(name) => name,
            None => {
                debug!("Skipping sub-locality level {} without name or code", level);
                return Ok(None);
            }
        };

        AdminLevel::new(level, name, code.map(str::to_string)).map(Some)
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .map(|level| (level != 0).then_some(level))
            .ok_or_else(|| de::Error::custom(format!("admin level {} is not an integer", n))),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("admin level '{}' is not an integer", s)))
        }
        Some(other) => Err(de::Error::custom(format!(
            "unexpected admin level value: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn level(level: i64, name: &str, code: Option<&str>) -> AdminLevel {
        AdminLevel::new(level, name, code.map(str::to_string)).unwrap()
    }

    fn raw(entries: serde_json::Value) -> Vec<RawAdminLevel> {
        serde_json::from_value(entries).unwrap()
    }

    #[test]
    fn test_admin_level_accessors() {
        let l = level(2, "Brooklyn", Some("BK"));
        assert_eq!(l.level(), 2);
        assert_eq!(l.name(), "Brooklyn");
        assert_eq!(l.code(), Some("BK"));
        assert_eq!(l.to_string(), "Brooklyn");
    }

    #[test]
    fn test_admin_level_rejects_zero_level() {
        let err = AdminLevel::new(0, "Brooklyn", None).unwrap_err();
        assert!(matches!(err, AddressError::InvalidAdminLevel { level: 0, .. }));
    }

    #[test]
    fn test_admin_level_rejects_negative_level() {
        let err = AdminLevel::new(-3, "Brooklyn", None).unwrap_err();
        assert!(matches!(err, AddressError::InvalidAdminLevel { level: -3, .. }));
    }

    #[test]
    fn test_admin_level_rejects_empty_name() {
        let err = AdminLevel::new(1, "", None).unwrap_err();
        assert!(matches!(err, AddressError::InvalidAdminLevel { level: 1, .. }));
    }

    #[test]
    fn test_admin_level_equality_includes_code() {
        assert_eq!(level(1, "A", Some("a")), level(1, "A", Some("a")));
        assert_ne!(level(1, "A", Some("a")), level(1, "A", None));
        assert_ne!(level(1, "A", None), level(2, "A", None));
    }

    #[test]
    fn test_collection_rejects_duplicate_level() {
        let err =
            AdminLevelCollection::new(vec![level(1, "A", None), level(1, "B", None)]).unwrap_err();
        assert_eq!(err, AddressError::DuplicateAdminLevel { level: 1 });
    }

    #[test]
    fn test_collection_keep_first_policy() {
        let collection = AdminLevelCollection::with_policy(
            vec![level(1, "A", None), level(2, "B", None), level(1, "C", None)],
            ConflictPolicy::KeepFirst,
        )
        .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().name(), "A");
    }

    #[test]
    fn test_collection_get() {
        let collection =
            AdminLevelCollection::new(vec![level(2, "Brooklyn", None), level(1, "NYC", None)])
                .unwrap();

        assert_eq!(collection.get(2).unwrap(), &level(2, "Brooklyn", None));
        assert_eq!(
            collection.get(3).unwrap_err(),
            AddressError::AdminLevelNotFound { level: 3 }
        );
        assert!(collection.has(1));
        assert!(!collection.has(5));
    }

    #[test]
    fn test_collection_preserves_insertion_order() {
        let collection = AdminLevelCollection::new(vec![
            level(3, "C", None),
            level(1, "A", None),
            level(2, "B", None),
        ])
        .unwrap();

        let order: Vec<u32> = collection.iter().map(|l| l.level()).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(collection.first().map(|l| l.name()), Some("C"));
    }

    #[test]
    fn test_collection_slice_is_clamped() {
        let collection = AdminLevelCollection::new(vec![
            level(1, "A", None),
            level(2, "B", None),
            level(3, "C", None),
        ])
        .unwrap();

        assert_eq!(collection.slice(1, 1), &[level(2, "B", None)]);
        assert_eq!(collection.slice(2, 10).len(), 1);
        assert!(collection.slice(7, 2).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let collection = AdminLevelCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.first().is_none());
        assert!((&collection).into_iter().next().is_none());
    }

    #[test]
    fn test_from_raw_dedups_and_falls_back_to_code() {
        let entries = raw(json!([
            {"level": 1, "name": "A"},
            {"level": 1, "name": "A"},
            {"level": 2, "code": "B"}
        ]));

        let collection = AdminLevelCollection::from_raw(&entries, ConflictPolicy::Reject).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.all()[0], level(1, "A", None));
        assert_eq!(collection.all()[1], level(2, "B", Some("B")));
    }

    #[test]
    fn test_from_raw_skips_unusable_entries() {
        let entries = raw(json!([
            {"name": "NoLevel"},
            {"level": 3},
            {"level": 0, "name": "Zero"},
            {"level": null, "name": "Null"},
            {"level": "", "name": "Blank"},
            {"level": "0", "name": "ZeroString"},
            {"level": 0.0, "name": "ZeroFloat"},
            {"level": false, "name": "False"},
            {"level": 4, "name": "", "code": ""}
        ]));

        let collection = AdminLevelCollection::from_raw(&entries, ConflictPolicy::Reject).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_from_raw_surfaces_conflicting_levels() {
        let entries = raw(json!([
            {"level": 1, "name": "Manhattan"},
            {"level": 1, "name": "Brooklyn"}
        ]));

        let err = AdminLevelCollection::from_raw(&entries, ConflictPolicy::Reject).unwrap_err();
        assert_eq!(err, AddressError::DuplicateAdminLevel { level: 1 });

        let kept = AdminLevelCollection::from_raw(&entries, ConflictPolicy::KeepFirst).unwrap();
        assert_eq!(kept.get(1).unwrap().name(), "Manhattan");
    }

    #[test]
    fn test_from_raw_negative_level_fails() {
        let entries = raw(json!([{"level": -1, "name": "Below"}]));
        let err = AdminLevelCollection::from_raw(&entries, ConflictPolicy::Reject).unwrap_err();
        assert!(matches!(err, AddressError::InvalidAdminLevel { level: -1, .. }));
    }

    #[test]
    fn test_raw_level_accepts_numeric_string() {
        let entry: RawAdminLevel =
            serde_json::from_value(json!({"level": " 2 ", "name": "Brooklyn"})).unwrap();
        assert_eq!(entry.level, Some(2));

        let entry: RawAdminLevel =
            serde_json::from_value(json!({"level": 2.0, "name": "Brooklyn"})).unwrap();
        assert_eq!(entry.level, Some(2));
    }

    #[test]
    fn test_zero_level_does_not_fail_batch() {
        let entries = raw(json!([
            {"level": 0.0, "name": "Zero"},
            {"level": 2.0, "name": "Brooklyn"}
        ]));

        let collection = AdminLevelCollection::from_raw(&entries, ConflictPolicy::Reject).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(2).unwrap().name(), "Brooklyn");
    }

    #[test]
    fn test_raw_level_rejects_garbage() {
        let result: std::result::Result<RawAdminLevel, _> =
            serde_json::from_value(json!({"level": "two", "name": "Brooklyn"}));
        assert!(result.is_err());

        let result: std::result::Result<RawAdminLevel, _> =
            serde_json::from_value(json!({"level": 1.5, "name": "Brooklyn"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_keeps_code_alongside_name() {
        let entry: RawAdminLevel =
            serde_json::from_value(json!({"level": 1, "name": "Brooklyn", "code": "BK"})).unwrap();
        assert_eq!(
            entry.to_admin_level().unwrap(),
            Some(level(1, "Brooklyn", Some("BK")))
        );
    }
}
