//! Provider-independent address record and its value types.

use super::AdminLevelCollection;

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Bounding box of a result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code (e.g. "US")
    pub code: Option<String>,
}

/// Read-only view shared by every address flavour.
pub trait Location {
    fn provided_by(&self) -> &str;
    fn coordinates(&self) -> Option<Coordinates>;
    fn bounds(&self) -> Option<Bounds>;
    fn street_number(&self) -> Option<&str>;
    fn street_name(&self) -> Option<&str>;
    fn sub_locality(&self) -> Option<&str>;
    fn locality(&self) -> Option<&str>;
    fn postal_code(&self) -> Option<&str>;
    fn admin_levels(&self) -> &AdminLevelCollection;
    fn country(&self) -> Option<&Country>;
    fn timezone(&self) -> Option<&str>;
}

/// Base address fields common to all providers.
///
/// Immutable: every `with_*` call returns a modified copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    provided_by: String,
    coordinates: Option<Coordinates>,
    bounds: Option<Bounds>,
    street_number: Option<String>,
    street_name: Option<String>,
    sub_locality: Option<String>,
    locality: Option<String>,
    postal_code: Option<String>,
    admin_levels: AdminLevelCollection,
    country: Option<Country>,
    timezone: Option<String>,
}

impl Address {
    pub fn new(provided_by: impl Into<String>) -> Self {
        Self {
            provided_by: provided_by.into(),
            ..Self::default()
        }
    }

    pub fn with_coordinates(&self, coordinates: Option<Coordinates>) -> Self {
        Self {
            coordinates,
            ..self.clone()
        }
    }

    pub fn with_bounds(&self, bounds: Option<Bounds>) -> Self {
        Self {
            bounds,
            ..self.clone()
        }
    }

    pub fn with_street_number(&self, street_number: Option<String>) -> Self {
        Self {
            street_number,
            ..self.clone()
        }
    }

    pub fn with_street_name(&self, street_name: Option<String>) -> Self {
        Self {
            street_name,
            ..self.clone()
        }
    }

    pub fn with_sub_locality(&self, sub_locality: Option<String>) -> Self {
        Self {
            sub_locality,
            ..self.clone()
        }
    }

    pub fn with_locality(&self, locality: Option<String>) -> Self {
        Self {
            locality,
            ..self.clone()
        }
    }

    pub fn with_postal_code(&self, postal_code: Option<String>) -> Self {
        Self {
            postal_code,
            ..self.clone()
        }
    }

    pub fn with_admin_levels(&self, admin_levels: AdminLevelCollection) -> Self {
        Self {
            admin_levels,
            ..self.clone()
        }
    }

    pub fn with_country(&self, country: Option<Country>) -> Self {
        Self {
            country,
            ..self.clone()
        }
    }

    pub fn with_timezone(&self, timezone: Option<String>) -> Self {
        Self {
            timezone,
            ..self.clone()
        }
    }
}

impl Location for Address {
    fn provided_by(&self) -> &str {
        &self.provided_by
    }

    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    fn sub_locality(&self) -> Option<&str> {
        self.sub_locality.as_deref()
    }

    fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    fn admin_levels(&self) -> &AdminLevelCollection {
        &self.admin_levels
    }

    fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }

    fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}
