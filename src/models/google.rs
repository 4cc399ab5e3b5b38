//! Google Maps geocoding result.

use super::address::{Address, Bounds, Coordinates, Country, Location};
use super::admin::{AdminLevelCollection, ConflictPolicy, RawAdminLevel};
use crate::error::Result;

/// A single Google Maps geocoding result.
///
/// Wraps the provider-independent [`Address`] and adds the Google specific
/// address components. Instances are immutable; each `with_*` method returns a
/// new address that differs from the receiver in exactly one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoogleAddress {
    base: Address,

    /// Place ID, see https://developers.google.com/places/place-id
    id: Option<String>,

    /// ROOFTOP, RANGE_INTERPOLATED, GEOMETRIC_CENTER or APPROXIMATE
    location_type: Option<String>,

    /// Result types in provider order (e.g. ["street_address"])
    result_type: Vec<String>,

    formatted_address: Option<String>,
    street_address: Option<String>,
    intersection: Option<String>,
    postal_code_suffix: Option<String>,
    political: Option<String>,
    colloquial_area: Option<String>,
    ward: Option<String>,
    neighborhood: Option<String>,
    premise: Option<String>,
    subpremise: Option<String>,
    natural_feature: Option<String>,
    airport: Option<String>,
    park: Option<String>,
    point_of_interest: Option<String>,
    establishment: Option<String>,

    sub_locality_levels: AdminLevelCollection,

    partial_match: bool,
}

impl GoogleAddress {
    pub fn new(base: Address) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn base(&self) -> &Address {
        &self.base
    }

    pub fn with_base(&self, base: Address) -> Self {
        Self {
            base,
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn with_id(&self, id: Option<String>) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    pub fn location_type(&self) -> Option<&str> {
        self.location_type.as_deref()
    }

    pub fn with_location_type(&self, location_type: Option<String>) -> Self {
        Self {
            location_type,
            ..self.clone()
        }
    }

    pub fn result_type(&self) -> &[String] {
        &self.result_type
    }

    pub fn has_result_type(&self, tag: &str) -> bool {
        self.result_type.iter().any(|t| t == tag)
    }

    pub fn with_result_type(&self, result_type: Vec<String>) -> Self {
        Self {
            result_type,
            ..self.clone()
        }
    }

    pub fn formatted_address(&self) -> Option<&str> {
        self.formatted_address.as_deref()
    }

    pub fn with_formatted_address(&self, formatted_address: Option<String>) -> Self {
        Self {
            formatted_address,
            ..self.clone()
        }
    }

    pub fn street_address(&self) -> Option<&str> {
        self.street_address.as_deref()
    }

    pub fn with_street_address(&self, street_address: Option<String>) -> Self {
        Self {
            street_address,
            ..self.clone()
        }
    }

    pub fn intersection(&self) -> Option<&str> {
        self.intersection.as_deref()
    }

    pub fn with_intersection(&self, intersection: Option<String>) -> Self {
        Self {
            intersection,
            ..self.clone()
        }
    }

    pub fn postal_code_suffix(&self) -> Option<&str> {
        self.postal_code_suffix.as_deref()
    }

    pub fn with_postal_code_suffix(&self, postal_code_suffix: Option<String>) -> Self {
        Self {
            postal_code_suffix,
            ..self.clone()
        }
    }

    pub fn political(&self) -> Option<&str> {
        self.political.as_deref()
    }

    pub fn with_political(&self, political: Option<String>) -> Self {
        Self {
            political,
            ..self.clone()
        }
    }

    pub fn colloquial_area(&self) -> Option<&str> {
        self.colloquial_area.as_deref()
    }

    pub fn with_colloquial_area(&self, colloquial_area: Option<String>) -> Self {
        Self {
            colloquial_area,
            ..self.clone()
        }
    }

    pub fn ward(&self) -> Option<&str> {
        self.ward.as_deref()
    }

    pub fn with_ward(&self, ward: Option<String>) -> Self {
        Self {
            ward,
            ..self.clone()
        }
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.neighborhood.as_deref()
    }

    pub fn with_neighborhood(&self, neighborhood: Option<String>) -> Self {
        Self {
            neighborhood,
            ..self.clone()
        }
    }

    pub fn premise(&self) -> Option<&str> {
        self.premise.as_deref()
    }

    pub fn with_premise(&self, premise: Option<String>) -> Self {
        Self {
            premise,
            ..self.clone()
        }
    }

    pub fn subpremise(&self) -> Option<&str> {
        self.subpremise.as_deref()
    }

    pub fn with_subpremise(&self, subpremise: Option<String>) -> Self {
        Self {
            subpremise,
            ..self.clone()
        }
    }

    pub fn natural_feature(&self) -> Option<&str> {
        self.natural_feature.as_deref()
    }

    pub fn with_natural_feature(&self, natural_feature: Option<String>) -> Self {
        Self {
            natural_feature,
            ..self.clone()
        }
    }

    pub fn airport(&self) -> Option<&str> {
        self.airport.as_deref()
    }

    pub fn with_airport(&self, airport: Option<String>) -> Self {
        Self {
            airport,
            ..self.clone()
        }
    }

    pub fn park(&self) -> Option<&str> {
        self.park.as_deref()
    }

    pub fn with_park(&self, park: Option<String>) -> Self {
        Self {
            park,
            ..self.clone()
        }
    }

    pub fn point_of_interest(&self) -> Option<&str> {
        self.point_of_interest.as_deref()
    }

    pub fn with_point_of_interest(&self, point_of_interest: Option<String>) -> Self {
        Self {
            point_of_interest,
            ..self.clone()
        }
    }

    pub fn establishment(&self) -> Option<&str> {
        self.establishment.as_deref()
    }

    pub fn with_establishment(&self, establishment: Option<String>) -> Self {
        Self {
            establishment,
            ..self.clone()
        }
    }

    pub fn sub_locality_levels(&self) -> &AdminLevelCollection {
        &self.sub_locality_levels
    }

    /// Replace the sub-locality levels with ones built from raw provider
    /// entries, rejecting distinct entries that share a level.
    ///
    /// Unusable entries are dropped silently; see
    /// [`AdminLevelCollection::from_raw`].
    pub fn with_sub_locality_levels(&self, raw: &[RawAdminLevel]) -> Result<Self> {
        self.with_sub_locality_levels_with_policy(raw, ConflictPolicy::default())
    }

    pub fn with_sub_locality_levels_with_policy(
        &self,
        raw: &[RawAdminLevel],
        policy: ConflictPolicy,
    ) -> Result<Self> {
        let sub_locality_levels = AdminLevelCollection::from_raw(raw, policy)?;
        Ok(self.with_sub_locality_collection(sub_locality_levels))
    }

    pub fn with_sub_locality_collection(&self, sub_locality_levels: AdminLevelCollection) -> Self {
        Self {
            sub_locality_levels,
            ..self.clone()
        }
    }

    /// True when Google could only approximately match the query.
    pub fn is_partial_match(&self) -> bool {
        self.partial_match
    }

    pub fn with_partial_match(&self, partial_match: bool) -> Self {
        Self {
            partial_match,
            ..self.clone()
        }
    }
}

impl Location for GoogleAddress {
    fn provided_by(&self) -> &str {
        self.base.provided_by()
    }

    fn coordinates(&self) -> Option<Coordinates> {
        self.base.coordinates()
    }

    fn bounds(&self) -> Option<Bounds> {
        self.base.bounds()
    }

    fn street_number(&self) -> Option<&str> {
        self.base.street_number()
    }

    fn street_name(&self) -> Option<&str> {
        self.base.street_name()
    }

    fn sub_locality(&self) -> Option<&str> {
        self.base.sub_locality()
    }

    fn locality(&self) -> Option<&str> {
        self.base.locality()
    }

    fn postal_code(&self) -> Option<&str> {
        self.base.postal_code()
    }

    fn admin_levels(&self) -> &AdminLevelCollection {
        self.base.admin_levels()
    }

    fn country(&self) -> Option<&Country> {
        self.base.country()
    }

    fn timezone(&self) -> Option<&str> {
        self.base.timezone()
    }
}
