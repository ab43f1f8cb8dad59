//! Service registry
//!
//! Maps service identifier strings to statically known provider kinds. The
//! mapping is a compile-time `match`, so a new provider cannot be registered
//! without also extending [`GeocoderService`].

use std::fmt;
use std::str::FromStr;

use crate::error::GeocodeError;

/// The geocoding services this crate knows how to identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeocoderService {
    ArcGis,
    AzureMaps,
    Baidu,
    BanFrance,
    Bing,
    GeocodeEarth,
    GoogleV3,
    Here,
    MapBox,
    Nominatim,
    OpenCage,
    OpenMapQuest,
    Pelias,
    Photon,
    TomTom,
    Yandex,
}

impl GeocoderService {
    /// Canonical identifier, as accepted by [`get_geocoder_for_service`].
    pub fn name(self) -> &'static str {
        match self {
            Self::ArcGis => "arcgis",
            Self::AzureMaps => "azure",
            Self::Baidu => "baidu",
            Self::BanFrance => "banfrance",
            Self::Bing => "bing",
            Self::GeocodeEarth => "geocodeearth",
            Self::GoogleV3 => "googlev3",
            Self::Here => "here",
            Self::MapBox => "mapbox",
            Self::Nominatim => "nominatim",
            Self::OpenCage => "opencage",
            Self::OpenMapQuest => "openmapquest",
            Self::Pelias => "pelias",
            Self::Photon => "photon",
            Self::TomTom => "tomtom",
            Self::Yandex => "yandex",
        }
    }
}

impl fmt::Display for GeocoderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeocoderService {
    type Err = GeocodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_geocoder_for_service(s)
    }
}

/// Look up the service kind for an identifier.
///
/// Matching is case- and format-insensitive: ASCII case is folded and `-`,
/// `_`, `.` and whitespace separators are ignored, so `"GoogleV3"` and
/// `"google-v3"` both resolve. Unknown identifiers, including the empty
/// string, fail with [`GeocodeError::ServiceNotFound`].
pub fn get_geocoder_for_service(name: &str) -> Result<GeocoderService, GeocodeError> {
    let normalized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match normalized.as_str() {
        "arcgis" => Ok(GeocoderService::ArcGis),
        "azure" | "azuremaps" => Ok(GeocoderService::AzureMaps),
        "baidu" => Ok(GeocoderService::Baidu),
        "banfrance" => Ok(GeocoderService::BanFrance),
        "bing" => Ok(GeocoderService::Bing),
        "geocodeearth" => Ok(GeocoderService::GeocodeEarth),
        "google" | "googlev3" => Ok(GeocoderService::GoogleV3),
        "here" => Ok(GeocoderService::Here),
        "mapbox" => Ok(GeocoderService::MapBox),
        "nominatim" => Ok(GeocoderService::Nominatim),
        "opencage" => Ok(GeocoderService::OpenCage),
        "openmapquest" => Ok(GeocoderService::OpenMapQuest),
        "pelias" => Ok(GeocoderService::Pelias),
        "photon" => Ok(GeocoderService::Photon),
        "tomtom" => Ok(GeocoderService::TomTom),
        "yandex" => Ok(GeocoderService::Yandex),
        _ => Err(GeocodeError::ServiceNotFound(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_aliases_resolve_to_same_service() {
        assert_eq!(
            get_geocoder_for_service("google").unwrap(),
            GeocoderService::GoogleV3
        );
        assert_eq!(
            get_geocoder_for_service("googlev3").unwrap(),
            GeocoderService::GoogleV3
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            get_geocoder_for_service("GoogleV3").unwrap(),
            GeocoderService::GoogleV3
        );
        assert_eq!(
            get_geocoder_for_service("NOMINATIM").unwrap(),
            GeocoderService::Nominatim
        );
    }

    #[test]
    fn test_lookup_ignores_separators() {
        assert_eq!(
            get_geocoder_for_service("google-v3").unwrap(),
            GeocoderService::GoogleV3
        );
        assert_eq!(
            get_geocoder_for_service("open_map_quest").unwrap(),
            GeocoderService::OpenMapQuest
        );
    }

    #[test]
    fn test_empty_string_is_not_found() {
        let err = get_geocoder_for_service("").unwrap_err();
        assert!(matches!(err, GeocodeError::ServiceNotFound(_)));
    }

    #[test]
    fn test_unknown_service_is_not_found() {
        let err = get_geocoder_for_service("pigeon-post").unwrap_err();
        assert!(matches!(err, GeocodeError::ServiceNotFound(ref name) if name == "pigeon-post"));
    }

    #[test]
    fn test_from_str_delegates_to_lookup() {
        let service: GeocoderService = "bing".parse().unwrap();
        assert_eq!(service, GeocoderService::Bing);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for service in [
            GeocoderService::ArcGis,
            GeocoderService::AzureMaps,
            GeocoderService::Baidu,
            GeocoderService::BanFrance,
            GeocoderService::Bing,
            GeocoderService::GeocodeEarth,
            GeocoderService::GoogleV3,
            GeocoderService::Here,
            GeocoderService::MapBox,
            GeocoderService::Nominatim,
            GeocoderService::OpenCage,
            GeocoderService::OpenMapQuest,
            GeocoderService::Pelias,
            GeocoderService::Photon,
            GeocoderService::TomTom,
            GeocoderService::Yandex,
        ] {
            assert_eq!(get_geocoder_for_service(service.name()).unwrap(), service);
        }
    }
}
