//! Plant record types for the atlas dataset.

use serde::Deserialize;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns whether both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single plant in the catalog.
///
/// Records are read-only after load. The id is unique across the dataset
/// and stable across sessions; it is the join key between the list, the
/// map markers, and the favorites set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: String,
    pub name_en: String,
    #[serde(default)]
    pub name_local: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default, rename = "type")]
    pub plant_type: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub habit: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
}

impl PlantRecord {
    /// Returns the plant's coordinate when both components are present
    /// and valid. Plants without one are simply not mappable.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let coord = Coordinate::new(self.lat?, self.lng?);
        coord.is_valid().then_some(coord)
    }

    /// Display label combining the English and localized names.
    pub fn display_label(&self) -> String {
        match &self.name_local {
            Some(local) => format!("{} ({})", self.name_en, local),
            None => self.name_en.clone(),
        }
    }

    /// Scientific-name and type caption shown under the entry title.
    pub fn caption(&self) -> String {
        format!(
            "{} · {}",
            self.scientific_name.as_deref().unwrap_or(""),
            self.plant_type.as_deref().unwrap_or("")
        )
    }

    /// The case-folded text the search term is matched against: every
    /// name and descriptive field joined, missing fields empty.
    pub fn search_haystack(&self) -> String {
        [
            Some(self.name_en.as_str()),
            self.name_local.as_deref(),
            self.scientific_name.as_deref(),
            self.plant_type.as_deref(),
            self.habit.as_deref(),
            self.habitat.as_deref(),
            self.description.as_deref(),
        ]
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let json = r#"{"id":"aspen-trembling","nameEn":"Trembling Aspen"}"#;
        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(plant.id, "aspen-trembling");
        assert_eq!(plant.name_en, "Trembling Aspen");
        assert!(plant.seasons.is_empty());
        assert!(plant.coordinate().is_none());
    }

    #[test]
    fn test_coordinate_requires_both_components() {
        let json = r#"{"id":"a","nameEn":"A","lat":42.28}"#;
        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        assert!(plant.coordinate().is_none());
    }

    #[test]
    fn test_coordinate_out_of_range_is_invalid() {
        let json = r#"{"id":"a","nameEn":"A","lat":95.0,"lng":-83.74}"#;
        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        assert!(plant.coordinate().is_none());
    }

    #[test]
    fn test_display_label_with_local_name() {
        let json = r#"{"id":"a","nameEn":"Aspen","nameLocal":"Tremble"}"#;
        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(plant.display_label(), "Aspen (Tremble)");
    }

    #[test]
    fn test_search_haystack_joins_fields() {
        let json = r#"{"id":"a","nameEn":"Aspen","habitat":"Wetland Margin"}"#;
        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        let haystack = plant.search_haystack();
        assert!(haystack.contains("aspen"));
        assert!(haystack.contains("wetland margin"));
    }
}
