//! POI categories and the text attached to them.

use serde::{Deserialize, Serialize};

/// Closed set of POI categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoiCategory {
    Restaurant,
    Cafe,
    Park,
    Museum,
    Shopping,
    Hotel,
    Landmark,
    Entertainment,
    Beach,
    Sports,
}

impl PoiCategory {
    /// Every category, in a fixed order.
    pub const ALL: [PoiCategory; 10] = [
        PoiCategory::Restaurant,
        PoiCategory::Cafe,
        PoiCategory::Park,
        PoiCategory::Museum,
        PoiCategory::Shopping,
        PoiCategory::Hotel,
        PoiCategory::Landmark,
        PoiCategory::Entertainment,
        PoiCategory::Beach,
        PoiCategory::Sports,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PoiCategory::Restaurant => "Restaurant",
            PoiCategory::Cafe => "Cafe",
            PoiCategory::Park => "Park",
            PoiCategory::Museum => "Museum",
            PoiCategory::Shopping => "Shopping",
            PoiCategory::Hotel => "Hotel",
            PoiCategory::Landmark => "Landmark",
            PoiCategory::Entertainment => "Entertainment",
            PoiCategory::Beach => "Beach",
            PoiCategory::Sports => "Sports",
        }
    }

    /// Icon key for the map renderer.
    pub fn icon(&self) -> &'static str {
        match self {
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Cafe => "cafe",
            PoiCategory::Park => "park",
            PoiCategory::Museum => "museum",
            PoiCategory::Shopping => "shopping",
            PoiCategory::Hotel => "hotel",
            PoiCategory::Landmark => "landmark",
            PoiCategory::Entertainment => "entertainment",
            PoiCategory::Beach => "beach",
            PoiCategory::Sports => "sports",
        }
    }

    /// Fixed description; the same category always yields the same text.
    pub fn description(&self) -> &'static str {
        match self {
            PoiCategory::Restaurant => {
                "A lovely place to enjoy delicious meals with a great atmosphere."
            }
            PoiCategory::Cafe => "A cozy spot to relax with coffee and pastries.",
            PoiCategory::Park => {
                "A beautiful green space perfect for relaxation and outdoor activities."
            }
            PoiCategory::Museum => {
                "An interesting collection of exhibits showcasing history and culture."
            }
            PoiCategory::Shopping => "A variety of shops offering everything you need and more.",
            PoiCategory::Hotel => {
                "Comfortable accommodation with excellent amenities and service."
            }
            PoiCategory::Landmark => "A notable location with historical or cultural significance.",
            PoiCategory::Entertainment => {
                "A fun venue offering various activities and performances."
            }
            PoiCategory::Beach => "A scenic shoreline perfect for swimming and sunbathing.",
            PoiCategory::Sports => "A venue for sports activities and events.",
        }
    }
}

impl std::fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decorative words placed in front of the category label in generated names.
pub const NAME_PREFIXES: [&str; 16] = [
    "Grand", "Royal", "Golden", "Blue", "Green", "Red", "Silver", "Crystal", "Sunny", "Happy",
    "Cozy", "Elegant", "Modern", "Classic", "Vintage", "Urban",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_unique() {
        let labels: HashSet<_> = PoiCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), PoiCategory::ALL.len());
    }

    #[test]
    fn test_icon_is_lowercase_label() {
        for c in PoiCategory::ALL {
            assert_eq!(c.icon(), c.label().to_lowercase());
        }
    }

    #[test]
    fn test_description_stable() {
        assert_eq!(
            PoiCategory::Cafe.description(),
            PoiCategory::Cafe.description()
        );
        assert_ne!(
            PoiCategory::Cafe.description(),
            PoiCategory::Park.description()
        );
    }
}
