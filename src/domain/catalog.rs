use super::price_table::{PriceTable, WeightLabel, ZoneId};
use super::selection::{DocumentType, Region, SelectionState};
use super::text::normalize;

/// Weight brackets offered for document envelopes abroad.
pub const DOCUMENT_WEIGHTS: [&str; 3] = ["0.5kg", "1kg", "2kg"];

/// Weight brackets offered for parcels abroad (also used before a document
/// type is chosen).
pub const PARCEL_WEIGHTS: [&str; 6] = ["1kg", "5kg", "10kg", "15kg", "20kg", "25kg"];

pub fn international_weight_labels(document: DocumentType) -> &'static [&'static str] {
    match document {
        DocumentType::Document => &DOCUMENT_WEIGHTS,
        DocumentType::NonDocument | DocumentType::Unset => &PARCEL_WEIGHTS,
    }
}

/// One entry of the domestic zone picker. Zones list several cities, so the
/// same zone appears once per city.
#[derive(Clone, Debug, PartialEq)]
pub struct DomesticZoneOption {
    pub zone_id: ZoneId,
    pub city: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountryOption {
    pub zone_id: ZoneId,
    pub name: String,
    folded: String,
}

impl CountryOption {
    fn new(zone_id: ZoneId, name: String) -> Self {
        let folded = normalize(&name);
        Self {
            zone_id,
            name,
            folded,
        }
    }
}

/// The price table plus every option list that depends only on it, built
/// once at load.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    table: PriceTable,
    domestic_zones: Vec<DomesticZoneOption>,
    countries: Vec<CountryOption>,
    domestic_weights: Vec<WeightLabel>,
}

impl Catalog {
    pub fn new(table: PriceTable) -> Self {
        let domestic_zones = table
            .domestic
            .zones
            .iter()
            .flat_map(|(zone_id, cities)| {
                cities
                    .split(',')
                    .map(str::trim)
                    .filter(|city| !city.is_empty())
                    .map(move |city| DomesticZoneOption {
                        zone_id: zone_id.clone(),
                        city: city.to_string(),
                    })
            })
            .collect();

        let countries = table
            .international
            .zones
            .iter()
            .flat_map(|(zone_id, entries)| {
                entries
                    .iter()
                    .map(move |entry| CountryOption::new(zone_id.clone(), entry.name.clone()))
            })
            .collect();

        let domestic_weights = table.domestic_weight_labels();

        Self {
            table,
            domestic_zones,
            countries,
            domestic_weights,
        }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    pub fn domestic_zones(&self) -> &[DomesticZoneOption] {
        &self.domestic_zones
    }

    pub fn countries(&self) -> &[CountryOption] {
        &self.countries
    }

    /// Countries whose folded name contains the folded search text, in table
    /// order. Blank search text returns the whole list.
    pub fn filter_countries(&self, search: &str) -> Vec<&CountryOption> {
        let needle = normalize(search);
        self.countries
            .iter()
            .filter(|country| country.folded.contains(&needle))
            .collect()
    }

    /// Distinct names for the search box suggestions. A name listed under
    /// more than one zone is offered once.
    pub fn country_suggestions(&self, search: &str) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for country in self.filter_countries(search) {
            if !names.contains(&country.name.as_str()) {
                names.push(&country.name);
            }
        }
        names
    }

    /// Position of the selection's city in `domestic_zones`, if one is picked.
    pub fn domestic_zone_index(&self, selection: &SelectionState) -> Option<usize> {
        self.domestic_zones.iter().position(|option| {
            option.zone_id == selection.zone_id() && option.city == selection.selected_city()
        })
    }

    /// Exact match on folded names; the first entry wins when a name repeats.
    pub fn find_country(&self, raw: &str) -> Option<&CountryOption> {
        let needle = normalize(raw);
        self.countries.iter().find(|country| country.folded == needle)
    }

    /// Weight labels valid for the selection's region and document type.
    pub fn weight_labels(&self, selection: &SelectionState) -> Vec<&str> {
        match selection.region() {
            Region::Domestic => self.domestic_weights.iter().map(String::as_str).collect(),
            Region::International => international_weight_labels(selection.document_type()).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_catalog;

    fn names(countries: &[&CountryOption]) -> Vec<String> {
        countries.iter().map(|country| country.name.clone()).collect()
    }

    #[test]
    fn flattens_domestic_zones_per_city() {
        let catalog = sample_catalog();
        let pairs: Vec<_> = catalog
            .domestic_zones()
            .iter()
            .map(|option| (option.zone_id.as_str(), option.city.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("zona1", "Ciudad de México"),
                ("zona1", "Toluca"),
                ("zona1", "Puebla"),
                ("zona2", "Monterrey"),
                ("zona2", "Guadalajara"),
            ]
        );
    }

    #[test]
    fn flattens_countries_in_zone_order() {
        let catalog = sample_catalog();
        let pairs: Vec<_> = catalog
            .countries()
            .iter()
            .map(|country| (country.zone_id.as_str(), country.name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("zona1", "Estados Unidos"),
                ("zona1", "Canadá"),
                ("zona2", "Argentina"),
                ("zona2", "Perú"),
                ("zona2", "Panamá"),
            ]
        );
    }

    #[test]
    fn filter_keeps_only_folded_substring_matches() {
        let catalog = sample_catalog();
        assert_eq!(names(&catalog.filter_countries("arg")), vec!["Argentina"]);
        assert_eq!(names(&catalog.filter_countries("ANA")), vec!["Canadá", "Panamá"]);
        assert_eq!(catalog.filter_countries("").len(), catalog.countries().len());
        assert!(catalog.filter_countries("zzz").is_empty());
    }

    fn catalog_with_repeats() -> Catalog {
        let table = PriceTable::from_json(
            r#"{ "envios": {
                "nacional": {
                    "zonas": { "zona1": "Toluca, Puebla", "zona2": "Toluca" },
                    "precios": {}
                },
                "internacional": {
                    "zonas": {
                        "zona1": [{ "name": "Chile" }, { "name": "Perú" }],
                        "zona2": [{ "name": "Chile" }]
                    },
                    "precios": {}
                }
            } }"#,
        )
        .expect("table parses");
        Catalog::new(table)
    }

    #[test]
    fn suggestions_list_each_name_once() {
        let catalog = catalog_with_repeats();
        assert_eq!(catalog.filter_countries("").len(), 3);
        assert_eq!(catalog.country_suggestions(""), vec!["Chile", "Perú"]);
        assert_eq!(catalog.country_suggestions("chi"), vec!["Chile"]);
        assert_eq!(
            catalog.find_country("chile").map(|c| c.zone_id.as_str()),
            Some("zona1")
        );
    }

    #[test]
    fn domestic_zone_index_tells_shared_city_names_apart() {
        let catalog = catalog_with_repeats();
        let mut selection = SelectionState::default();
        assert_eq!(catalog.domestic_zone_index(&selection), None);

        selection.select_domestic_city(catalog.domestic_zones().get(2));
        assert_eq!(selection.zone_id(), "zona2");
        assert_eq!(catalog.domestic_zone_index(&selection), Some(2));

        selection.select_domestic_city(catalog.domestic_zones().get(1));
        assert_eq!(catalog.domestic_zone_index(&selection), Some(1));
    }

    #[test]
    fn find_country_requires_whole_name() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.find_country("CANADA").map(|c| c.zone_id.as_str()),
            Some("zona1")
        );
        assert!(catalog.find_country("Cana").is_none());
    }

    #[test]
    fn domestic_weights_ignore_selected_zone() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();
        let baseline: Vec<String> = catalog
            .weight_labels(&selection)
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(baseline, vec!["1kg", "5kg", "10kg"]);
        for option in catalog.domestic_zones() {
            selection.set_zone(option.zone_id.clone());
            assert_eq!(catalog.weight_labels(&selection), baseline);
        }
    }

    #[test]
    fn international_weights_follow_document_type() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::default();
        selection.set_region(Region::International);
        assert_eq!(catalog.weight_labels(&selection), PARCEL_WEIGHTS.to_vec());
        selection.set_document_type(DocumentType::Document);
        assert_eq!(catalog.weight_labels(&selection), vec!["0.5kg", "1kg", "2kg"]);
        selection.set_document_type(DocumentType::NonDocument);
        assert_eq!(
            catalog.weight_labels(&selection),
            vec!["1kg", "5kg", "10kg", "15kg", "20kg", "25kg"]
        );
    }
}
