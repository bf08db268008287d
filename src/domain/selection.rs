use super::catalog::{international_weight_labels, Catalog, DomesticZoneOption};
use super::price_table::SheetKey;

/// A fixed set of picker values with their table keys and display labels.
///
/// `wire_key` is `None` for the "not chosen yet" variant.
pub trait Choice: Copy + Default + PartialEq + 'static {
    /// Every selectable variant, in display order.
    const CHOICES: &'static [Self];

    fn wire_key(&self) -> Option<&'static str>;
    fn label(&self) -> &'static str;

    /// Maps a picker value back to a variant; unknown values become the default.
    fn from_wire(value: &str) -> Self {
        Self::CHOICES
            .iter()
            .copied()
            .find(|choice| choice.wire_key() == Some(value))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    Domestic,
    International,
}

impl Region {
    pub fn table_key(&self) -> &'static str {
        match self {
            Region::Domestic => "nacional",
            Region::International => "internacional",
        }
    }
}

impl Choice for Region {
    const CHOICES: &'static [Self] = &[Region::Domestic, Region::International];

    fn wire_key(&self) -> Option<&'static str> {
        Some(self.table_key())
    }

    fn label(&self) -> &'static str {
        match self {
            Region::Domestic => "Nacional",
            Region::International => "Internacional",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShipmentDirection {
    #[default]
    Unset,
    Import,
    Export,
}

impl Choice for ShipmentDirection {
    const CHOICES: &'static [Self] = &[ShipmentDirection::Import, ShipmentDirection::Export];

    fn wire_key(&self) -> Option<&'static str> {
        match self {
            ShipmentDirection::Unset => None,
            ShipmentDirection::Import => Some("importacion"),
            ShipmentDirection::Export => Some("exportacion"),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ShipmentDirection::Unset => "Seleccione",
            ShipmentDirection::Import => "Importación",
            ShipmentDirection::Export => "Exportación",
        }
    }
}

/// Which fuel-surcharge sheet to price from.
///
/// Labels name the sheet keys directly: `con_fuel` is "Con fuel" and
/// `sin_fuel` is "Sin fuel". Older forms over the same dataset showed "No"
/// for `con_fuel` and "Si" for `sin_fuel`; the keys themselves are unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FuelOption {
    #[default]
    Unset,
    WithFuel,
    WithoutFuel,
}

impl Choice for FuelOption {
    const CHOICES: &'static [Self] = &[FuelOption::WithFuel, FuelOption::WithoutFuel];

    fn wire_key(&self) -> Option<&'static str> {
        match self {
            FuelOption::Unset => None,
            FuelOption::WithFuel => Some("con_fuel"),
            FuelOption::WithoutFuel => Some("sin_fuel"),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FuelOption::Unset => "Seleccione",
            FuelOption::WithFuel => "Con fuel",
            FuelOption::WithoutFuel => "Sin fuel",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentType {
    #[default]
    Unset,
    Document,
    NonDocument,
}

impl Choice for DocumentType {
    const CHOICES: &'static [Self] = &[DocumentType::Document, DocumentType::NonDocument];

    fn wire_key(&self) -> Option<&'static str> {
        match self {
            DocumentType::Unset => None,
            DocumentType::Document => Some("dox"),
            DocumentType::NonDocument => Some("no_dox"),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DocumentType::Unset => "Seleccione",
            DocumentType::Document => "Documento",
            DocumentType::NonDocument => "No Documento",
        }
    }
}

/// Everything the user has picked so far. Empty strings mean "not chosen".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    region: Region,
    shipment_direction: ShipmentDirection,
    fuel_option: FuelOption,
    document_type: DocumentType,
    zone_id: String,
    selected_city: String,
    selected_country_name: String,
    weight_label: String,
    search_text: String,
}

/// Whether a selection carries every key its region needs for a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness<'a> {
    Incomplete,
    Domestic {
        zone: &'a str,
        weight: &'a str,
    },
    International {
        sheet: SheetKey<'static>,
        zone: &'a str,
        weight: &'a str,
    },
}

impl SelectionState {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn shipment_direction(&self) -> ShipmentDirection {
        self.shipment_direction
    }

    pub fn fuel_option(&self) -> FuelOption {
        self.fuel_option
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// City picked in the domestic zone list; several cities share a zone.
    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    pub fn selected_country_name(&self) -> &str {
        &self.selected_country_name
    }

    pub fn weight_label(&self) -> &str {
        &self.weight_label
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Switches region and wipes every other field, so nothing picked for one
    /// region can reach a lookup in the other.
    pub fn set_region(&mut self, region: Region) {
        *self = Self {
            region,
            ..Self::default()
        };
    }

    pub fn set_shipment_direction(&mut self, direction: ShipmentDirection) {
        self.shipment_direction = direction;
    }

    pub fn set_fuel_option(&mut self, fuel: FuelOption) {
        self.fuel_option = fuel;
    }

    /// Document type decides the international weight brackets; a weight
    /// that is not offered for the new type is dropped.
    pub fn set_document_type(&mut self, document: DocumentType) {
        self.document_type = document;
        if self.region == Region::International
            && !international_weight_labels(document).contains(&self.weight_label.as_str())
        {
            self.weight_label.clear();
        }
    }

    /// Sets the zone directly. An empty value clears it. Any picked city is
    /// forgotten since it may not belong to the new zone.
    pub fn set_zone(&mut self, zone_id: impl Into<String>) {
        self.zone_id = zone_id.into();
        self.selected_city.clear();
    }

    /// Domestic zone picker entry; `None` clears zone and city.
    pub fn select_domestic_city(&mut self, option: Option<&DomesticZoneOption>) {
        match option {
            Some(option) => {
                self.set_zone(option.zone_id.clone());
                self.selected_city = option.city.clone();
            }
            None => self.set_zone(""),
        }
    }

    pub fn set_weight(&mut self, weight_label: impl Into<String>) {
        self.weight_label = weight_label.into();
    }

    /// Country search box input. An exact (accent and case insensitive) match
    /// selects that country and its zone; anything else only updates the
    /// search text and leaves the current zone alone.
    pub fn enter_country_text(&mut self, catalog: &Catalog, raw: &str) {
        match catalog.find_country(raw) {
            Some(country) => {
                self.selected_country_name = country.name.clone();
                self.zone_id = country.zone_id.clone();
                self.search_text = country.name.clone();
            }
            None => self.search_text = raw.to_string(),
        }
    }

    pub fn readiness(&self) -> Readiness<'_> {
        if self.zone_id.is_empty() || self.weight_label.is_empty() {
            return Readiness::Incomplete;
        }

        match self.region {
            Region::Domestic => Readiness::Domestic {
                zone: &self.zone_id,
                weight: &self.weight_label,
            },
            Region::International => {
                let (Some(direction), Some(fuel), Some(document)) = (
                    self.shipment_direction.wire_key(),
                    self.fuel_option.wire_key(),
                    self.document_type.wire_key(),
                ) else {
                    return Readiness::Incomplete;
                };
                Readiness::International {
                    sheet: SheetKey {
                        direction,
                        fuel,
                        document,
                    },
                    zone: &self.zone_id,
                    weight: &self.weight_label,
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self.readiness(), Readiness::Incomplete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_catalog;
    use proptest::prelude::*;

    fn international_ready() -> SelectionState {
        let catalog = sample_catalog();
        let mut state = SelectionState::default();
        state.set_region(Region::International);
        state.set_shipment_direction(ShipmentDirection::Import);
        state.set_fuel_option(FuelOption::WithFuel);
        state.set_document_type(DocumentType::NonDocument);
        state.enter_country_text(&catalog, "Argentina");
        state.set_weight("5kg");
        state
    }

    #[test]
    fn defaults_to_empty_domestic_selection() {
        let state = SelectionState::default();
        assert_eq!(state.region(), Region::Domestic);
        assert_eq!(state.readiness(), Readiness::Incomplete);
    }

    #[test]
    fn choices_round_trip_through_wire_keys() {
        assert_eq!(ShipmentDirection::from_wire("exportacion"), ShipmentDirection::Export);
        assert_eq!(FuelOption::from_wire("sin_fuel"), FuelOption::WithoutFuel);
        assert_eq!(DocumentType::from_wire("dox"), DocumentType::Document);
        assert_eq!(DocumentType::from_wire(""), DocumentType::Unset);
        assert_eq!(Region::from_wire("internacional"), Region::International);
        assert_eq!(Region::from_wire("bogus"), Region::Domestic);
        assert_eq!(FuelOption::Unset.wire_key(), None);
    }

    #[test]
    fn domestic_ready_needs_zone_and_weight() {
        let mut state = SelectionState::default();
        state.set_zone("zona1");
        assert!(!state.is_ready());
        state.set_weight("5kg");
        assert_eq!(
            state.readiness(),
            Readiness::Domestic {
                zone: "zona1",
                weight: "5kg"
            }
        );
        state.set_zone("");
        assert!(!state.is_ready());
    }

    #[test]
    fn international_ready_needs_all_five_keys() {
        let state = international_ready();
        assert!(state.is_ready());

        let mut missing_fuel = state.clone();
        missing_fuel.set_fuel_option(FuelOption::Unset);
        assert!(!missing_fuel.is_ready());

        let mut missing_direction = state.clone();
        missing_direction.set_shipment_direction(ShipmentDirection::Unset);
        assert!(!missing_direction.is_ready());

        let mut missing_document = state.clone();
        missing_document.set_document_type(DocumentType::Unset);
        assert_eq!(missing_document.weight_label(), "5kg");
        assert_eq!(missing_document.readiness(), Readiness::Incomplete);
    }

    #[test]
    fn fuel_labels_follow_sheet_keys() {
        assert_eq!(FuelOption::from_wire("con_fuel").label(), "Con fuel");
        assert_eq!(FuelOption::from_wire("sin_fuel").label(), "Sin fuel");
    }

    #[test]
    fn picking_a_city_sets_its_zone() {
        let catalog = sample_catalog();
        let puebla = catalog
            .domestic_zones()
            .iter()
            .find(|option| option.city == "Puebla");
        let mut state = SelectionState::default();
        state.select_domestic_city(puebla);
        assert_eq!(state.zone_id(), "zona1");
        assert_eq!(state.selected_city(), "Puebla");

        state.set_zone("zona2");
        assert_eq!(state.selected_city(), "");

        state.select_domestic_city(puebla);
        state.select_domestic_city(None);
        assert_eq!(state.zone_id(), "");
        assert_eq!(state.selected_city(), "");
    }

    #[test]
    fn region_switch_resets_everything_else() {
        let mut state = international_ready();
        state.set_region(Region::Domestic);
        assert_eq!(state, SelectionState::default());

        let mut state = international_ready();
        state.set_region(Region::International);
        assert_eq!(state.zone_id(), "");
        assert_eq!(state.search_text(), "");
        assert_eq!(state.shipment_direction(), ShipmentDirection::Unset);
        assert_eq!(state.region(), Region::International);
    }

    #[test]
    fn exact_country_match_selects_zone() {
        let catalog = sample_catalog();
        let mut state = SelectionState::default();
        state.set_region(Region::International);
        state.enter_country_text(&catalog, "peru");
        assert_eq!(state.zone_id(), "zona2");
        assert_eq!(state.selected_country_name(), "Perú");
        assert_eq!(state.search_text(), "Perú");
    }

    #[test]
    fn partial_country_text_keeps_previous_zone() {
        let catalog = sample_catalog();
        let mut state = SelectionState::default();
        state.set_region(Region::International);
        state.enter_country_text(&catalog, "Canadá");
        state.enter_country_text(&catalog, "Arg");
        assert_eq!(state.zone_id(), "zona1");
        assert_eq!(state.selected_country_name(), "Canadá");
        assert_eq!(state.search_text(), "Arg");
    }

    #[test]
    fn document_switch_drops_weight_outside_new_brackets() {
        let mut state = international_ready();
        state.set_document_type(DocumentType::Document);
        assert_eq!(state.weight_label(), "");

        let mut state = international_ready();
        state.set_weight("1kg");
        state.set_document_type(DocumentType::Document);
        assert_eq!(state.weight_label(), "1kg");
    }

    // Values the setters actually recognise, so every field gets populated.
    const OP_VALUES: &[&str] = &[
        "importacion",
        "exportacion",
        "con_fuel",
        "sin_fuel",
        "dox",
        "no_dox",
        "zona1",
        "zona2",
        "1kg",
        "5kg",
        "0.5kg",
        "Argentina",
        "peru",
        "CANADÁ",
        "Arg",
        "",
    ];

    fn mutation_strategy() -> impl Strategy<Value = Vec<(u8, &'static str)>> {
        prop::collection::vec((0u8..7, prop::sample::select(OP_VALUES)), 0..16)
    }

    proptest! {
        #[test]
        fn region_switch_always_clears_fields(ops in mutation_strategy(), to_international in any::<bool>()) {
            let catalog = sample_catalog();
            let mut state = SelectionState::default();
            for (op, value) in &ops {
                match op {
                    0 => state.set_shipment_direction(ShipmentDirection::from_wire(value)),
                    1 => state.set_fuel_option(FuelOption::from_wire(value)),
                    2 => state.set_document_type(DocumentType::from_wire(value)),
                    3 => state.set_zone(*value),
                    4 => state.set_weight(*value),
                    5 => state.select_domestic_city(
                        catalog.domestic_zones().iter().find(|option| option.zone_id == *value),
                    ),
                    _ => state.enter_country_text(&catalog, value),
                }
            }
            let region = if to_international { Region::International } else { Region::Domestic };
            state.set_region(region);
            let mut expected = SelectionState::default();
            expected.region = region;
            prop_assert_eq!(state, expected);
        }
    }

    #[test]
    fn op_values_reach_every_field() {
        let catalog = sample_catalog();
        let mut state = SelectionState::default();
        state.set_region(Region::International);
        state.set_shipment_direction(ShipmentDirection::from_wire(OP_VALUES[0]));
        state.enter_country_text(&catalog, OP_VALUES[11]);
        assert_eq!(state.shipment_direction(), ShipmentDirection::Import);
        assert_eq!(state.selected_country_name(), "Argentina");
    }
}
