use std::{fmt, io};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use super::selection::Region;

/// Identifier of a shipping zone (e.g. `zona1`).
pub type ZoneId = String;

/// Weight bracket label as it appears in the table (e.g. `0.5kg`).
pub type WeightLabel = String;

/// Prices for one zone, keyed by weight label in document order.
pub type RateCard = IndexMap<WeightLabel, Quote>;

/// Zone whose weight keys stand in for every domestic zone.
pub const REPRESENTATIVE_ZONE: &str = "zona1";

#[derive(Debug, Error)]
pub enum PriceTableError {
    #[error("failed to read price table: {0}")]
    Io(#[from] io::Error),
    #[error("invalid price table: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("price table defines no zones")]
    Empty,
    #[error("embedded price table {0} is missing")]
    MissingAsset(String),
}

/// A single table entry. Most entries are amounts; some carriers publish
/// free-form notes such as "Consultar" instead of a figure.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quote {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Amount(value) => write!(f, "${value:.2}"),
            Quote::Text(note) => f.write_str(note),
        }
    }
}

#[derive(Deserialize)]
struct PriceDocument {
    envios: PriceTable,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PriceTable {
    #[serde(rename = "nacional")]
    pub domestic: DomesticTable,
    #[serde(rename = "internacional")]
    pub international: InternationalTable,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DomesticTable {
    /// Zone to comma-separated city list.
    #[serde(rename = "zonas")]
    pub zones: IndexMap<ZoneId, String>,
    #[serde(rename = "precios")]
    pub prices: IndexMap<ZoneId, RateCard>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CountryEntry {
    pub name: String,
}

/// Direction → fuel option → document type → zone → rate card.
pub type InternationalPrices =
    IndexMap<String, IndexMap<String, IndexMap<String, IndexMap<ZoneId, RateCard>>>>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InternationalTable {
    #[serde(rename = "zonas")]
    pub zones: IndexMap<ZoneId, Vec<CountryEntry>>,
    #[serde(rename = "precios")]
    pub prices: InternationalPrices,
}

/// Wire keys addressing one international rate sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetKey<'a> {
    pub direction: &'a str,
    pub fuel: &'a str,
    pub document: &'a str,
}

impl fmt::Display for SheetKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.direction, self.fuel, self.document)
    }
}

impl PriceTable {
    /// Parses the `{"envios": {...}}` document shipped with the app.
    pub fn from_json(input: &str) -> Result<Self, PriceTableError> {
        let document: PriceDocument = serde_json::from_str(input)?;
        let table = document.envios;
        if table.domestic.zones.is_empty() && table.international.zones.is_empty() {
            return Err(PriceTableError::Empty);
        }
        Ok(table)
    }

    pub fn domestic_rate(&self, zone: &str, weight: &str) -> Option<&Quote> {
        self.domestic.prices.get(zone)?.get(weight)
    }

    pub fn international_rate(&self, sheet: SheetKey<'_>, zone: &str, weight: &str) -> Option<&Quote> {
        self.international
            .prices
            .get(sheet.direction)?
            .get(sheet.fuel)?
            .get(sheet.document)?
            .get(zone)?
            .get(weight)
    }

    /// Weight keys of the representative domestic zone, falling back to the
    /// first priced zone when the representative is absent.
    pub fn domestic_weight_labels(&self) -> Vec<WeightLabel> {
        self.domestic
            .prices
            .get(REPRESENTATIVE_ZONE)
            .or_else(|| self.domestic.prices.values().next())
            .map(|card| card.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Iterates every international rate sheet with its zone map.
    pub fn international_sheets(
        &self,
    ) -> impl Iterator<Item = (SheetKey<'_>, &IndexMap<ZoneId, RateCard>)> {
        self.international
            .prices
            .iter()
            .flat_map(|(direction, by_fuel)| {
                by_fuel.iter().flat_map(move |(fuel, by_document)| {
                    by_document.iter().map(move |(document, zones)| {
                        (
                            SheetKey {
                                direction,
                                fuel,
                                document,
                            },
                            zones,
                        )
                    })
                })
            })
    }

    /// Lists every place where the table breaks its own zone/weight contract.
    /// None of these stop the calculator; affected selections simply never
    /// produce a price.
    pub fn contract_issues(&self) -> Vec<ContractIssue> {
        let mut issues = Vec::new();

        let domestic = &self.domestic;
        for zone in domestic.prices.keys() {
            if !domestic.zones.contains_key(zone) {
                issues.push(ContractIssue::UnknownPriceZone {
                    region: Region::Domestic,
                    zone: zone.clone(),
                    sheet: None,
                });
            }
        }
        for zone in domestic.zones.keys() {
            if !domestic.prices.contains_key(zone) {
                issues.push(ContractIssue::UnpricedZone {
                    region: Region::Domestic,
                    zone: zone.clone(),
                    sheet: None,
                });
            }
        }

        let expected = self.domestic_weight_labels();
        for (zone, card) in &domestic.prices {
            let same_keys =
                card.len() == expected.len() && expected.iter().all(|label| card.contains_key(label));
            if !same_keys {
                issues.push(ContractIssue::WeightKeyMismatch {
                    zone: zone.clone(),
                    expected: expected.clone(),
                    found: card.keys().cloned().collect(),
                });
            }
        }

        let international = &self.international;
        for (sheet, zones) in self.international_sheets() {
            for zone in zones.keys() {
                if !international.zones.contains_key(zone) {
                    issues.push(ContractIssue::UnknownPriceZone {
                        region: Region::International,
                        zone: zone.clone(),
                        sheet: Some(sheet.to_string()),
                    });
                }
            }
            for zone in international.zones.keys() {
                if !zones.contains_key(zone) {
                    issues.push(ContractIssue::UnpricedZone {
                        region: Region::International,
                        zone: zone.clone(),
                        sheet: Some(sheet.to_string()),
                    });
                }
            }
        }

        issues
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContractIssue {
    UnknownPriceZone {
        region: Region,
        zone: ZoneId,
        sheet: Option<String>,
    },
    UnpricedZone {
        region: Region,
        zone: ZoneId,
        sheet: Option<String>,
    },
    WeightKeyMismatch {
        zone: ZoneId,
        expected: Vec<WeightLabel>,
        found: Vec<WeightLabel>,
    },
}

impl fmt::Display for ContractIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractIssue::UnknownPriceZone { region, zone, sheet } => {
                write!(f, "{} prices reference unknown zone {zone}", region.table_key())?;
                if let Some(sheet) = sheet {
                    write!(f, " (sheet {sheet})")?;
                }
                Ok(())
            }
            ContractIssue::UnpricedZone { region, zone, sheet } => {
                write!(f, "{} zone {zone} has no prices", region.table_key())?;
                if let Some(sheet) = sheet {
                    write!(f, " in sheet {sheet}")?;
                }
                Ok(())
            }
            ContractIssue::WeightKeyMismatch {
                zone,
                expected,
                found,
            } => write!(
                f,
                "domestic zone {zone} weights [{}] differ from [{}]",
                found.join(", "),
                expected.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{sample_table, SAMPLE_JSON};

    #[test]
    fn parses_sample_document() {
        let table = PriceTable::from_json(SAMPLE_JSON).expect("sample parses");
        assert_eq!(table.domestic.zones.len(), 2);
        assert_eq!(table.international.zones.len(), 2);
        assert_eq!(
            table.domestic_rate("zona2", "5kg"),
            Some(&Quote::Amount(210.0))
        );
    }

    #[test]
    fn preserves_document_order() {
        let table = sample_table();
        let zones: Vec<_> = table.domestic.zones.keys().cloned().collect();
        assert_eq!(zones, vec!["zona1", "zona2"]);
        assert_eq!(table.domestic_weight_labels(), vec!["1kg", "5kg", "10kg"]);
    }

    #[test]
    fn international_lookup_walks_all_levels() {
        let table = sample_table();
        let sheet = SheetKey {
            direction: "exportacion",
            fuel: "sin_fuel",
            document: "no_dox",
        };
        assert_eq!(
            table.international_rate(sheet, "zona2", "25kg"),
            Some(&Quote::Text("Consultar".to_string()))
        );
        assert_eq!(table.international_rate(sheet, "zona9", "25kg"), None);
    }

    #[test]
    fn rejects_table_without_zones() {
        let err = PriceTable::from_json(
            r#"{"envios":{"nacional":{"zonas":{},"precios":{}},"internacional":{"zonas":{},"precios":{}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PriceTableError::Empty));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PriceTable::from_json(r#"{"envios": 3}"#).unwrap_err();
        assert!(matches!(err, PriceTableError::Decode(_)));
    }

    #[test]
    fn quote_formats_amounts_with_two_decimals() {
        assert_eq!(Quote::Amount(150.0).to_string(), "$150.00");
        assert_eq!(Quote::Amount(99.456).to_string(), "$99.46");
        assert_eq!(Quote::Text("Consultar".into()).to_string(), "Consultar");
    }

    #[test]
    fn sample_table_honours_contract() {
        assert!(sample_table().contract_issues().is_empty());
    }

    #[test]
    fn reports_contract_breaks() {
        let mut table = sample_table();
        table.domestic.zones.insert("zona3".into(), "Mérida".into());
        if let Some(card) = table.domestic.prices.get_mut("zona2") {
            card.shift_remove("10kg");
        }
        if let Some(zones) = table
            .international
            .prices
            .get_mut("importacion")
            .and_then(|by_fuel| by_fuel.get_mut("con_fuel"))
            .and_then(|by_doc| by_doc.get_mut("dox"))
        {
            zones.insert("zona7".into(), RateCard::new());
        }

        let issues = table.contract_issues();
        assert!(issues.contains(&ContractIssue::UnpricedZone {
            region: Region::Domestic,
            zone: "zona3".into(),
            sheet: None,
        }));
        assert!(issues.iter().any(|issue| matches!(
            issue,
            ContractIssue::WeightKeyMismatch { zone, .. } if zone == "zona2"
        )));
        assert!(issues.contains(&ContractIssue::UnknownPriceZone {
            region: Region::International,
            zone: "zona7".into(),
            sheet: Some("importacion/con_fuel/dox".into()),
        }));
    }
}
