use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::domain::{
    resolve, resolve_price, Catalog, Choice, DocumentType, FuelOption, Region, Resolution, SelectionState,
    ShipmentDirection,
};
use crate::ui::{
    components::{
        country_search::CountrySearch,
        picker::{Picker, PickerOption},
        quote_card::QuoteCard,
    },
    theme,
};

/// Catalog handle compared by identity; the table never changes after load.
#[derive(Clone)]
pub struct SharedCatalog(pub Rc<Catalog>);

impl PartialEq for SharedCatalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn CalculatorPage(catalog: SharedCatalog) -> Element {
    let selection = use_context::<Signal<SelectionState>>();
    let catalog = catalog.0;

    let current = selection();
    let region = current.region();
    let price = resolve_price(catalog.table(), &current);

    let weight_options: Vec<PickerOption> = catalog
        .weight_labels(&current)
        .into_iter()
        .map(|label| PickerOption::new(label, label))
        .collect();

    let zone_options = domestic_zone_options(&catalog);
    let zone_value = catalog
        .domestic_zone_index(&current)
        .map(|index| index.to_string())
        .unwrap_or_default();

    let suggestions: Vec<String> = catalog
        .country_suggestions(current.search_text())
        .into_iter()
        .map(str::to_string)
        .collect();

    let on_region = {
        let catalog = catalog.clone();
        move |value: String| {
            update_selection(selection, &catalog, |st| st.set_region(Region::from_wire(&value)))
        }
    };
    let on_direction = {
        let catalog = catalog.clone();
        move |value: String| {
            update_selection(selection, &catalog, |st| {
                st.set_shipment_direction(ShipmentDirection::from_wire(&value))
            })
        }
    };
    let on_fuel = {
        let catalog = catalog.clone();
        move |value: String| {
            update_selection(selection, &catalog, |st| {
                st.set_fuel_option(FuelOption::from_wire(&value))
            })
        }
    };
    let on_document = {
        let catalog = catalog.clone();
        move |value: String| {
            update_selection(selection, &catalog, |st| {
                st.set_document_type(DocumentType::from_wire(&value))
            })
        }
    };
    let on_zone = {
        let catalog = catalog.clone();
        move |value: String| {
            let picked = value
                .parse::<usize>()
                .ok()
                .and_then(|index| catalog.domestic_zones().get(index));
            update_selection(selection, &catalog, |st| st.select_domestic_city(picked))
        }
    };
    let on_country = {
        let catalog = catalog.clone();
        move |value: String| {
            update_selection(selection, &catalog, |st| st.enter_country_text(&catalog, &value))
        }
    };
    let on_weight = {
        let catalog = catalog.clone();
        move |value: String| update_selection(selection, &catalog, |st| st.set_weight(value))
    };

    rsx! {
        div { class: "mx-auto max-w-6xl text-center",
            div { class: "mb-12 grid grid-cols-1 gap-8 md:grid-cols-3",
                Picker {
                    title: "Región".to_string(),
                    icon: theme::icon(region),
                    region,
                    value: region.table_key().to_string(),
                    options: PickerOption::from_choices::<Region>(),
                    onchange: on_region,
                }

                if region == Region::International {
                    Picker {
                        title: "Método de envío".to_string(),
                        icon: "🔁",
                        region,
                        value: wire_value(current.shipment_direction()),
                        options: PickerOption::from_choices::<ShipmentDirection>(),
                        placeholder: Some(ShipmentDirection::Unset.label().to_string()),
                        onchange: on_direction,
                    }
                    Picker {
                        title: "Opción de fuel".to_string(),
                        icon: "⛽",
                        region,
                        value: wire_value(current.fuel_option()),
                        options: PickerOption::from_choices::<FuelOption>(),
                        placeholder: Some(FuelOption::Unset.label().to_string()),
                        onchange: on_fuel,
                    }
                    Picker {
                        title: "Tipo de paquete".to_string(),
                        icon: "📄",
                        region,
                        value: wire_value(current.document_type()),
                        options: PickerOption::from_choices::<DocumentType>(),
                        placeholder: Some(DocumentType::Unset.label().to_string()),
                        onchange: on_document,
                    }
                }

                match region {
                    Region::International => rsx! {
                        div { class: "{theme::panel_border(region)} flex flex-col items-center p-4",
                            span { class: "mb-2 text-4xl", "🗺️" }
                            label { class: "{theme::label_class()}", "Zona" }
                            CountrySearch {
                                value: current.search_text().to_string(),
                                suggestions,
                                oninput: on_country,
                            }
                            if !current.selected_country_name().is_empty() {
                                p { class: "text-xs {theme::text_muted()}",
                                    "{current.selected_country_name()} · {current.zone_id()}"
                                }
                            }
                        }
                    },
                    Region::Domestic => rsx! {
                        Picker {
                            title: "Zona".to_string(),
                            icon: "🗺️",
                            region,
                            value: zone_value,
                            options: zone_options,
                            placeholder: Some("Seleccione una zona".to_string()),
                            onchange: on_zone,
                        }
                    },
                }

                Picker {
                    title: "Peso".to_string(),
                    icon: "⚖️",
                    region,
                    value: current.weight_label().to_string(),
                    options: weight_options,
                    placeholder: Some("Seleccione un peso".to_string()),
                    onchange: on_weight,
                }
            }

            if let Some(quote) = price {
                QuoteCard {
                    quote: quote.clone(),
                    region,
                    description: Some(quote_description(&current)),
                }
            } else if current.is_ready() {
                p { class: "mt-6 text-sm {theme::text_muted()}",
                    "No hay tarifa publicada para esta combinación."
                }
            }

            div { class: "mx-auto mt-12 max-w-4xl space-y-6 text-lg text-slate-300",
                p {
                    "Nuestra calculadora de envíos le permite estimar rápidamente el costo de sus envíos "
                    "nacionales e internacionales. Seleccione el tipo de envío, la zona y el peso de su "
                    "paquete para obtener una cotización instantánea."
                }
                p {
                    "Recuerde que estos precios son estimados y pueden variar según factores específicos "
                    "de cada envío. Para obtener una cotización precisa, por favor contáctenos directamente."
                }
            }
        }
    }
}

/// Applies one user edit and re-resolves the price right away.
fn update_selection(
    mut selection: Signal<SelectionState>,
    catalog: &Catalog,
    change: impl FnOnce(&mut SelectionState),
) {
    selection.with_mut(|st| {
        change(st);
        match resolve(catalog.table(), st) {
            Resolution::Priced(quote) => debug!(%quote, region = ?st.region(), "selection priced"),
            Resolution::Incomplete => debug!(region = ?st.region(), "selection incomplete"),
            Resolution::Unpriced => warn!(
                region = ?st.region(),
                zone = st.zone_id(),
                weight = st.weight_label(),
                "complete selection has no entry in the price table"
            ),
        }
    });
}

/// One option per (zone, city) pair. Values and keys are list positions, so a
/// city listed under two zones still gets distinct entries.
fn domestic_zone_options(catalog: &Catalog) -> Vec<PickerOption> {
    catalog
        .domestic_zones()
        .iter()
        .enumerate()
        .map(|(index, option)| PickerOption::new(index.to_string(), option.city.clone()))
        .collect()
}

fn wire_value<C: Choice>(choice: C) -> String {
    choice.wire_key().unwrap_or_default().to_string()
}

fn quote_description(selection: &SelectionState) -> String {
    match selection.region() {
        Region::Domestic => format!("Nacional · {}", selection.weight_label()),
        Region::International => format!(
            "{} · {} · {} · {}",
            selection.shipment_direction().label(),
            selection.selected_country_name(),
            selection.document_type().label(),
            selection.weight_label()
        ),
    }
}
