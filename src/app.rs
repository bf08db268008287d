use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::{
    domain::{Catalog, SelectionState},
    infra::price_source::{load_price_table, PriceSource},
    ui::{
        components::load_notices::{LoadNotice, LoadNotices},
        pages::{CalculatorPage, SharedCatalog},
        shell::Shell,
    },
    util::assets,
};

#[derive(Clone)]
struct LoadedCatalog {
    catalog: SharedCatalog,
    source: PriceSource,
    notices: Vec<LoadNotice>,
}

#[component]
pub fn App() -> Element {
    let selection = use_signal(SelectionState::default);
    use_context_provider(|| selection);

    let loaded = use_hook(load_catalog);
    let initial_notices = loaded
        .as_ref()
        .map(|loaded| loaded.notices.clone())
        .unwrap_or_default();
    let notices = use_signal(move || initial_notices);

    let body = match loaded {
        Ok(LoadedCatalog { catalog, source, .. }) => rsx! {
            Shell { source_label: source.to_string(),
                LoadNotices { notices }
                CalculatorPage { catalog }
            }
        },
        Err(message) => rsx! {
            div { class: "mx-auto mt-24 max-w-md rounded-xl border border-rose-500/40 bg-rose-500/10 p-6 text-rose-100",
                h2 { class: "text-lg font-semibold", "No se pudo cargar la tabla de precios" }
                p { class: "mt-2 text-sm opacity-90", "{message}" }
            }
        },
    };

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        {body}
    }
}

/// Loads the price table once per window, derives the option lists and
/// collects anything about the load worth showing to the user.
fn load_catalog() -> Result<LoadedCatalog, String> {
    let loaded = match load_price_table() {
        Ok(loaded) => loaded,
        Err(err) => {
            error!(error = %err, "price table unavailable");
            return Err(err.to_string());
        }
    };

    let issues = loaded.table.contract_issues();
    for issue in &issues {
        warn!(%issue, "price table contract issue");
    }
    let notices = LoadNotice::collect(&loaded, &issues);

    let catalog = Catalog::new(loaded.table);
    info!(
        source = %loaded.source,
        domestic_zones = catalog.domestic_zones().len(),
        countries = catalog.countries().len(),
        notices = notices.len(),
        "price table loaded"
    );

    Ok(LoadedCatalog {
        catalog: SharedCatalog(Rc::new(catalog)),
        source: loaded.source,
        notices,
    })
}
