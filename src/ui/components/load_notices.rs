use dioxus::prelude::*;

use crate::domain::price_table::ContractIssue;
use crate::infra::price_source::{override_path, LoadedTable};

/// Issues listed in full before the rest collapse into a count.
const LISTED_ISSUES: usize = 3;

/// Something about the loaded price table the user should know before
/// trusting a quote.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadNotice {
    /// An override file exists but could not be used; the bundled table is in
    /// effect.
    OverrideIgnored { path: String, reason: String },
    /// Combinations the table cannot price, one line per issue.
    IncompleteTable { issues: Vec<String> },
}

impl LoadNotice {
    pub fn collect(loaded: &LoadedTable, issues: &[ContractIssue]) -> Vec<Self> {
        let mut notices = Vec::new();
        if let Some(err) = &loaded.override_error {
            notices.push(LoadNotice::OverrideIgnored {
                path: override_path()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default(),
                reason: err.to_string(),
            });
        }
        if !issues.is_empty() {
            notices.push(LoadNotice::IncompleteTable {
                issues: issues.iter().map(ToString::to_string).collect(),
            });
        }
        notices
    }

    pub fn headline(&self) -> String {
        match self {
            LoadNotice::OverrideIgnored { .. } => {
                "Se ignoró el archivo de tarifas personalizado; se usa la tabla incluida.".to_string()
            }
            LoadNotice::IncompleteTable { issues } => format!(
                "La tabla de tarifas tiene {} combinaciones incompletas.",
                issues.len()
            ),
        }
    }

    pub fn details(&self) -> Vec<String> {
        match self {
            LoadNotice::OverrideIgnored { path, reason } if path.is_empty() => vec![reason.clone()],
            LoadNotice::OverrideIgnored { path, reason } => vec![path.clone(), reason.clone()],
            LoadNotice::IncompleteTable { issues } => {
                let mut lines: Vec<String> = issues.iter().take(LISTED_ISSUES).cloned().collect();
                if issues.len() > LISTED_ISSUES {
                    lines.push(format!("… y {} más", issues.len() - LISTED_ISSUES));
                }
                lines
            }
        }
    }

    fn theme(&self) -> &'static str {
        match self {
            LoadNotice::OverrideIgnored { .. } => "border-amber-500/40 bg-amber-500/10 text-amber-100",
            LoadNotice::IncompleteTable { .. } => "border-sky-500/40 bg-sky-500/10 text-sky-100",
        }
    }
}

/// Dismissable banners for problems found while loading the table.
#[component]
pub fn LoadNotices(notices: Signal<Vec<LoadNotice>>) -> Element {
    let entries = notices();
    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        ul { class: "mx-auto mb-8 max-w-4xl space-y-3 text-left",
            for (index, notice) in entries.into_iter().enumerate() {
                li {
                    key: "{index}",
                    class: "flex items-start gap-3 rounded-xl border px-4 py-3 {notice.theme()}",
                    span { class: "text-lg", "⚠️" }
                    div { class: "flex-1",
                        p { class: "text-sm font-medium", "{notice.headline()}" }
                        for line in notice.details() {
                            p { class: "text-xs opacity-80", "{line}" }
                        }
                    }
                    button {
                        class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                        onclick: move |_| {
                            let mut notices = notices;
                            notices.with_mut(|items| {
                                if index < items.len() {
                                    items.remove(index);
                                }
                            });
                        },
                        "Cerrar"
                    }
                }
            }
        }
    }
}
