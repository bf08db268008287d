//! Region-aware style helpers shared by all UI components.
//!
//! Domestic shipments use the sky palette, international ones emerald.

use crate::domain::Region;

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn page_background() -> &'static str {
    "min-h-screen bg-gradient-to-r from-slate-900 to-slate-950 text-slate-100 font-sans"
}

pub fn header_class(region: Region) -> &'static str {
    match region {
        Region::Domestic => "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Region::International => {
            "border-b border-emerald-900/40 bg-slate-950/90 backdrop-blur px-6 py-4"
        }
    }
}

pub fn panel_border(region: Region) -> &'static str {
    match region {
        Region::Domestic => "rounded-xl border border-sky-800/50 bg-slate-900/40",
        Region::International => "rounded-xl border border-emerald-800/50 bg-slate-900/40",
    }
}

pub fn quote_panel(region: Region) -> &'static str {
    match region {
        Region::Domestic => {
            "quote-enter mx-auto mt-6 max-w-md rounded-xl border border-sky-500/40 bg-sky-500/15 p-4 text-sky-100"
        }
        Region::International => {
            "quote-enter mx-auto mt-6 max-w-md rounded-xl border border-emerald-500/40 bg-emerald-500/15 p-4 text-emerald-100"
        }
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(region: Region) -> &'static str {
    match region {
        Region::Domestic => {
            "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500"
        }
        Region::International => {
            "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500"
        }
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn title_class(region: Region) -> &'static str {
    match region {
        Region::Domestic => "text-xl font-semibold tracking-tight text-sky-200",
        Region::International => "text-xl font-semibold tracking-tight text-emerald-200",
    }
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn icon(region: Region) -> &'static str {
    match region {
        Region::Domestic => "🚚",
        Region::International => "🌎",
    }
}
