use super::price_table::{PriceTable, Quote};
use super::selection::{Readiness, SelectionState};

/// Outcome of looking a selection up in the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution<'t> {
    /// The form is still being filled in.
    Incomplete,
    Priced(&'t Quote),
    /// Every key is chosen but the table has no entry for the combination.
    Unpriced,
}

impl<'t> Resolution<'t> {
    pub fn price(&self) -> Option<&'t Quote> {
        match self {
            Resolution::Priced(quote) => Some(quote),
            Resolution::Incomplete | Resolution::Unpriced => None,
        }
    }
}

pub fn resolve<'t>(table: &'t PriceTable, selection: &SelectionState) -> Resolution<'t> {
    let found = match selection.readiness() {
        Readiness::Incomplete => return Resolution::Incomplete,
        Readiness::Domestic { zone, weight } => table.domestic_rate(zone, weight),
        Readiness::International {
            sheet,
            zone,
            weight,
        } => table.international_rate(sheet, zone, weight),
    };

    found.map_or(Resolution::Unpriced, Resolution::Priced)
}

/// Price for the selection, or `None` until the selection is complete.
pub fn resolve_price<'t>(table: &'t PriceTable, selection: &SelectionState) -> Option<&'t Quote> {
    resolve(table, selection).price()
}
