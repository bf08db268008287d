pub mod country_search;
pub mod load_notices;
pub mod picker;
pub mod quote_card;
