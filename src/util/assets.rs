use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Default price table, relative to `assets/`.
pub const PRICES_JSON: &str = "prices.json";
const MAIN_CSS_FILE: &str = "main.css";
const FAVICON_FILE: &str = "favicon.svg";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Contents of `assets/main.css`; empty if the stylesheet was not bundled.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| asset_text(MAIN_CSS_FILE).unwrap_or_default())
        .as_str()
}

/// The bundled SVG favicon as a `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            asset_text(FAVICON_FILE)
                .map(|svg| svg_data_uri(&svg))
                .unwrap_or_default()
        })
        .as_str()
}

/// Raw bytes of a bundled file, named relative to `assets/`.
pub fn asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(name).map(|file| file.data)
}

fn asset_text(name: &str) -> Option<String> {
    asset_bytes(name).and_then(|bytes| String::from_utf8(bytes.into_owned()).ok())
}

// SVG is text, so only the characters that break a URI need escaping.
fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::from("data:image/svg+xml,");
    for ch in svg.trim().chars() {
        match ch {
            '%' => uri.push_str("%25"),
            '#' => uri.push_str("%23"),
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            '"' => uri.push('\''),
            '\n' | '\r' => uri.push(' '),
            other => uri.push(other),
        }
    }
    uri
}
