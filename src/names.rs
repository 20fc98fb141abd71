//! Name handling shared by every module.
//!
//! Identifiers coming from the data service are lowercase and hyphenated
//! (`"leaf-stone"`, `"mr-mime"`). Keys are compared after [`normalize_key`]:
//! two names are the same creature/type/item iff their normalized keys are
//! equal.

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Key-equality normalization: trimmed and lowercased.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"mossy-rock"` -> `"Mossy rock"`.
pub fn display_name(raw: &str) -> String {
    capitalize(&raw.trim().replace('-', " "))
}

/// `"leaf-stone"` -> `"Leaf Stone"`. Item names are shown in title case to
/// match how the games print them.
pub fn item_name(raw: &str) -> String {
    raw.trim()
        .split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numeric id at the tail of a resource URL (`".../pokemon-species/25/"` -> 25).
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

pub fn sprite_url(id: u32) -> String {
    format!("{SPRITE_BASE}/{id}.png")
}

/// Sprite for the resource behind `url`, or an empty reference when the URL
/// carries no id.
pub fn sprite_url_for_resource(url: &str) -> String {
    id_from_url(url).map(sprite_url).unwrap_or_default()
}
