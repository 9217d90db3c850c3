//! Comma separated lists

/// Split `value` on commas, trimming entries, dropping blank ones and
/// keeping only the first occurrence of each.
pub fn split(value: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !items.iter().any(|seen| seen == item) {
            items.push(item.to_string());
        }
    }
    items
}
