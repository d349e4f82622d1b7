/// Builds a page title from a base title and an optional per-page part.
///
/// Without a page part the base title is returned alone; with one, the two
/// are joined with " | ".
pub fn page_title(base: &str, page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{} | {}", base, page),
        None => base.to_string(),
    }
}
