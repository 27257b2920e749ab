//! Type-path cleaning: full type paths down to display names.

/// Reduce a full type path to its simple display name.
///
/// Cleaning rules, applied in order:
/// - truncate at the first `<` (generic arguments carry no display value)
/// - keep the last `::` segment that is not a synthetic `{{...}}` artifact
/// - strip a leading `r#` raw-identifier prefix
///
/// `"app::pool::Worker"` becomes `"Worker"`, `"alloc::vec::Vec<u8>"`
/// becomes `"Vec"`, and `"app::spawn::{{closure}}"` becomes `"spawn"`.
pub fn simple_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    let segment = base
        .rsplit("::")
        .find(|segment| !segment.starts_with('{'))
        .unwrap_or(base);
    segment.strip_prefix("r#").unwrap_or(segment)
}
