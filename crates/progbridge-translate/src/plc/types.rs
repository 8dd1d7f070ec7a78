//! Data type mapping from Omron to Inovance type names.

/// Known base types and their target spelling.
const TYPE_MAP: &[(&str, &str)] = &[
    ("BOOL", "BOOL"),
    ("INT", "INT"),
    ("DINT", "DINT"),
    ("UINT", "UINT"),
    ("UDINT", "UDINT"),
    ("REAL", "REAL"),
    ("LREAL", "LREAL"),
    ("STRING", "STRING(255)"),
    ("BYTE", "BYTE"),
    ("WORD", "WORD"),
    ("DWORD", "DWORD"),
    ("TIME", "TIME"),
];

/// Map a declared type to the target vocabulary.
///
/// Lookup uses the base name only (any `(n)` suffix is ignored) and ignores
/// case. Unknown types are returned unchanged.
pub fn map_type(ty: &str) -> String {
    let base = ty.split('(').next().unwrap_or(ty).trim();
    TYPE_MAP
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(base))
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| ty.to_string())
}
