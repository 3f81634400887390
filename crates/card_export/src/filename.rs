/// Suffix appended to every exported file
pub const FILENAME_SUFFIX: &str = "-character-sheet.png";

/// Download filename for a profile name.
///
/// Every run of whitespace becomes a single `-`, then the whole stem is
/// lowercased at once so context-dependent mappings (Greek final sigma)
/// apply. Leading and trailing runs are kept as hyphens, so an empty
/// name gives `-character-sheet.png`.
pub fn export_filename(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('-');
            }
            in_space = true;
        } else {
            stem.push(ch);
            in_space = false;
        }
    }
    let mut filename = stem.to_lowercase();
    filename.push_str(FILENAME_SUFFIX);
    filename
}
