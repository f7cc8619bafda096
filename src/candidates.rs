// Candidate name list utilities
//
// Cleans and de-duplicates the known company names handed to the matcher.
// Names keep their first-seen order, which decides ties in the matcher.

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

/// Normalize a name (trim, collapse inner whitespace to one space)
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Insert a name unless it is blank or already present (case-insensitive)
///
/// Returns `true` when the name was added.
pub fn upsert_name(names: &mut Vec<String>, name: &str) -> bool {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return false;
    }

    let key = normalized.to_lowercase();
    if names.iter().any(|n| n.to_lowercase() == key) {
        return false;
    }

    names.push(normalized);
    true
}

/// Remove names (case-insensitive)
pub fn remove_names(names: &mut Vec<String>, removed: &[String]) {
    let removed_set: HashSet<String> = removed
        .iter()
        .map(|n| normalize_name(n).to_lowercase())
        .collect();
    names.retain(|n| !removed_set.contains(&n.to_lowercase()));
}

/// Parse a name list: one name per line, `#` starts a comment line
pub fn parse_names(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !upsert_name(&mut names, line) {
            tracing::debug!("skipping duplicate company name: {}", line);
        }
    }
    names
}

/// Load a name list file
pub fn load_names(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read company list {:?}: {}", path, e))?;
    let names = parse_names(&content);
    if names.is_empty() {
        tracing::warn!("company list {:?} contains no names", path);
    } else {
        tracing::info!("loaded {} company names from {:?}", names.len(), path);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Acme   Corp \t"), "Acme Corp");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_upsert_dedup() {
        let mut names = Vec::new();
        assert!(upsert_name(&mut names, "Acme Corp"));
        assert!(!upsert_name(&mut names, "ACME  corp"));
        assert!(!upsert_name(&mut names, "  "));
        assert!(upsert_name(&mut names, "Globex"));
        assert_eq!(names, vec!["Acme Corp", "Globex"]);
    }

    #[test]
    fn test_remove_names() {
        let mut names = vec![
            "Acme Corp".to_string(),
            "Globex".to_string(),
            "Initech".to_string(),
        ];
        remove_names(&mut names, &["globex".to_string(), " acme  corp".to_string()]);
        assert_eq!(names, vec!["Initech"]);
    }

    #[test]
    fn test_parse_names() {
        let content = "# clients\nAcme Corp\n\n  Globex  \nacme corp\n# old\nInitech\n";
        assert_eq!(parse_names(content), vec!["Acme Corp", "Globex", "Initech"]);
    }

    #[test]
    fn test_load_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("companies.txt");
        std::fs::write(&path, "Grayson Music Group\nAcme Corp\n").unwrap();

        let names = load_names(&path).unwrap();
        assert_eq!(names, vec!["Grayson Music Group", "Acme Corp"]);

        assert!(load_names(&dir.path().join("missing.txt")).is_err());
    }
}
