//! Résumé file lookup
//!
//! Résumés live in one folder per position, `<base_dir>/<position>/`, and a
//! file belongs to an applicant when its name contains the full name.
//! Entries are scanned in file-name order.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, warn};

/// How multiple directory entries decide the result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// The first matching file wins; no file only when nothing matches
    #[default]
    FirstMatch,
    /// Legacy behavior: every scanned file overwrites the result with its
    /// path on a match and with nothing otherwise, so a path survives only
    /// when the last scanned file matches
    LastEntry,
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first-match" => Ok(MatchPolicy::FirstMatch),
            "last" | "last-entry" => Ok(MatchPolicy::LastEntry),
            other => Err(format!(
                "unknown résumé match policy '{}' (expected 'first' or 'last')",
                other
            )),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::FirstMatch => write!(f, "first"),
            MatchPolicy::LastEntry => write!(f, "last"),
        }
    }
}

/// Find the résumé of `full_name` among the files of `base_dir/position`
///
/// A missing or unreadable folder yields `None`.
pub fn locate(
    position: &str,
    full_name: &str,
    base_dir: &Path,
    policy: MatchPolicy,
) -> Option<PathBuf> {
    if full_name.is_empty() {
        return None;
    }

    let folder = base_dir.join(position);
    let entries = match fs::read_dir(&folder) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() == ErrorKind::NotFound {
                debug!("No résumé folder at {}", folder.display());
            } else {
                warn!("Cannot scan résumé folder {}: {}", folder.display(), err);
            }
            return None;
        }
    };

    let mut files: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let is_match = |name: &str| name.contains(full_name);

    let found = match policy {
        MatchPolicy::FirstMatch => files
            .into_iter()
            .find(|(name, _)| is_match(name))
            .map(|(_, path)| path),
        MatchPolicy::LastEntry => {
            let mut found = None;
            for (name, path) in files {
                found = if is_match(&name) { Some(path) } else { None };
            }
            found
        }
    };

    debug!(
        "Résumé for '{}' in {}: {}",
        full_name,
        folder.display(),
        found
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none found".to_string())
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree(files: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("Engineer");
        fs::create_dir(&folder).unwrap();
        for name in files {
            fs::write(folder.join(name), b"cv").unwrap();
        }
        dir
    }

    #[test]
    fn test_missing_folder_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            locate("Engineer", "Ivanov Ivan", dir.path(), MatchPolicy::FirstMatch),
            None
        );
    }

    #[test]
    fn test_first_match_survives_later_misses() {
        let dir = tree(&["Ivanov Ivan.pdf", "Petrov Petr.pdf"]);
        let found = locate("Engineer", "Ivanov Ivan", dir.path(), MatchPolicy::FirstMatch);
        assert_eq!(found, Some(dir.path().join("Engineer").join("Ivanov Ivan.pdf")));
    }

    #[test]
    fn test_first_match_picks_earliest_name() {
        let dir = tree(&["b Ivanov Ivan.pdf", "a Ivanov Ivan.doc"]);
        let found = locate("Engineer", "Ivanov Ivan", dir.path(), MatchPolicy::FirstMatch);
        assert_eq!(found, Some(dir.path().join("Engineer").join("a Ivanov Ivan.doc")));
    }

    #[test]
    fn test_last_entry_drops_earlier_match() {
        let dir = tree(&["Ivanov Ivan.pdf", "Petrov Petr.pdf"]);
        assert_eq!(
            locate("Engineer", "Ivanov Ivan", dir.path(), MatchPolicy::LastEntry),
            None
        );
    }

    #[test]
    fn test_last_entry_keeps_match_when_last() {
        let dir = tree(&["Petrov Petr.pdf", "Sidorov Ivanov Ivan.pdf"]);
        let found = locate("Engineer", "Ivanov Ivan", dir.path(), MatchPolicy::LastEntry);
        assert_eq!(
            found,
            Some(dir.path().join("Engineer").join("Sidorov Ivanov Ivan.pdf"))
        );
    }

    #[test]
    fn test_subdirectories_are_ignored() {
        let dir = tree(&[]);
        fs::create_dir(dir.path().join("Engineer").join("Ivanov Ivan")).unwrap();
        assert_eq!(
            locate("Engineer", "Ivanov Ivan", dir.path(), MatchPolicy::FirstMatch),
            None
        );
    }

    #[test]
    fn test_empty_name_never_matches() {
        let dir = tree(&["anything.pdf"]);
        assert_eq!(locate("Engineer", "", dir.path(), MatchPolicy::FirstMatch), None);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("first".parse::<MatchPolicy>().unwrap(), MatchPolicy::FirstMatch);
        assert_eq!(" LAST ".parse::<MatchPolicy>().unwrap(), MatchPolicy::LastEntry);
        assert!("newest".parse::<MatchPolicy>().is_err());
    }
}
