use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

/// Reads the site list, one trimmed entry per line.
///
/// Blank lines are kept as empty strings so the entry count always matches
/// the line count; they fail later as malformed sites.
pub fn load_sites(path: &Path) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(action = "start", component = "site_loading", file_path = ?path, "Loading site list");

    let bytes = fs::read(path).with_context(|| format!("Failed to read site list {:?}", path))?;
    let sites: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(|line| line.trim().to_string())
        .collect();

    info!(
        action = "complete",
        component = "site_loading",
        site_count = sites.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded site list"
    );
    Ok(sites)
}

/// A manual correction of one list entry, written as `INDEX=HOST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOverride {
    pub index: usize,
    pub site: String,
}

impl FromStr for SiteOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, site) = s
            .split_once('=')
            .ok_or_else(|| format!("expected INDEX=HOST, got '{}'", s))?;
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid index '{}': {}", index, e))?;
        let site = site.trim();
        if site.is_empty() {
            return Err(format!("missing host for index {}", index));
        }
        Ok(SiteOverride {
            index,
            site: site.to_string(),
        })
    }
}

pub fn apply_overrides(sites: &mut [String], overrides: &[SiteOverride]) -> Result<()> {
    for entry in overrides {
        let len = sites.len();
        let slot = sites.get_mut(entry.index).with_context(|| {
            format!(
                "Override index {} is out of range for a list of {} sites",
                entry.index, len
            )
        })?;
        info!(action = "override", component = "site_loading", index = entry.index, from = %slot, to = %entry.site, "Replacing site entry");
        *slot = entry.site.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sitecheck-sites-{}-{}.txt",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_sites_trims_and_keeps_order() {
        let path = write_temp("order", "b.example  \n\ta.example\r\nhttp://c.example/path\n");
        let sites = load_sites(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(sites, ["b.example", "a.example", "http://c.example/path"]);
    }

    #[test]
    fn test_load_sites_keeps_blank_lines_and_duplicates() {
        let path = write_temp("blank", "a.example\n\n   \na.example\n");
        let sites = load_sites(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(sites, ["a.example", "", "", "a.example"]);
    }

    #[test]
    fn test_load_sites_empty_file() {
        let path = write_temp("empty", "");
        let sites = load_sites(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(sites.is_empty());
    }

    #[test]
    fn test_load_sites_missing_file_is_error() {
        let path = std::env::temp_dir().join("sitecheck-definitely-missing.txt");
        let err = load_sites(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read site list"));
    }

    #[test]
    fn test_parse_override() {
        let entry: SiteOverride = "0=ydabt.cf".parse().unwrap();
        assert_eq!(
            entry,
            SiteOverride {
                index: 0,
                site: "ydabt.cf".to_string()
            }
        );

        assert!("ydabt.cf".parse::<SiteOverride>().is_err());
        assert!("x=ydabt.cf".parse::<SiteOverride>().is_err());
        assert!("3=".parse::<SiteOverride>().is_err());
    }

    #[test]
    fn test_apply_overrides_replaces_only_named_index() {
        let mut sites = vec!["junk".to_string(), "a.example".to_string()];
        apply_overrides(&mut sites, &["0=ydabt.cf".parse().unwrap()]).unwrap();
        assert_eq!(sites, ["ydabt.cf", "a.example"]);
    }

    #[test]
    fn test_apply_overrides_out_of_range() {
        let mut sites = vec!["a.example".to_string()];
        assert!(apply_overrides(&mut sites, &["1=b.example".parse().unwrap()]).is_err());

        let mut empty: Vec<String> = Vec::new();
        assert!(apply_overrides(&mut empty, &["0=b.example".parse().unwrap()]).is_err());
    }
}
