pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Player name unique to this run, so live scenarios never touch real entries.
pub fn run_tag(prefix: &str) -> String {
    let ts = chrono::Utc::now().format("%Y%m%dT%H%M%S%3f");
    format!("{prefix}-{ts}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,export-csv,  history ");
        assert_eq!(parts, vec!["smoke", "export-csv", "history"]);
    }

    #[test]
    fn run_tag_keeps_prefix() {
        let tag = run_tag("qa");
        assert!(tag.starts_with("qa-20"));
    }
}
