use crate::contract::DIGEST_ARTIFACT_SUFFIX;

/// Derives the digest artifact key for a source object key.
///
/// The derivation is plain concatenation with the literal `.sha256` suffix;
/// no other naming scheme is produced.
pub fn digest_artifact_key(source_key: &str) -> String {
    format!("{source_key}{DIGEST_ARTIFACT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_suffix_to_plain_key() {
        assert_eq!(digest_artifact_key("report.csv"), "report.csv.sha256");
    }

    #[test]
    fn appends_suffix_to_key_with_dots() {
        assert_eq!(
            digest_artifact_key("archive.tar.gz"),
            "archive.tar.gz.sha256"
        );
    }

    #[test]
    fn appends_suffix_to_key_with_slashes() {
        assert_eq!(
            digest_artifact_key("backups/2026/02/dump.sql"),
            "backups/2026/02/dump.sql.sha256"
        );
    }

    #[test]
    fn appends_suffix_even_when_key_already_carries_one() {
        assert_eq!(
            digest_artifact_key("report.csv.sha256"),
            "report.csv.sha256.sha256"
        );
    }
}
