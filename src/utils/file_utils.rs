use std::path::Path;

use serde::Serialize;

use crate::errors::AuditError;

// Helper function to sanitize URLs into filenames
pub fn sanitize_filename(url: &str) -> String {
    url.replace(|c: char| !c.is_alphanumeric() && c != '.', &'_'.to_string())
}

/// The one place report strings touch the filesystem; renderers stay pure.
pub async fn write_string(path: &Path, contents: &str) -> Result<(), AuditError> {
    tokio::fs::write(path, contents).await?;
    Ok(())
}

pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AuditError> {
    let contents = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, contents).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_alphanumerics_and_dots() {
        assert_eq!(
            sanitize_filename("https://example.com/path?q=1"),
            "https___example.com_path_q_1"
        );
    }
}
