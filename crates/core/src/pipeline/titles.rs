//! Title list input.

use std::path::Path;

/// Whether a user-supplied input names a title list file rather than a title.
pub fn is_title_list(input: &str) -> bool {
    input.ends_with(".txt")
}

/// Split newline-delimited titles, trimming each and skipping blank lines.
pub fn parse_title_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a UTF-8 title list file.
pub async fn read_title_list(path: &Path) -> std::io::Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(parse_title_list(&contents))
}
