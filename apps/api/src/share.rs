use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("Create a custom link name before sharing")]
    MissingSlug,
}

/// Public URL for a slug: `<base>/u/<slug>`. The slug is used exactly as
/// stored so the link resolves to the same row.
pub fn share_link(base_url: &str, slug: &str) -> Result<String, ShareError> {
    if slug.trim().is_empty() {
        return Err(ShareError::MissingSlug);
    }
    Ok(format!("{}/u/{slug}", base_url.trim_end_matches('/')))
}
