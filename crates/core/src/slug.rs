//! Slug validation and generation.
//!
//! Projects and services are addressed by slug on the public site, so a
//! slug must stay URL-safe: lowercase alphanumerics separated by single
//! hyphens. Uniqueness is enforced by the database (`uq_projects_slug`,
//! `uq_services_slug`), not here.

use crate::error::CoreError;

/// Maximum slug length, matching the column width.
pub const MAX_SLUG_LENGTH: usize = 120;

/// Validate that a slug is URL-safe.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::Validation(
            "Slug must not start, end, or repeat hyphens".into(),
        ));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug may only contain lowercase letters, digits, and hyphens".into(),
        ));
    }
    Ok(())
}

/// Derive a slug from free-form text (e.g. a project title).
///
/// Non-alphanumeric runs collapse to a single hyphen; the result is
/// truncated to [`MAX_SLUG_LENGTH`].
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug.truncate(MAX_SLUG_LENGTH);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Resolve the slug for a create or update payload.
///
/// An explicit slug is validated as-is; otherwise one is derived from
/// `fallback_text` (the title). An empty derivation (e.g. a title with no
/// alphanumerics) is a validation error.
pub fn resolve_slug(explicit: Option<&str>, fallback_text: &str) -> Result<String, CoreError> {
    match explicit {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => {
            let slug = slugify(fallback_text);
            validate_slug(&slug)?;
            Ok(slug)
        }
    }
}
