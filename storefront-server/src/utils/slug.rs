//! Slug generation for blog posts

/// Lowercase ASCII alphanumerics joined by single hyphens.
///
/// Whitespace and `-` runs separate words; every other character is dropped,
/// so `"Don't Stop"` becomes `dont-stop`. No leading or trailing hyphen.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    slug
}
