//! Gravatar avatar URLs.

const GRAVATAR_BASE: &str = "https://secure.gravatar.com/avatar";

/// Size in pixels requested from Gravatar.
pub const AVATAR_SIZE: u32 = 800;

/// Fallback image style for addresses without a Gravatar.
pub const AVATAR_FALLBACK: &str = "robohash";

/// Lowercase hex MD5 digest of an email address.
pub fn email_digest(email: &str) -> String {
    format!("{:x}", md5::compute(email))
}

/// Build the avatar URL for an email address.
pub fn avatar_url(email: &str) -> String {
    format!(
        "{}/{}?s={}&d={}",
        GRAVATAR_BASE,
        email_digest(email),
        AVATAR_SIZE,
        AVATAR_FALLBACK
    )
}
