//! Deploy-time site artifacts: the runtime `config.json` and the
//! Apache `.htaccess` served next to the built app.

use serde::{Deserialize, Serialize};

/// Prefix of the deployed revision string.
pub const REVISION_PREFIX: &str = "cheno-";

/// Runtime site configuration, written at deploy time and fetched by
/// the app on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name.
    pub name: String,
    /// `cheno-<short git hash>`.
    pub revision: String,
    /// Public domain.
    pub domain: String,
}

impl SiteConfig {
    /// Default site name.
    pub const DEFAULT_NAME: &'static str = "Cheno";

    /// Default public domain.
    pub const DEFAULT_DOMAIN: &'static str = "cheno.fr";

    /// Build a config for the given short commit hash. Surrounding
    /// whitespace (such as the newline `git` prints) is trimmed.
    #[must_use]
    pub fn new(name: &str, short_hash: &str, domain: &str) -> Self {
        Self {
            name: name.to_owned(),
            revision: format!("{REVISION_PREFIX}{}", short_hash.trim()),
            domain: domain.to_owned(),
        }
    }

    /// Serialize with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Server configuration: force HTTPS, fall back to `index.php` for any
/// path that is not a real file or directory, and set cache expiry per
/// content type.
pub const HTACCESS: &str = r#"RewriteEngine On
RewriteCond %{HTTPS} off
RewriteRule ^(.*)$ https://%{HTTP_HOST}%{REQUEST_URI} [L,R=301]
RewriteBase /
RewriteCond %{REQUEST_FILENAME} !-d
RewriteCond %{REQUEST_FILENAME} !-f
RewriteRule ^(.+)$ index.php [QSA,L]

## EXPIRES HEADER CACHING ##

ExpiresActive On
ExpiresByType image/jpg "access 1 year"
ExpiresByType image/jpeg "access 1 year"
ExpiresByType image/gif "access 1 year"
ExpiresByType image/png "access 1 year"
ExpiresByType image/svg "access 1 year"
ExpiresByType text/css "access 1 month"
ExpiresByType application/pdf "access 1 month"
ExpiresByType application/javascript "access 1 month"
ExpiresByType application/x-javascript "access 1 month"
ExpiresByType application/x-shockwave-flash "access 1 month"
ExpiresByType image/x-icon "access 1 year"
ExpiresDefault "access 2 days"

## EXPIRES HEADER CACHING ##
"#;
