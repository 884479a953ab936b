//! File-name cleaning
//!
//! Rewrites absolute paths under one of the well-known roots into a short
//! symbolic form:
//!
//! ```text
//! /var/www/site/app/Controllers/Home.rs  ->  APPPATH/Controllers/Home.rs
//! ```

use crate::runtime::RuntimeContext;

pub const APP_MARKER: &str = "APPPATH/";
pub const FRAMEWORK_MARKER: &str = "BASEPATH/";
pub const PUBLIC_MARKER: &str = "FCPATH/";

/// Replace the first matching root prefix with its marker
///
/// Roots are checked in the order app, framework, public. A root is
/// compared with a trailing separator so `/srv/app` does not match
/// `/srv/application/...`.
pub fn clean_file_name(path: &str, ctx: &dyn RuntimeContext) -> String {
    let roots = [
        (ctx.app_root(), APP_MARKER),
        (ctx.framework_root(), FRAMEWORK_MARKER),
        (ctx.public_root(), PUBLIC_MARKER),
    ];

    for (root, marker) in roots {
        let Some(root) = root.filter(|r| !r.is_empty()) else {
            continue;
        };
        let trimmed = root.trim_end_matches(['/', '\\']);
        if let Some(rest) = path
            .strip_prefix(trimmed)
            .and_then(|rest| rest.strip_prefix(['/', '\\']))
        {
            return format!("{}{}", marker, rest);
        }
    }

    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::StaticContext;

    fn ctx() -> StaticContext {
        StaticContext::new("testing")
            .with_app_root("/var/www/site/app/")
            .with_framework_root("/var/www/site/system")
            .with_public_root("/var/www/site/public/")
    }

    #[test]
    fn test_app_root_is_rewritten() {
        assert_eq!(
            clean_file_name("/var/www/site/app/Controllers/Home.rs", &ctx()),
            "APPPATH/Controllers/Home.rs"
        );
    }

    #[test]
    fn test_framework_and_public_roots() {
        assert_eq!(
            clean_file_name("/var/www/site/system/Log/Logger.rs", &ctx()),
            "BASEPATH/Log/Logger.rs"
        );
        assert_eq!(
            clean_file_name("/var/www/site/public/index.rs", &ctx()),
            "FCPATH/index.rs"
        );
    }

    #[test]
    fn test_first_match_wins() {
        // Public root nested inside the app root: app is checked first.
        let nested = StaticContext::new("testing")
            .with_app_root("/srv/app")
            .with_public_root("/srv/app/public");
        assert_eq!(
            clean_file_name("/srv/app/public/index.rs", &nested),
            "APPPATH/public/index.rs"
        );
    }

    #[test]
    fn test_unrelated_and_sibling_paths_unchanged() {
        assert_eq!(clean_file_name("/tmp/other.rs", &ctx()), "/tmp/other.rs");
        assert_eq!(
            clean_file_name("/var/www/site/application/x.rs", &ctx()),
            "/var/www/site/application/x.rs"
        );
    }

    #[test]
    fn test_no_roots_configured() {
        let bare = StaticContext::new("testing");
        assert_eq!(clean_file_name("/a/b.rs", &bare), "/a/b.rs");
    }
}
