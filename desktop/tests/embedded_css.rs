#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`).
//! A broken path or a truncated file would only show up as unstyled screens
//! at runtime, so check it here.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn theme_styles_every_account_marker() {
    // Classes rendered by the activation, reset and home views.
    let required = [
        ":root",
        "body {",
        ".page {",
        ".account-card",
        ".account-form",
        ".alert--success",
        ".alert--danger",
        ".alert--info",
        ".button--primary",
        ".button--link",
        ".visually-hidden",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_css_hides_collapsed_links_on_narrow_screens() {
    for token in [".navbar__toggle", ".navbar__links--collapsed", "@media"] {
        assert!(
            NAVBAR_CSS.contains(token),
            "Expected token `{token}` missing from navbar CSS"
        );
    }
}
