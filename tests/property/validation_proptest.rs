//! Property-based tests for input validation

use bookmarks_api::backend::auth::Credentials;
use bookmarks_api::shared::validation::{
    validate_email, validate_link, validate_password, MAX_PASSWORD_BYTES, MIN_PASSWORD_LEN,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_well_formed_emails_are_accepted(
        local in "[a-z0-9][a-z0-9._+]{0,20}",
        domain in "[a-z0-9]{1,15}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert_eq!(validate_email(&email), Ok(email.as_str()));
    }

    #[test]
    fn test_emails_without_dotted_domain_are_rejected(
        local in "[a-z0-9]{1,20}",
        domain in "[a-z0-9]{1,20}",
    ) {
        let email = format!("{local}@{domain}");
        prop_assert!(validate_email(&email).is_err());
    }

    #[test]
    fn test_emails_without_at_are_rejected(s in "[a-z0-9.]{0,40}") {
        prop_assert!(validate_email(&s).is_err());
    }

    #[test]
    fn test_short_passwords_are_rejected(password in "[a-zA-Z0-9]{0,7}") {
        prop_assert!(password.chars().count() < MIN_PASSWORD_LEN);
        prop_assert!(validate_password(&password).is_err());
    }

    #[test]
    fn test_passwords_in_range_are_accepted(password in "[a-zA-Z0-9!@#]{8,72}") {
        prop_assert!(password.len() <= MAX_PASSWORD_BYTES);
        prop_assert_eq!(validate_password(&password), Ok(password.as_str()));
    }

    #[test]
    fn test_overlong_passwords_are_rejected(password in "[a-z]{73,120}") {
        prop_assert!(validate_password(&password).is_err());
    }

    #[test]
    fn test_credentials_keep_email_verbatim(
        local in "[A-Za-z0-9]{1,12}",
        domain in "[A-Za-z0-9]{1,12}",
    ) {
        let email = format!("{local}@{domain}.com");
        let credentials = Credentials::try_from_parts(&email, "pw123456").unwrap();
        prop_assert_eq!(credentials.email(), email.as_str());
    }

    #[test]
    fn test_http_links_are_accepted(host in "[a-z]{1,20}", path in "[a-z0-9/]{0,20}") {
        let link = format!("https://{host}.com/{path}");
        prop_assert!(validate_link(&link).is_ok());
    }

    #[test]
    fn test_non_http_schemes_are_rejected(scheme in "(ftp|file|mailto|javascript)", rest in "[a-z]{1,10}") {
        let link = format!("{scheme}://{rest}");
        prop_assert!(validate_link(&link).is_err());
    }
}
