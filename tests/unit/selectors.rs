//! Unit tests for `*By` selector parsing and lookup elements.

use crate::common::init_logging;
use admin_attrs::{
    AccountBy, AccountSelector, CacheEntryType, CosBy, CosSelector, DomainBy, DomainSelector,
    ReIndexBy, SelectorBy, ServerBy, ServerSelector, ZimletBy, ZimletSelector,
};
use serde_json::json;

#[test]
fn test_domain_by_parse_success() {
    assert_eq!(DomainBy::parse("id").unwrap(), DomainBy::Id);
    assert_eq!(DomainBy::parse("name").unwrap(), DomainBy::Name);
    assert_eq!(DomainBy::parse("virtualHostname").unwrap(), DomainBy::VirtualHostname);
    assert_eq!(DomainBy::parse("krb").unwrap(), DomainBy::Krb);
    assert_eq!(DomainBy::parse("foreignName").unwrap(), DomainBy::ForeignName);
}

#[test]
fn test_domain_by_parse_failure() {
    init_logging();
    assert_invalid_request!(DomainBy::parse("bogus"), "bogus");
}

#[test]
fn test_parse_is_case_sensitive() {
    assert_invalid_request!(DomainBy::parse("ID"), "ID");
    assert_invalid_request!(AccountBy::parse("AdminName"), "AdminName");
    assert_invalid_request!(CacheEntryType::parse("uiStrings"), "uiStrings");
    assert_invalid_request!(DomainBy::parse(""), "valid values");
}

#[test]
fn test_tokens_round_trip_through_parse() {
    for variant in AccountBy::VARIANTS {
        assert_eq!(AccountBy::parse(variant.as_str()).unwrap(), *variant);
    }
    for variant in CacheEntryType::VARIANTS {
        assert_eq!(variant.to_string().parse::<CacheEntryType>().unwrap(), *variant);
    }
}

#[test]
fn test_names_in_declaration_order() {
    assert_eq!(ReIndexBy::names(), vec!["types", "ids"]);
    assert_eq!(
        DomainBy::names(),
        vec!["id", "name", "virtualHostname", "krb", "foreignName"]
    );
}

#[test]
fn test_error_message_lists_valid_values() {
    let error = ReIndexBy::parse("all").unwrap_err();
    assert_eq!(
        error.to_string(),
        r#"invalid request: invalid ReIndexBy: all, valid values: ["types", "ids"]"#
    );
}

#[test]
fn test_selector_enum_json_form() {
    assert_eq!(serde_json::to_value(AccountBy::Krb5Principal).unwrap(), json!("krb5Principal"));
    assert_eq!(
        serde_json::from_value::<AccountBy>(json!("appAdminName")).unwrap(),
        AccountBy::AppAdminName
    );
    assert!(serde_json::from_value::<AccountBy>(json!("nickname")).is_err());
}

#[test]
fn test_account_selector_element() {
    let selector: AccountSelector =
        serde_json::from_value(json!({"by": "name", "_content": "alice@example.com"})).unwrap();
    assert_eq!(selector.by(), AccountBy::Name);
    assert_eq!(selector.key(), "alice@example.com");
    assert_eq!(selector.to_string(), "name=alice@example.com");
}

#[test]
fn test_selector_aliases_at_crate_root() {
    let server = ServerSelector::parse("serviceHostname", "mta.example.com").unwrap();
    assert_eq!(server.by(), ServerBy::ServiceHostname);

    let cos = CosSelector::new(CosBy::Name, "default");
    assert_eq!(serde_json::to_value(&cos).unwrap(), json!({"by": "name", "_content": "default"}));

    let zimlet: ZimletSelector = serde_json::from_value(json!({"by": "id", "_content": "z-1"})).unwrap();
    assert_eq!(zimlet.by(), ZimletBy::Id);
}

#[test]
fn test_selector_parse_rejects_unknown_by() {
    assert_invalid_request!(DomainSelector::parse("hostname", "example.com"), "hostname");
}
