//! Request-shaped round trips through the codec and the JSON forms.

use crate::common::{fixtures, init_logging, pairs};
use admin_attrs::{
    AdminAttrs, AdminObjectInfo, Attr, AttrCodec, AttrCodecBuilder, AttrError, AttrMap,
    AttrValue, AttributeCollection, CodecConfig, DomainBy, DomainSelector, WireBoolean,
    WireFlavor,
};
use serde_json::json;

#[test]
fn test_create_domain_request_round_trip() {
    init_logging();
    let codec = AttrCodec::new();
    let map = fixtures::create_domain_attrs();

    let mut request = AttributeCollection::new();
    request.set_attrs(codec.encode(&map));

    let wire = serde_json::to_value(&request).unwrap();
    assert_eq!(
        wire,
        json!({"a": [
            {"n": "description"},
            {"n": "zimbraDomainStatus", "_content": "active"},
            {"n": "zimbraDomainType", "_content": "local"},
            {"n": "zimbraVirtualHostname", "_content": "mail.example.com"},
            {"n": "zimbraVirtualHostname", "_content": "webmail.example.com"}
        ]})
    );

    let received: AttributeCollection = serde_json::from_value(wire).unwrap();
    assert_eq!(received, request);
    assert_eq!(codec.decode(received.attrs()), map);
}

#[test]
fn test_modify_request_survives_unset_with_ignore_empty() {
    let map = fixtures::modify_account_attrs();
    let attrs = AttrCodec::new().encode(&map);

    let strict = AttrCodecBuilder::new()
        .with_ignore_empty_values(true)
        .build()
        .unwrap();
    let decoded = strict.decode(&attrs);

    assert!(!decoded.contains_key("zimbraNotes"));
    assert_eq!(
        decoded.values("+zimbraMailAlias"),
        vec!["alias1@example.com", "alias2@example.com"]
    );
    assert_eq!(decoded.values("-zimbraMailAlias"), vec!["old@example.com"]);

    let lenient = AttrCodec::new().decode(&attrs);
    assert_eq!(lenient.get("zimbraNotes"), Some(&AttrValue::from("")));
}

#[test]
fn test_json_attrs_object_form() {
    let codec = AttrCodecBuilder::new()
        .with_flavor(WireFlavor::Json)
        .build()
        .unwrap();

    let attrs = codec.encode_json(&fixtures::xmbx_search_json()).unwrap();
    assert_eq!(
        pairs(&attrs),
        vec![
            ("accounts", Some("*")),
            ("limit", Some("0")),
            (
                "notificationMessage",
                Some("Search task %taskId% completed with status %status%.")
            ),
            ("query", Some("Kitchen")),
        ]
    );

    let rendered = codec.to_json_attrs(&attrs);
    assert_eq!(rendered, fixtures::xmbx_search_json());
}

#[test]
fn test_json_attrs_render_unset_with_ignore_empty() {
    let codec = AttrCodecBuilder::new()
        .with_ignore_empty_values(true)
        .build()
        .unwrap();
    let rendered = codec.to_json_attrs(&codec.encode(&fixtures::modify_account_attrs()));

    assert_eq!(rendered["zimbraNotes"], "");
    assert_eq!(
        rendered["+zimbraMailAlias"],
        json!(["alias1@example.com", "alias2@example.com"])
    );
}

#[test]
fn test_json_attrs_rejects_wrong_shapes() {
    let codec = AttrCodec::new();
    assert_invalid_request!(codec.encode_json(&json!(["query", "Kitchen"])), "object");
    assert_invalid_attr_type!(codec.decode_json(&json!({"limit": 0})), "limit", "number");
}

#[test]
fn test_custom_pair_names() {
    let codec = AttrCodecBuilder::new()
        .with_element_name("attr")
        .with_key_attribute("name")
        .build()
        .unwrap();

    let attrs = vec![
        Attr::from_name_value("cn", "alice"),
        Attr::new("description", None),
    ];
    let wire = codec.to_json_pairs(&attrs);
    assert_eq!(
        wire,
        json!({"attr": [{"name": "cn", "_content": "alice"}, {"name": "description"}]})
    );
    assert_eq!(codec.from_json_pairs(&wire).unwrap(), attrs);
}

#[test]
fn test_pair_list_errors() {
    let codec = AttrCodec::new();
    assert!(codec.from_json_pairs(&json!({})).unwrap().is_empty());
    assert_invalid_request!(
        codec.from_json_pairs(&json!([{"n": "cn", "_content": "x"}])),
        "JSON object"
    );
    assert_invalid_request!(codec.from_json_pairs(&json!("garbage")), "JSON object");
    assert_invalid_request!(codec.from_json_pairs(&json!({"a": {"n": "cn"}})), "array");
    assert_invalid_request!(codec.from_json_pairs(&json!({"a": [{"_content": "x"}]})), "'n'");
    assert_invalid_attr_type!(
        codec.from_json_pairs(&json!({"a": [{"n": "cn", "_content": 7}]})),
        "cn",
        "non-string content"
    );
}

#[test]
fn test_codec_from_config_file() {
    let config = CodecConfig::from_json(r#"{"flavor": "json", "ignoreEmptyValues": true}"#).unwrap();
    assert_eq!(config.element_name, "a");
    assert_eq!(config.key_attribute, "n");

    let codec = AttrCodecBuilder::from_config(config).build().unwrap();
    assert_eq!(codec.render_bool(WireBoolean::True), "true");
    assert!(codec.decode(&[Attr::from_name_value("k", "")]).is_empty());

    match AttrCodecBuilder::new().with_element_name("1a").build() {
        Err(AttrError::InvalidConfiguration { message }) => assert!(message.contains("1a")),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_get_domain_info_response() {
    let selector = DomainSelector::parse("virtualHostname", "mail.example.com").unwrap();
    assert_eq!(selector.by(), DomainBy::VirtualHostname);

    let mut domain = AdminObjectInfo::new("example.com", "d-1");
    domain.set_attrs_from_json(&json!({
        "zimbraDomainName": "example.com",
        "zimbraVirtualHostname": [selector.key(), "webmail.example.com"],
        "zimbraGalMaxResults": null
    }))
    .unwrap();

    let wire = serde_json::to_value(&domain).unwrap();
    assert_eq!(wire["name"], "example.com");
    assert_eq!(wire["id"], "d-1");
    assert_eq!(wire["a"].as_array().map(Vec::len), Some(4));

    let received: AdminObjectInfo = serde_json::from_value(wire).unwrap();
    let map: AttrMap = received.attrs_as_map(false);
    assert_eq!(
        map.values("zimbraVirtualHostname"),
        vec!["mail.example.com", "webmail.example.com"]
    );
    assert!(map.get("zimbraGalMaxResults").is_some_and(AttrValue::is_absent));
}
