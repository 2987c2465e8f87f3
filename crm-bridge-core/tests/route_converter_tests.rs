use crm_bridge_core::*;
use rstest::*;
use test_case::test_case;

#[fixture]
fn converter() -> RouteConverterHandler {
    RouteConverterHandler::new(ModuleNameMapper::new(), ActionNameMapper::new())
}

// ===== Legacy View Detection =====

#[rstest]
fn test_api_request_under_base_is_not_a_legacy_route(converter: RouteConverterHandler) {
    let request = LegacyRequest::new("/suiteinstance/api/graphql").with_base("/suiteinstance");

    assert!(!converter.is_legacy_view_route(&request));
}

#[rstest]
fn test_sub_path_list_view_is_a_legacy_route(converter: RouteConverterHandler) {
    let request = LegacyRequest::from_uri("/suiteinstance/?module=Contacts&action=ListView")
        .with_base("/suiteinstance");

    assert!(converter.is_legacy_view_route(&request));
}

#[rstest]
fn test_detail_view_is_a_legacy_route(converter: RouteConverterHandler) {
    let request = LegacyRequest::new("/index.php")
        .with_query("module", "Contacts")
        .with_query("action", "DetailView")
        .with_query("record", "123");

    assert!(converter.is_legacy_view_route(&request));
}

#[rstest]
fn test_module_without_action_is_a_legacy_route(converter: RouteConverterHandler) {
    let request = LegacyRequest::new("/").with_query("module", "Accounts");

    assert!(converter.is_legacy_view_route(&request));
}

#[rstest]
#[case::no_module("/index.php?action=ListView")]
#[case::fake_module("/index.php?module=FakeModule&action=ListView")]
#[case::fake_action("/index.php?module=Contacts&action=FakeAction")]
#[case::empty_module("/index.php?module=&action=ListView")]
#[case::other_script("/legacy.php?module=Contacts&action=ListView")]
#[case::api_path("/api/records/Contacts?module=Contacts")]
fn test_not_a_legacy_route(converter: RouteConverterHandler, #[case] uri: &str) {
    assert!(!converter.is_legacy_view_route(&LegacyRequest::from_uri(uri)));
}

#[rstest]
fn test_base_mismatch_is_not_stripped(converter: RouteConverterHandler) {
    let request = LegacyRequest::from_uri("/suiteinstance2/?module=Contacts")
        .with_base("/suiteinstance");

    assert!(!converter.is_legacy_view_route(&request));
}

// ===== Conversion =====

#[test_case("/index.php?module=Contacts", "./#/contacts" ; "module only")]
#[test_case("/index.php?module=Contacts&action=ListView", "./#/contacts/list" ; "list view")]
#[test_case("/index.php?module=Contacts&action=DetailView&record=123", "./#/contacts/record/123" ; "detail view")]
#[test_case("/index.php?module=Contacts&action=FakeAction", "./#/contacts/FakeAction" ; "unknown action passes through")]
#[test_case("/index.php?module=Contacts&record=123", "./#/contacts/record/123" ; "record without action")]
#[test_case("/index.php?module=ProspectLists&action=EditView&record=9", "./#/prospect-lists/edit/9" ; "hyphenated module")]
#[test_case("/index.php?module=AOS_Invoices&action=index", "./#/invoices/index" ; "prefixed module")]
fn test_convert(uri: &str, expected: &str) {
    let converter = RouteConverterHandler::default();

    assert_eq!(converter.convert_uri(uri).unwrap(), expected);
}

#[test]
fn test_convert_fake_module_fails() {
    let converter = RouteConverterHandler::default();
    let request = LegacyRequest::new("/index.php")
        .with_query("module", "FakeModule")
        .with_query("action", "ListView");

    let err = converter.convert(&request).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("FakeModule"));
}

#[test]
fn test_convert_empty_request_fails() {
    let converter = RouteConverterHandler::default();

    let err = converter.convert(&LegacyRequest::default()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_convert_url_encoded_record() {
    let converter = RouteConverterHandler::default();
    let route = converter
        .convert_uri("/index.php?module=Accounts&action=DetailView&record=a%2Db")
        .unwrap();

    assert_eq!(route, "./#/accounts/record/a-b");
}

#[test]
fn test_every_legacy_module_converts() {
    let converter = RouteConverterHandler::default();

    for module in LegacyModule::ALL {
        let request = LegacyRequest::new("/").with_query("module", module.legacy_name());
        let route = converter.convert(&request).unwrap();

        assert_eq!(route, format!("./#/{}", module.front_end_name()));
        assert!(converter.is_legacy_view_route(&request));
    }
}
