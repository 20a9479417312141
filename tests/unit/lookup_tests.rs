/*!
 * Tests for lookup routing
 */

use lexireader::lookup::{self, LookupLanguage};

#[test]
fn test_route_cat_inJapanese_shouldUseJisho() {
    let url = lookup::route("猫", Some("ja")).unwrap();
    assert_eq!(url.host_str(), Some("jisho.org"));
    assert!(url.as_str().ends_with("/search/%E7%8C%AB"));
}

#[test]
fn test_route_withUnknownCode_shouldUseGenericSearch() {
    let url = lookup::route("word", Some("xx-unknown")).unwrap();
    assert_eq!(url.as_str(), "https://www.google.com/search?q=word+definition");
}

#[test]
fn test_route_withRegionSubtag_shouldUseLanguageTemplate() {
    let url = lookup::route("chat", Some("fr-CA")).unwrap();
    assert_eq!(url.as_str(), "https://www.larousse.fr/dictionnaires/french-english/chat");
}

#[test]
fn test_route_irish_shouldPreferFocloirOverTeanglann() {
    let templates = LookupLanguage::Irish.templates();
    assert_eq!(templates.len(), 2);
    let url = lookup::route("bó", Some("ga")).unwrap();
    assert_eq!(url.as_str(), "https://www.focloir.ie/en/search/ei/?q=b%C3%B3");
}

#[test]
fn test_lookupLanguage_codes() {
    assert_eq!(LookupLanguage::Japanese.code(), "ja");
    assert_eq!(LookupLanguage::Undetermined.to_string(), "und");
    assert_eq!(LookupLanguage::from_code(None), LookupLanguage::Undetermined);
}
