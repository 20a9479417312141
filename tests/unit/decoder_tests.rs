/*!
 * Tests for the encoding fallback decoder
 */

use encoding_rs::{EUC_JP, ISO_2022_JP, SHIFT_JIS, WINDOWS_1252};
use lexireader::text::decoder::{self, TextEncoding};
use rand::Rng;

/// Valid UTF-8 must always win over the legacy encodings
#[test]
fn test_decode_withRandomValidUtf8_shouldAlwaysPickUtf8() {
    let mut rng = rand::rng();
    let alphabet = ['a', 'Z', ' ', '\n', 'é', 'ß', 'ж', '日', 'ア', '😀', '\u{85}', '\t'];

    for _ in 0..200 {
        let len = rng.random_range(1..64);
        let text: String = (0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect();
        let decoded = decoder::decode(text.as_bytes()).unwrap();
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
        assert_eq!(decoded.text, text);
    }
}

/// Decoding never fails because the last candidate accepts everything
#[test]
fn test_decode_withRandomBytes_shouldNeverFail() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let len = rng.random_range(0..128);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        assert!(decoder::decode(&bytes).is_ok());
    }
}

#[test]
fn test_decode_withShiftJis_shouldRoundTrip() {
    let (bytes, _, _) = SHIFT_JIS.encode("今日は良い天気です。");
    let decoded = decoder::decode(&bytes).unwrap();
    assert_eq!(decoded.encoding, TextEncoding::ShiftJis);
    assert_eq!(decoded.text, "今日は良い天気です。");
}

#[test]
fn test_decodeWith_eucJpAndIso2022Jp() {
    let (euc, _, _) = EUC_JP.encode("吾輩は猫である");
    let decoded = decoder::decode_with(&euc, &[TextEncoding::EucJp]).unwrap();
    assert_eq!(decoded.text, "吾輩は猫である");

    let (jis, _, _) = ISO_2022_JP.encode("吾輩は猫である");
    let decoded = decoder::decode_with(&jis, &[TextEncoding::Iso2022Jp]).unwrap();
    assert_eq!(decoded.text, "吾輩は猫である");
}

#[test]
fn test_decode_withWindows1252Accents_shouldNotUseMacRoman() {
    let (bytes, _, _) = WINDOWS_1252.encode("Ça coûte très cher, déjà «vu».");
    let decoded = decoder::decode_with(&bytes, &TextEncoding::FALLBACK_ORDER[8..]).unwrap();
    assert_eq!(decoded.encoding, TextEncoding::Windows1252);
    assert_eq!(decoded.text, "Ça coûte très cher, déjà «vu».");
}

#[test]
fn test_fallbackOrder_shouldEndWithPermissiveEncoding() {
    let order = TextEncoding::FALLBACK_ORDER;
    assert_eq!(order[0], TextEncoding::Utf8);
    assert_eq!(order[order.len() - 1], TextEncoding::MacRoman);
    assert_eq!(TextEncoding::ShiftJis.to_string(), "Shift_JIS");
}
