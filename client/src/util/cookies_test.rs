use super::*;

#[test]
fn read_cookie_finds_key_among_others() {
    assert_eq!(read_cookie("theme=dark; token=abc; lang=en", "token"), Some("abc".to_owned()));
}

#[test]
fn read_cookie_missing_key_is_none() {
    assert_eq!(read_cookie("theme=dark", "token"), None);
    assert_eq!(read_cookie("", "token"), None);
}

#[test]
fn read_cookie_does_not_match_prefixes() {
    assert_eq!(read_cookie("token_old=zzz", "token"), None);
}

#[test]
fn read_cookie_decodes_percent_escapes() {
    assert_eq!(read_cookie("token=a%3Bb%20c", "token"), Some("a;b c".to_owned()));
}

#[test]
fn read_cookie_keeps_empty_value() {
    assert_eq!(read_cookie("token=", "token"), Some(String::new()));
}

#[test]
fn session_cookie_has_no_max_age() {
    assert_eq!(format_cookie("token", "abc", None), "token=abc; Path=/; SameSite=Lax");
}

#[test]
fn remembered_cookie_carries_max_age() {
    assert_eq!(format_cookie("token", "abc", Some(60)), "token=abc; Path=/; SameSite=Lax; Max-Age=60");
}

#[test]
fn format_then_read_survives_separators() {
    let cookie = format_cookie("token", "x;y=z", None);
    let pair = cookie.split("; ").next().unwrap();
    assert_eq!(read_cookie(pair, "token"), Some("x;y=z".to_owned()));
}

#[test]
fn expired_cookie_zeroes_max_age() {
    assert_eq!(expired_cookie("token"), "token=; Path=/; Max-Age=0; SameSite=Lax");
}

#[test]
fn native_store_sees_no_token() {
    let store = CookieTokenStore::new(&ClientConfig::default());
    #[cfg(not(feature = "csr"))]
    assert_eq!(store.token(), None);
    assert_eq!(store.max_age_secs, 30 * 86_400);
    assert_eq!(store.key, "token");
}
