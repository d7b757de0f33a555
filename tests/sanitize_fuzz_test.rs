use dialkit::dispatcher::build_target;
use dialkit::{sanitize, Action, DispatchError, PlatformFamily};

#[test]
fn test_sanitize_garbage_flood() {
    let garbage = [
        "asdfghjkl",
        "!!! @@@ ###",
        "1234567890",
        "extremely long string that doesn't mean anything to the system at all but might cause buffer issues if we were in C but we are in Rust so it's just a long string",
        "",
        " ",
        "\u{0}\u{7f}\u{feff}",
        "📞 +34 (91) 123 45 67 📞",
    ];

    for text in garbage {
        let once = sanitize(text);
        assert!(once
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == '#' || c == '*'));
        assert_eq!(sanitize(&once), once, "not idempotent for {:?}", text);
    }
}

#[test]
fn test_sanitize_every_ascii_char() {
    let all: String = (0u8..128).map(char::from).collect();
    assert_eq!(sanitize(&all), "#*+0123456789");
}

#[test]
fn test_targets_only_contain_sanitized_numbers() {
    let target = build_target(Action::Call, "tel: 555?body=x", "", PlatformFamily::Default)
        .expect("number present");
    assert_eq!(target.url(), "tel:555");

    let target = build_target(Action::Sms, "555&body=x", "hi & bye", PlatformFamily::Ios)
        .expect("number present");
    assert_eq!(target.url(), "sms:555&body=hi%20%26%20bye");

    assert_eq!(
        build_target(Action::Sms, "no digits", "hi", PlatformFamily::Default),
        Err(DispatchError::EmptyNumber)
    );
}
