use super::*;

#[test]
fn default_locale_is_korean() {
    assert_eq!(Locale::default(), Locale::Ko);
    assert_eq!(Locale::default().strings(), &Strings::KO);
}

#[test]
fn locale_parses_case_insensitively() {
    assert_eq!("ko".parse::<Locale>(), Ok(Locale::Ko));
    assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
}

#[test]
fn locale_rejects_unknown_tag() {
    let err = "fr".parse::<Locale>().unwrap_err();
    assert!(err.contains("fr"));
}

#[test]
fn tables_share_title_but_differ_in_copy() {
    assert_eq!(Strings::KO.title, Strings::EN.title);
    assert_ne!(Strings::KO.fallback, Strings::EN.fallback);
    assert_ne!(Strings::KO.greeting, Strings::EN.greeting);
}

#[test]
fn fallback_text_is_non_empty() {
    for locale in [Locale::Ko, Locale::En] {
        assert!(!locale.strings().fallback.trim().is_empty());
    }
}
