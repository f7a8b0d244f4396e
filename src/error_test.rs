use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = SetupError::MissingElement("#contactForm".to_owned());
    assert_eq!(err.to_string(), "required element `#contactForm` is missing from the page");
}

#[test]
fn wrong_kind_names_selector_and_expected_kind() {
    let err = SetupError::WrongElementKind { selector: "#formMessage".to_owned(), expected: "form" };
    assert_eq!(err.to_string(), "element `#formMessage` is not a form");
}

#[test]
fn config_error_converts_transparently() {
    let err: SetupError = ConfigError::Invalid("bad".to_owned()).into();
    assert_eq!(err.to_string(), "invalid page config: bad");
}

#[test]
fn listener_error_names_event_and_target() {
    let err = SetupError::Listener { event: "scroll".to_owned(), target: "window".to_owned() };
    assert!(err.to_string().contains("`scroll`"));
    assert!(err.to_string().contains("`window`"));
}
