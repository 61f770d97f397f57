use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_is_empty() {
    let options = BraceOptions::default();
    assert!(options.is_empty());
    assert!(!options.else_chain());
    assert!(!options.consistent());
    assert!(!options.braced_child());
    assert!(!options.nested_if_else());
    assert_eq!(options.to_string(), "");
}

#[test]
fn test_parse_tokens() {
    assert_eq!("else".parse::<BraceOption>(), Ok(BraceOption::Else));
    assert_eq!("consistent".parse::<BraceOption>(), Ok(BraceOption::Consistent));
    assert_eq!("braced-child".parse::<BraceOption>(), Ok(BraceOption::BracedChild));
    assert_eq!("nested-if-else".parse::<BraceOption>(), Ok(BraceOption::NestedIfElse));
    assert_eq!(
        "Else".parse::<BraceOption>(),
        Err(UnknownOptionError {
            token: "Else".to_string()
        })
    );
}

#[test]
fn test_token_round_trip() {
    for option in BraceOption::ALL {
        assert_eq!(option.to_string().parse::<BraceOption>(), Ok(option));
        assert_eq!(BraceOptions::from(option), option.flag());
    }
}

#[test]
fn test_from_arguments_ignores_unknown() {
    let options = BraceOptions::from_arguments(["consistent", "as-needed", "braced-child"]);
    assert_eq!(
        options,
        BraceOptions::CONSISTENT | BraceOptions::BRACED_CHILD
    );
    assert!(options.consistent());
    assert!(options.braced_child());
    assert!(!options.else_chain());
}

#[test]
fn test_from_arguments_accepts_owned_strings() {
    let args = vec![String::from("else"), String::from("else")];
    assert_eq!(BraceOptions::from_arguments(&args), BraceOptions::ELSE);
}

#[test]
fn test_display_canonical_order() {
    let options = BraceOptions::NESTED_IF_ELSE | BraceOptions::ELSE | BraceOptions::BRACED_CHILD;
    assert_eq!(options.to_string(), "else, braced-child, nested-if-else");
    assert_eq!(
        BraceOptions::from_arguments(options.to_string().split(", ")),
        options
    );
}
