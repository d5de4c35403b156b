use super::*;

#[test]
fn base_name_stops_at_first_paren() {
    assert_eq!(base_name("Super Game (U) [!].7z").unwrap(), "Super Game");
}

#[test]
fn base_name_stops_at_first_dot() {
    assert_eq!(base_name("Plain Game.zip").unwrap(), "Plain Game");
}

#[test]
fn base_name_stops_at_first_bracket() {
    assert_eq!(base_name("Odd Game [b1].7z").unwrap(), "Odd Game");
}

#[test]
fn base_name_trims_whitespace() {
    assert_eq!(base_name("Spaced Game   (U).7z").unwrap(), "Spaced Game");
}

#[test]
fn base_name_without_boundary_is_an_error() {
    assert_eq!(
        base_name("no boundary at all"),
        Err(crate::ParseError::MissingNameBoundary(
            "no boundary at all".to_string()
        ))
    );
}

#[test]
fn paren_groups_in_order() {
    assert_eq!(
        paren_groups("Game (USA) (Rev 1) (Beta).zip"),
        vec!["USA", "Rev 1", "Beta"]
    );
}

#[test]
fn bracket_groups_in_order() {
    assert_eq!(bracket_groups("Game (U) [!] [b1].7z"), vec!["!", "b1"]);
}

#[test]
fn bracket_groups_ignore_parens() {
    assert!(bracket_groups("Game (U).7z").is_empty());
}

#[test]
fn split_region_list_trims_codes() {
    assert_eq!(split_region_list("USA, Europe"), vec!["USA", "Europe"]);
    assert_eq!(split_region_list("U"), vec!["U"]);
}
