use broadside::{Action, InputError, Key, KeyBindings, PlayerKind, StartSide};

#[test]
fn test_key_names_parse() {
    assert_eq!("W".parse::<Key>().unwrap(), Key::Char('w'));
    assert_eq!("up".parse::<Key>().unwrap(), Key::ArrowUp);
    assert_eq!("Enter".parse::<Key>().unwrap(), Key::Enter);
    assert_eq!("return".parse::<Key>().unwrap(), Key::Enter);
    assert_eq!(" ".parse::<Key>().unwrap(), Key::Space);
    assert_eq!("space".parse::<Key>().unwrap(), Key::Space);
    assert_eq!("backspace".parse::<Key>().unwrap(), Key::Backspace);
    assert_eq!(
        "shift".parse::<Key>().unwrap_err(),
        InputError::UnknownKey("shift".to_string())
    );
    assert_eq!(Key::ArrowRight.to_string(), "right");
    assert_eq!(Key::Char('q').to_string(), "q");
}

#[test]
fn test_action_names() {
    for action in Action::ALL {
        assert_eq!(action.name().parse::<Action>().unwrap(), action);
    }
    assert_eq!("toggle_hide".parse::<Action>().unwrap(), Action::ToggleHide);
    assert_eq!(Action::ToggleHide.to_string(), "TOGGLE_HIDE");
    assert!("MOVE".parse::<Action>().is_err());
}

#[test]
fn test_player_bindings_are_disjoint() {
    let one = PlayerKind::PlayerOne.bindings();
    let two = PlayerKind::PlayerTwo.bindings();
    for key in one.keys_used() {
        assert!(two.action_for(key).is_none(), "{} bound twice", key);
    }
    assert_eq!(one.keys_used().count(), 6);
    assert_eq!(one.key_for(Action::Enter), Key::Space);
    assert_eq!(two.key_for(Action::Enter), Key::Enter);
    assert_eq!(two.action_for(Key::ArrowDown), Some(Action::Down));
}

#[test]
fn test_rebind_replaces_key() {
    let mut b = KeyBindings::new(
        Key::Char('i'),
        Key::Char('k'),
        Key::Char('j'),
        Key::Char('l'),
        Key::Char('o'),
        Key::Char('p'),
    );
    assert_eq!(b.action_for(Key::Char('o')), Some(Action::Enter));
    b.rebind(Action::Enter, Key::Tab);
    assert_eq!(b.action_for(Key::Char('o')), None);
    assert_eq!(b.action_for(Key::Tab), Some(Action::Enter));
}

#[test]
fn test_kind_defaults() {
    assert_eq!(PlayerKind::PlayerOne.default_side(), StartSide::TopLeft);
    assert_eq!(PlayerKind::PlayerTwo.default_side(), StartSide::BottomRight);
    assert_eq!(PlayerKind::PlayerOne.other(), PlayerKind::PlayerTwo);
    assert_eq!("TopLeft".parse::<StartSide>().unwrap(), StartSide::TopLeft);
    assert_eq!("bottom-right".parse::<StartSide>().unwrap(), StartSide::BottomRight);
}
