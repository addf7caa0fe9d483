use super::*;
use tempfile::tempdir;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn parse_keybinding_reads_modifiers_and_named_keys() {
    assert_eq!(
        parse_keybinding("ctrl+q"),
        Some(Key::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
    );
    assert_eq!(
        parse_keybinding("Alt + Up"),
        Some(Key::new(KeyCode::Up, KeyModifiers::ALT))
    );
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("space"), Some(Key::simple(KeyCode::Char(' '))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn parse_keybinding_folds_uppercase_into_shift() {
    assert_eq!(
        parse_keybinding("ctrl+D"),
        Some(Key::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}

#[test]
fn rules_bind_rebind_and_unbind() {
    let mut keybindings = KeybindingService::new();
    apply_keybinding_rules(
        &mut keybindings,
        &[
            rule("ctrl+x", "quit", None),
            rule("r", "removeHabit", Some("list")),
            rule("d", "", Some("list")),
        ],
    );

    assert_eq!(
        keybindings.resolve(KeybindingContext::Input, &Key::ctrl(KeyCode::Char('x'))),
        Some(&Command::Quit)
    );
    assert_eq!(
        keybindings.resolve(KeybindingContext::List, &Key::simple(KeyCode::Char('r'))),
        Some(&Command::RemoveHabit)
    );
    assert_eq!(
        keybindings.resolve(KeybindingContext::List, &Key::simple(KeyCode::Char('d'))),
        None
    );
}

#[test]
fn invalid_rules_are_skipped() {
    let mut keybindings = KeybindingService::new();
    apply_keybinding_rules(
        &mut keybindings,
        &[
            rule("ctrl+x", "doesNotExist", None),
            rule("ctrl+y", "quit", Some("editor")),
            rule("hyper+", "quit", None),
        ],
    );

    assert_eq!(
        keybindings.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('x'))),
        None
    );
    assert_eq!(
        keybindings.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('y'))),
        None
    );
}

#[test]
fn load_settings_from_missing_file_is_none() {
    let dir = tempdir().unwrap();
    assert!(load_settings_from(&dir.path().join("settings.json")).is_none());
}

#[test]
fn load_settings_from_malformed_file_is_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}

#[test]
fn load_settings_from_reads_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "keybindings": [{ "key": "ctrl+x", "command": "quit" }], "drag_threshold": 3 }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.drag_threshold, Some(3));
}

#[test]
fn default_settings_file_is_written_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_settings(&path).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();
    assert!(load_settings_from(&path).is_some());

    std::fs::write(&path, "{}").unwrap();
    write_default_settings(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    assert_ne!(first, "{}");
}
