//! Tests for the InputField component.

use std::cell::RefCell;
use std::rc::Rc;

use tabula::prelude::*;
use tabula_dom::element::{collect_text, contains_text, find_element};
use tabula_dom::{Border, Key, Modifiers};

fn recorded(field: InputField) -> (InputField, Rc<RefCell<Vec<String>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let field = field.id("f").on_change(move |value| sink.borrow_mut().push(value.to_string()));
    (field, changes)
}

fn press(field: &mut InputField, key: Key) -> EventResult {
    field.on_key(key, Modifiers::new())
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn test_typing_inserts_at_cursor_and_notifies() {
    let (mut field, changes) = recorded(InputField::new());

    press(&mut field, Key::Char('w'));
    press(&mut field, Key::Char('b'));
    press(&mut field, Key::Left);
    press(&mut field, Key::Char('e'));

    assert_eq!(field.text(), "web");
    assert_eq!(field.cursor(), 2);
    assert_eq!(*changes.borrow(), ["w", "wb", "web"]);
}

#[test]
fn test_backspace_and_delete() {
    let (mut field, changes) = recorded(InputField::new().value("héllo"));

    press(&mut field, Key::Home);
    press(&mut field, Key::Right);
    press(&mut field, Key::Delete);
    assert_eq!(field.text(), "hllo");

    press(&mut field, Key::Backspace);
    assert_eq!(field.text(), "llo");
    assert_eq!(field.cursor(), 0);

    // Nothing before the cursor: consumed but no change.
    press(&mut field, Key::Backspace);
    assert_eq!(changes.borrow().len(), 2);
}

#[test]
fn test_disabled_ignores_editing() {
    let (mut field, changes) = recorded(InputField::new().value("x").disabled(true));
    assert_eq!(press(&mut field, Key::Char('y')), EventResult::Ignored);
    assert_eq!(field.on_click("f:clear"), EventResult::Ignored);
    assert_eq!(field.text(), "x");
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_modified_keys_are_ignored() {
    let (mut field, _) = recorded(InputField::new());
    assert_eq!(field.on_key(Key::Char('c'), Modifiers::ctrl()), EventResult::Ignored);
    assert_eq!(field.on_key(Key::Char('x'), Modifiers::alt()), EventResult::Ignored);
    assert_eq!(field.on_key(Key::Char('X'), Modifiers::shift()), EventResult::Consumed);
    assert_eq!(field.text(), "X");
}

#[test]
fn test_enter_and_tab_are_left_to_the_host() {
    let (mut field, _) = recorded(InputField::new());
    assert_eq!(press(&mut field, Key::Enter), EventResult::Ignored);
    assert_eq!(press(&mut field, Key::Tab), EventResult::Ignored);
}

// =============================================================================
// Actions
// =============================================================================

#[test]
fn test_clear_action() {
    let (mut field, changes) = recorded(InputField::new().value("abc"));
    assert!(field.shows_clear());

    assert_eq!(field.on_click("f:clear"), EventResult::Consumed);
    assert_eq!(field.text(), "");
    assert_eq!(*changes.borrow(), [""]);
    assert!(!field.shows_clear());
    assert_eq!(field.on_click("f:clear"), EventResult::Ignored);
}

#[test]
fn test_clear_hidden_when_not_clearable() {
    let field = InputField::new().value("abc").clearable(false);
    assert!(!field.shows_clear());
    assert!(!contains_text(&field.render(&Theme::default()), "✕"));
}

#[test]
fn test_password_toggle() {
    let (mut field, _) = recorded(InputField::new().kind(InputKind::Password).value("secret"));
    let theme = Theme::default();

    let tree = field.render(&theme);
    assert!(contains_text(&tree, "••••••"));
    assert!(contains_text(&tree, "Show"));

    assert_eq!(field.on_click("f:toggle-password"), EventResult::Consumed);
    let tree = field.render(&theme);
    assert!(contains_text(&tree, "secret"));
    assert!(contains_text(&tree, "Hide"));
}

#[test]
fn test_toggle_password_on_text_field_is_ignored() {
    let (mut field, _) = recorded(InputField::new());
    assert_eq!(field.on_click("f:toggle-password"), EventResult::Ignored);
}

#[test]
fn test_click_on_field_focuses() {
    let (mut field, _) = recorded(InputField::new());
    assert_eq!(field.on_click("f:field"), EventResult::Consumed);
    assert!(field.is_focused());
    assert_eq!(field.on_click("g:field"), EventResult::Ignored);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_label_placeholder_and_helper() {
    let field = InputField::new()
        .id("f")
        .label("Add User")
        .placeholder("Enter name")
        .helper_text("Full name");
    let tree = field.render(&Theme::default());

    assert_eq!(collect_text(&tree), ["Add User", "Enter name", "Full name"]);
}

#[test]
fn test_error_replaces_helper_when_invalid() {
    let field = InputField::new()
        .helper_text("Full name")
        .error_message("Required")
        .invalid(true);
    let tree = field.render(&Theme::default());

    assert!(contains_text(&tree, "Required"));
    assert!(!contains_text(&tree, "Full name"));
}

#[test]
fn test_variant_borders() {
    let theme = Theme::default();
    let border_of = |variant| {
        let tree = InputField::new().id("f").variant(variant).render(&theme);
        find_element(&tree, "f:field").map(|el| el.style.border)
    };

    assert_eq!(border_of(InputVariant::Outlined), Some(Border::Rounded));
    assert_eq!(border_of(InputVariant::Filled), Some(Border::Single));
    assert_eq!(border_of(InputVariant::Ghost), Some(Border::None));
}

#[test]
fn test_focus_and_invalid_border_colors() {
    let theme = Theme::default();
    let mut field = InputField::new().id("f");

    field.set_focused(true);
    let tree = field.render(&theme);
    let color = find_element(&tree, "f:field").and_then(|el| el.style.border_color);
    assert_eq!(color, Some(theme.accent));

    field.set_invalid(true);
    let tree = field.render(&theme);
    let color = find_element(&tree, "f:field").and_then(|el| el.style.border_color);
    assert_eq!(color, Some(theme.error));
}

#[test]
fn test_size_controls_padding() {
    let theme = Theme::default();
    let padding_of = |size| {
        let tree = InputField::new().id("f").size(size).render(&theme);
        find_element(&tree, "f:field").map(|el| (el.padding.left, el.padding.top))
    };

    assert_eq!(padding_of(InputSize::Sm), Some((1, 0)));
    assert_eq!(padding_of(InputSize::Md), Some((2, 0)));
    assert_eq!(padding_of(InputSize::Lg), Some((3, 1)));
}

#[test]
fn test_focused_value_splits_around_cursor() {
    let mut field = InputField::new().id("f").value("abc");
    field.set_focused(true);
    field.cursor_left();

    let tree = field.render(&Theme::default());
    assert_eq!(collect_text(&tree), ["ab", "c", "", "✕"]);
}
