#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crate::interactive_ratatui::test_support::{
        create_key_event, create_key_event_with_modifiers,
    };
    use crossterm::event::{KeyCode, KeyModifiers};

    fn input_with(text: &str) -> TextInput {
        let mut input = TextInput::new();
        input.set_text(text.to_string());
        input
    }

    #[test]
    fn test_text_input_creation() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let input = input_with("hello world");
        assert_eq!(input.text(), "hello world");
        assert_eq!(input.cursor_position(), 11);
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::new();

        assert!(input.handle_key(create_key_event(KeyCode::Char('h'))));
        assert!(input.handle_key(create_key_event(KeyCode::Char('i'))));
        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('!'),
            KeyModifiers::SHIFT
        )));

        assert_eq!(input.text(), "hi!");
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = input_with("dd");
        input.handle_key(create_key_event(KeyCode::Left));

        assert!(input.handle_key(create_key_event(KeyCode::Char('a'))));
        assert_eq!(input.text(), "dad");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = input_with("hello");

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "hell");

        input.handle_key(create_key_event(KeyCode::Home));
        assert!(!input.handle_key(create_key_event(KeyCode::Backspace)));
        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "ell");

        input.handle_key(create_key_event(KeyCode::End));
        assert!(!input.handle_key(create_key_event(KeyCode::Delete)));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = input_with("café");

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "caf");

        input.set_text("日本語".to_string());
        input.handle_key(create_key_event(KeyCode::Left));
        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "日語");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = input_with("ab");

        input.handle_key(create_key_event(KeyCode::Right));
        assert_eq!(input.cursor_position(), 2);

        input.handle_key(create_key_event(KeyCode::Home));
        input.handle_key(create_key_event(KeyCode::Left));
        assert_eq!(input.cursor_position(), 0);

        input.set_cursor_position(99);
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_control_bindings() {
        let mut input = input_with("knock knock joke");

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "knock knock ");

        input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('a'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(input.cursor_position(), 0);

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "nock knock ");

        input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('f'),
            KeyModifiers::CONTROL,
        ));
        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "n");

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_control_keys_do_not_insert() {
        let mut input = TextInput::new();

        assert!(!input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL
        )));
        assert!(!input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('x'),
            KeyModifiers::ALT
        )));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_alt_word_movement() {
        let mut input = input_with("why did the chicken");

        input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('b'),
            KeyModifiers::ALT,
        ));
        assert_eq!(input.cursor_position(), 12);

        input.handle_key(create_key_event(KeyCode::Home));
        input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('f'),
            KeyModifiers::ALT,
        ));
        assert_eq!(input.cursor_position(), 4);
    }

    #[test]
    fn test_render_cursor_spans() {
        let input = input_with("dad");
        let spans = input.render_cursor_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "dad");
        assert_eq!(spans[1].content, " ");

        let mut input = input_with("dad");
        input.set_cursor_position(1);
        let spans = input.render_cursor_spans();
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["d", "a", "d"]);

        input.set_cursor_position(0);
        let contents: Vec<String> = input
            .render_cursor_spans()
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(contents, vec!["d".to_string(), "ad".to_string()]);
    }
}
