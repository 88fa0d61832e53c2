use macroquad::prelude::KeyCode;

/// Canonical identifier name for a key code.
///
/// These names are what the tracker, bindings, and queries speak; matching
/// is case-insensitive downstream.
pub fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Space => "Space",
        KeyCode::Apostrophe => "Apostrophe",
        KeyCode::Comma => "Comma",
        KeyCode::Minus => "Minus",
        KeyCode::Period => "Period",
        KeyCode::Slash => "Slash",
        KeyCode::Key0 => "Key0",
        KeyCode::Key1 => "Key1",
        KeyCode::Key2 => "Key2",
        KeyCode::Key3 => "Key3",
        KeyCode::Key4 => "Key4",
        KeyCode::Key5 => "Key5",
        KeyCode::Key6 => "Key6",
        KeyCode::Key7 => "Key7",
        KeyCode::Key8 => "Key8",
        KeyCode::Key9 => "Key9",
        KeyCode::Semicolon => "Semicolon",
        KeyCode::Equal => "Equal",
        KeyCode::A => "A",
        KeyCode::B => "B",
        KeyCode::C => "C",
        KeyCode::D => "D",
        KeyCode::E => "E",
        KeyCode::F => "F",
        KeyCode::G => "G",
        KeyCode::H => "H",
        KeyCode::I => "I",
        KeyCode::J => "J",
        KeyCode::K => "K",
        KeyCode::L => "L",
        KeyCode::M => "M",
        KeyCode::N => "N",
        KeyCode::O => "O",
        KeyCode::P => "P",
        KeyCode::Q => "Q",
        KeyCode::R => "R",
        KeyCode::S => "S",
        KeyCode::T => "T",
        KeyCode::U => "U",
        KeyCode::V => "V",
        KeyCode::W => "W",
        KeyCode::X => "X",
        KeyCode::Y => "Y",
        KeyCode::Z => "Z",
        KeyCode::LeftBracket => "LeftBracket",
        KeyCode::Backslash => "Backslash",
        KeyCode::RightBracket => "RightBracket",
        KeyCode::GraveAccent => "GraveAccent",
        KeyCode::World1 => "World1",
        KeyCode::World2 => "World2",
        KeyCode::Escape => "Escape",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Insert => "Insert",
        KeyCode::Delete => "Delete",
        KeyCode::Right => "Right",
        KeyCode::Left => "Left",
        KeyCode::Down => "Down",
        KeyCode::Up => "Up",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::F1 => "F1",
        KeyCode::F2 => "F2",
        KeyCode::F3 => "F3",
        KeyCode::F4 => "F4",
        KeyCode::F5 => "F5",
        KeyCode::F6 => "F6",
        KeyCode::F7 => "F7",
        KeyCode::F8 => "F8",
        KeyCode::F9 => "F9",
        KeyCode::F10 => "F10",
        KeyCode::F11 => "F11",
        KeyCode::F12 => "F12",
        KeyCode::F13 => "F13",
        KeyCode::F14 => "F14",
        KeyCode::F15 => "F15",
        KeyCode::F16 => "F16",
        KeyCode::F17 => "F17",
        KeyCode::F18 => "F18",
        KeyCode::F19 => "F19",
        KeyCode::F20 => "F20",
        KeyCode::F21 => "F21",
        KeyCode::F22 => "F22",
        KeyCode::F23 => "F23",
        KeyCode::F24 => "F24",
        KeyCode::F25 => "F25",
        KeyCode::Kp0 => "Kp0",
        KeyCode::Kp1 => "Kp1",
        KeyCode::Kp2 => "Kp2",
        KeyCode::Kp3 => "Kp3",
        KeyCode::Kp4 => "Kp4",
        KeyCode::Kp5 => "Kp5",
        KeyCode::Kp6 => "Kp6",
        KeyCode::Kp7 => "Kp7",
        KeyCode::Kp8 => "Kp8",
        KeyCode::Kp9 => "Kp9",
        KeyCode::KpDecimal => "KpDecimal",
        KeyCode::KpDivide => "KpDivide",
        KeyCode::KpMultiply => "KpMultiply",
        KeyCode::KpSubtract => "KpSubtract",
        KeyCode::KpAdd => "KpAdd",
        KeyCode::KpEnter => "KpEnter",
        KeyCode::KpEqual => "KpEqual",
        KeyCode::LeftShift => "LeftShift",
        KeyCode::LeftControl => "LeftControl",
        KeyCode::LeftAlt => "LeftAlt",
        KeyCode::LeftSuper => "LeftSuper",
        KeyCode::RightShift => "RightShift",
        KeyCode::RightControl => "RightControl",
        KeyCode::RightAlt => "RightAlt",
        KeyCode::RightSuper => "RightSuper",
        KeyCode::Menu => "Menu",
        KeyCode::Back => "Back",
        KeyCode::Unknown => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_keys_use_bare_names() {
        assert_eq!(key_name(KeyCode::A), "A");
        assert_eq!(key_name(KeyCode::Z), "Z");
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_name(KeyCode::Left), "Left");
        assert_eq!(key_name(KeyCode::Space), "Space");
        assert_eq!(key_name(KeyCode::LeftShift), "LeftShift");
    }
}
