mod settings;

pub use settings::{KeyBindings, Settings, WindowSettings};
