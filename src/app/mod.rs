mod controller;
mod pause;

pub use controller::App;
pub use pause::PauseSwitch;
