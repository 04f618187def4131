// Interface adapters: console frontend, wire protocol, rendering and HUD sync.

pub mod console;
pub mod hud;
pub mod protocol;
pub mod render;
pub mod state;
pub mod utils;
