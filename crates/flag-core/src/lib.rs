pub mod animate;
pub mod config;
pub mod constants;
pub mod field;
pub mod gesture;
pub mod noise;
pub mod scene;
pub static FLAG_WGSL: &str = include_str!("../shaders/flag.wgsl");

pub use animate::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use gesture::*;
pub use noise::*;
pub use scene::*;
