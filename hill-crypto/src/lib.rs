pub mod alphabet;
pub mod caesar;
pub mod codec;
pub mod errors;
pub mod hill;
pub mod preset;
pub mod ring;
