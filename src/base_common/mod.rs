pub mod alphabet;
pub mod bit_group;

pub use alphabet::Alphabet;
