pub mod roster;

pub use roster::RosterStore;
