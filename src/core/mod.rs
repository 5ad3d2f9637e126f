pub mod add;
pub mod backup;
pub mod log;
pub mod mark;
pub mod selection;
pub mod session;
pub mod table;
