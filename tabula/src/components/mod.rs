pub mod checkbox;
pub mod events;
pub mod input;
pub mod selection;
pub mod table;
