pub mod item;
pub mod predicates;
