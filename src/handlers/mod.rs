pub mod expenses;
pub mod split;
