pub mod field;
pub mod field3;
pub mod roots;
