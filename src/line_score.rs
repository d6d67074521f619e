pub mod classify;
pub mod entities;
pub mod markup;
pub mod parser;
pub mod render;
