pub mod columns;
pub mod elements;
pub mod geometry;
