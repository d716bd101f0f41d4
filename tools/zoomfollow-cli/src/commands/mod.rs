pub mod check;
pub mod properties;
pub mod simulate;
