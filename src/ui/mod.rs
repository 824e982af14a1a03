pub mod cases;
pub mod panels;
pub mod plot;
