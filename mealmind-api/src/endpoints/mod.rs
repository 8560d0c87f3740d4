pub mod images;
pub mod meals;
pub mod pantry;
