pub mod aggregate;
pub mod likert;
pub mod rater;
pub mod scale;
pub mod table;
