pub mod bmi;
pub mod glasgow;
pub mod news;
pub mod norton;
pub mod pain;
