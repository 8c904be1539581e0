pub mod paginate;
pub mod pagetest;
