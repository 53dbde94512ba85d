pub mod criteria;
pub mod hotel;
