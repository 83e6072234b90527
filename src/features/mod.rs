pub mod auth;
pub mod villa_numbers;
pub mod villas;
