mod villa_number;

pub use villa_number::VillaNumber;
