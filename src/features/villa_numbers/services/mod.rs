mod villa_number_service;

pub use villa_number_service::VillaNumberService;
