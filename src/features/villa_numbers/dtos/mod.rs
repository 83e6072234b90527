mod villa_number_dto;

pub use villa_number_dto::{VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto};
