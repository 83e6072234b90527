mod villa_dto;

pub use villa_dto::{
    ListVillasQuery, VillaCreateDto, VillaDto, VillaPatchDto, VillaUpdateDto,
};
