pub mod villa_number_handler;

pub use villa_number_handler::{
    __path_create_villa_number, __path_delete_villa_number, __path_get_villa_number,
    __path_list_villa_numbers, __path_update_villa_number, create_villa_number,
    delete_villa_number, get_villa_number, list_villa_numbers, update_villa_number,
};
