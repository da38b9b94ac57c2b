pub mod meal_dto;
pub mod meal_list_response;
pub mod meal_lookup_response;
pub mod meal_request;
pub mod meal_response;
pub mod meals;
