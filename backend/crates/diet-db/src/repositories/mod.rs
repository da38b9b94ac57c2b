pub mod identity_repository;
pub mod meal_repository;
