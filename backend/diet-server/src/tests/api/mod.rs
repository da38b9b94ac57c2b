mod error;
mod extractors;
mod meal_request;
