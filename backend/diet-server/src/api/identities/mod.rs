pub mod create_identity_request;
pub mod identities;
pub mod identity_dto;
pub mod identity_list_response;
