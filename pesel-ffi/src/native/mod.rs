pub mod create_validator;
pub mod delete_validator;
pub mod validate;
