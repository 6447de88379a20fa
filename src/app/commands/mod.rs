pub mod application_id;
pub mod auth;
pub mod invoke_remote;
pub mod prepare_repository;
pub mod signup;
pub mod status;
