mod fungible_token;
mod metadata;
mod token_service;
mod transfer_receiver;

pub use fungible_token::*;
pub use metadata::*;
pub use token_service::*;
pub use transfer_receiver::*;
