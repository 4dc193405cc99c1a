pub mod fungible_token;
