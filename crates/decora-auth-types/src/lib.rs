//! Bearer-token types shared by Decora services.
//!
//! Token issuance lives in the identity service; everything here is for
//! *consuming* an already-issued access token.

pub mod token;
