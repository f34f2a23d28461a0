//! Account lifecycle screens reached from e-mail links.

pub mod activation;
pub mod reset_finish;
