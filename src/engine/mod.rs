//! Password and passphrase engines.

pub mod passphrase;
pub mod password;
mod wordlist;

pub use wordlist::WordList;
