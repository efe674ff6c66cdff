pub mod sodium;
pub mod web3_react;

pub use self::{
    sodium::{Provider, SodiumModule, SodiumWallet, import_sodium},
    web3_react::Web3ReactActions,
};
