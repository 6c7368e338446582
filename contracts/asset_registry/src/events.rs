use soroban_sdk::{symbol_short, Address, Env, String};

/// Ownership change. Issuance carries `from = None`, retirement `to = None`.
pub fn transfer(env: &Env, from: Option<Address>, to: Option<Address>, id: u32) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), id);
}

pub fn delegate_set(env: &Env, id: u32, delegate: Option<Address>) {
    env.events()
        .publish((symbol_short!("delegate"), id), delegate);
}

pub fn operator_set(env: &Env, owner: Address, operator: Address, approved: bool) {
    env.events()
        .publish((symbol_short!("operator"), owner, operator), approved);
}

pub fn pause_changed(env: &Env, paused: bool) {
    env.events().publish((symbol_short!("paused"),), paused);
}

pub fn base_uri_changed(env: &Env, uri: String) {
    env.events().publish((symbol_short!("base_uri"),), uri);
}
