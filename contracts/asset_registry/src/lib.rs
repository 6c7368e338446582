#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod storage;


pub use errors::Error;

/// Longest accepted base URI, so the asset URI fits a fixed buffer.
const MAX_BASE_URI_LEN: u32 = 200;
const MAX_ID_DIGITS: usize = 10;

#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    /// Initialize the registry. Callable once; the admin, name, symbol,
    /// and supply ceiling are fixed afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        supply_ceiling: u32,
        base_uri: String,
    ) -> Result<(), Error> {
        admin.require_auth();

        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if supply_ceiling == 0 {
            return Err(Error::InvalidConfiguration);
        }
        if base_uri.len() > MAX_BASE_URI_LEN {
            return Err(Error::InvalidConfiguration);
        }

        storage::set_admin(&env, &admin);
        storage::set_name(&env, &name);
        storage::set_symbol(&env, &symbol);
        storage::set_supply_ceiling(&env, supply_ceiling);
        storage::set_base_uri(&env, &base_uri);

        Ok(())
    }

    // ========================================================================
    // Issuance
    // ========================================================================

    /// Issue asset `id` to `to`. Admin only; suspended while paused.
    pub fn issue(env: Env, caller: Address, to: Address, id: u32) -> Result<(), Error> {
        caller.require_auth();

        Self::require_admin(&env, &caller)?;

        if storage::is_paused(&env) {
            return Err(Error::IssuanceSuspended);
        }

        let ceiling = storage::get_supply_ceiling(&env);
        if id < 1 || id > ceiling {
            return Err(Error::InvalidItemId);
        }

        let issued = storage::get_issued_count(&env);
        if issued >= ceiling {
            return Err(Error::SupplyExhausted);
        }

        // Retired ids are tombstoned forever; live ids have an owner record.
        if storage::get_owner(&env, id).is_some() || storage::is_retired(&env, id) {
            return Err(Error::ItemAlreadyExists);
        }

        storage::set_owner(&env, id, &to);
        storage::set_issued_count(&env, issued + 1);
        storage::set_balance(&env, &to, storage::get_balance(&env, &to) + 1);

        events::transfer(&env, None, Some(to), id);

        Ok(())
    }

    /// Retire asset `id`, removing it from circulation permanently.
    pub fn retire(env: Env, caller: Address, id: u32) -> Result<(), Error> {
        caller.require_auth();

        let owner = storage::get_owner(&env, id).ok_or(Error::ItemNotFound)?;

        if !Self::can_transfer(&env, &caller, &owner, id) {
            return Err(Error::NotAuthorized);
        }

        storage::clear_owner(&env, id);
        storage::clear_delegate(&env, id);
        storage::set_retired(&env, id);
        storage::set_issued_count(&env, storage::get_issued_count(&env) - 1);
        storage::set_balance(&env, &owner, storage::get_balance(&env, &owner) - 1);

        events::transfer(&env, Some(owner), None, id);

        Ok(())
    }

    // ========================================================================
    // Ownership
    // ========================================================================

    /// Transfer asset `id` from `from` to `to`. The caller must be the
    /// owner, the asset's delegate, or an operator for the owner.
    pub fn transfer(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        id: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        let owner = storage::get_owner(&env, id).ok_or(Error::ItemNotFound)?;

        if !Self::can_transfer(&env, &caller, &owner, id) {
            return Err(Error::NotAuthorized);
        }
        if from != owner {
            return Err(Error::OwnerMismatch);
        }

        storage::set_owner(&env, id, &to);
        // Delegation does not survive an ownership change.
        storage::clear_delegate(&env, id);
        storage::set_balance(&env, &owner, storage::get_balance(&env, &owner) - 1);
        storage::set_balance(&env, &to, storage::get_balance(&env, &to) + 1);

        events::transfer(&env, Some(owner), Some(to), id);

        Ok(())
    }

    // ========================================================================
    // Delegation
    // ========================================================================

    /// Set or clear the single-asset delegate for `id`. Only the owner or
    /// one of the owner's operators may delegate.
    pub fn approve(
        env: Env,
        caller: Address,
        id: u32,
        delegate: Option<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();

        let owner = storage::get_owner(&env, id).ok_or(Error::ItemNotFound)?;

        if !Self::can_manage(&env, &caller, &owner) {
            return Err(Error::NotAuthorized);
        }

        match &delegate {
            Some(d) => storage::set_delegate(&env, id, d),
            None => storage::clear_delegate(&env, id),
        }

        events::delegate_set(&env, id, delegate);

        Ok(())
    }

    /// Grant or revoke blanket delegation over every asset the caller owns
    /// now or later.
    pub fn set_operator(
        env: Env,
        caller: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        caller.require_auth();

        if operator == caller {
            return Err(Error::InvalidRecipient);
        }

        if approved {
            storage::set_operator(&env, &caller, &operator);
        } else {
            storage::clear_operator(&env, &caller, &operator);
        }

        events::operator_set(&env, caller, operator, approved);

        Ok(())
    }

    // ========================================================================
    // Admin controls
    // ========================================================================

    /// Suspend issuance. Transfers, delegation, and retirement are
    /// unaffected.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        storage::set_paused(&env, true);
        events::pause_changed(&env, true);

        Ok(())
    }

    /// Resume issuance.
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        storage::set_paused(&env, false);
        events::pause_changed(&env, false);

        Ok(())
    }

    /// Replace the base URI used to compose asset URIs.
    pub fn set_base_uri(env: Env, caller: Address, new_uri: String) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_uri.len() > MAX_BASE_URI_LEN {
            return Err(Error::InvalidConfiguration);
        }

        storage::set_base_uri(&env, &new_uri);
        events::base_uri_changed(&env, new_uri);

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn issued_count(env: Env) -> u32 {
        storage::get_issued_count(&env)
    }

    pub fn supply_ceiling(env: Env) -> u32 {
        storage::get_supply_ceiling(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn name(env: Env) -> String {
        storage::get_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        storage::get_symbol(&env)
    }

    pub fn base_uri(env: Env) -> String {
        storage::get_base_uri(&env)
    }

    pub fn owner_of(env: Env, id: u32) -> Result<Address, Error> {
        storage::get_owner(&env, id).ok_or(Error::ItemNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        storage::get_balance(&env, &owner)
    }

    pub fn get_delegate(env: Env, id: u32) -> Result<Option<Address>, Error> {
        if storage::get_owner(&env, id).is_none() {
            return Err(Error::ItemNotFound);
        }
        Ok(storage::get_delegate(&env, id))
    }

    pub fn is_operator(env: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&env, &owner, &operator)
    }

    /// Base URI followed by the decimal asset id.
    pub fn asset_uri(env: Env, id: u32) -> Result<String, Error> {
        if storage::get_owner(&env, id).is_none() {
            return Err(Error::ItemNotFound);
        }
        Ok(Self::compose_uri(&env, &storage::get_base_uri(&env), id))
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        if *caller != storage::get_admin(env) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    /// Owner or blanket operator.
    fn can_manage(env: &Env, caller: &Address, owner: &Address) -> bool {
        caller == owner || storage::is_operator(env, owner, caller)
    }

    /// Owner, blanket operator, or the asset's single delegate.
    fn can_transfer(env: &Env, caller: &Address, owner: &Address, id: u32) -> bool {
        Self::can_manage(env, caller, owner)
            || storage::get_delegate(env, id).as_ref() == Some(caller)
    }

    fn compose_uri(env: &Env, base: &String, id: u32) -> String {
        let mut buf = [0u8; MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS];
        let base_len = base.len() as usize;
        base.copy_into_slice(&mut buf[..base_len]);

        let mut digits = [0u8; MAX_ID_DIGITS];
        let mut rem = id;
        let mut pos = MAX_ID_DIGITS;
        loop {
            pos -= 1;
            digits[pos] = b'0' + (rem % 10) as u8;
            rem /= 10;
            if rem == 0 {
                break;
            }
        }
        let digit_len = MAX_ID_DIGITS - pos;
        buf[base_len..base_len + digit_len].copy_from_slice(&digits[pos..]);

        String::from_bytes(env, &buf[..base_len + digit_len])
    }
}
