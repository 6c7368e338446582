use soroban_sdk::contracterror;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracterror]
#[repr(u32)]
pub enum Error {
    InvalidConfiguration = 1,
    IssuanceSuspended = 2,
    InvalidRecipient = 3,
    InvalidItemId = 4,
    SupplyExhausted = 5,
    ItemAlreadyExists = 6,
    ItemNotFound = 7,
    NotAuthorized = 8,
    OwnerMismatch = 9,
    AlreadyInitialized = 10,
}
