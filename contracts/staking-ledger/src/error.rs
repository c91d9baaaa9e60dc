use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {

    AlreadyInitialized = 1,

    Unauthorized = 2,

    ContractPaused = 3,

    ReentrantCall = 4,

    UnsupportedToken = 5,

    AlreadySupported = 6,

    NotSupported = 7,

    // Amount was zero or negative
    ZeroAmount = 8,

    InsufficientBalance = 9,

    UnlockAlreadyInitialized = 10,

    UnlockPeriodNotComplete = 11,

    NoUnlockedAmount = 12,

    InsufficientUnlockedAmount = 13,

    TokenIdMismatch = 14,

    // Balance delta around a token transfer was zero or out of range
    TransferFailed = 15,

    UsersStillStaked = 16,

    InvalidUnlockDuration = 17,

    Overflow = 18,
}
