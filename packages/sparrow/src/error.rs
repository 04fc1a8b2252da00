use soroban_sdk::contracterror;

pub type SparrowResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    SchemaUpToDate = 3,
    UnknownSchemaVersion = 4,

    // Validation: bad input, rejected before any state mutation
    BelowMinimum = 100,
    ZeroReward = 101,
    FeeTooHigh = 102,
    InvalidAddress = 103,
    ZeroAmount = 104,
    NegativeAmount = 105,
    InvalidReserveRatio = 106,
    InvalidWeightFactor = 107,
    ZeroShares = 108,
    BurnNotSupported = 109,
    InvalidDelegationId = 110,

    // Policy
    NotGovernance = 200,
    NotPendingGovernance = 201,
    Paused = 202,
    SlippageExceeded = 203,
    TooManyPendingRequests = 204,
    InsufficientBalance = 205,
    InsufficientAllowance = 206,
    RequestNotFound = 207,
    ValidatorNotFound = 208,
    ValidatorAlreadyRegistered = 209,
    AlreadyActive = 210,
    ValidatorNotActive = 211,
    AlreadyCompleted = 212,
    DelegationAlreadyPending = 213,
    NoPendingDelegation = 214,
    NotAuthorized = 215,
    CoordinatorNotSet = 216,
    NoValidatorSelected = 217,
    NothingToCollect = 218,
    InsufficientFunds = 219,
    RegistrationRejected = 220,
    AllowanceExpired = 221,

    // Timing: governs the unlock request state machine
    TooEarly = 300,
    ClaimWindowExpired = 301,
    RequestExpired = 302,
    NotExpiredYet = 303,

    // Solvency
    InsufficientLiquidity = 400,
    InsufficientLiquidityAfterCommitments = 401,

    // Arithmetic
    MathError = 600,
    CastingFailure = 601,
}

/// Broad classes of failures. Every class is rejected atomically and
/// nothing in the core is transient, so none of them is retryable without
/// a change on the caller's side (input, timing or pool liquidity).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lifecycle,
    Validation,
    Policy,
    Timing,
    Solvency,
    Arithmetic,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            0..=99 => ErrorKind::Lifecycle,
            100..=199 => ErrorKind::Validation,
            200..=299 => ErrorKind::Policy,
            300..=399 => ErrorKind::Timing,
            400..=499 => ErrorKind::Solvency,
            _ => ErrorKind::Arithmetic,
        }
    }
}
