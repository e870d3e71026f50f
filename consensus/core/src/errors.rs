use thiserror::Error;

/// Rejections produced by the currency and consensus rules.
///
/// Every variant except [`ConsensusError::InvariantViolation`] describes bad input: the caller
/// drops the block or transaction and carries on. An invariant violation means the rules
/// themselves produced an inconsistent result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("Block cumulative size {size} exceeds the limit of {limit}")]
    BlockTooBig { size: usize, limit: u64 },

    #[error("Unknown block major version {major}.{minor}")]
    UnknownBlockVersion { major: u8, minor: u8 },

    #[error("Unexpected block major version {found} for this check")]
    UnexpectedBlockVersion { found: u8 },

    #[error("Invalid proof of work")]
    InvalidProofOfWork,

    #[error("Failed to compute the proof of work hash")]
    PowHashFailed,

    #[error("Merge mining tag not found in the parent block coinbase extra")]
    MissingMergeMiningTag,

    #[error("Blockchain branch of length {0} is longer than a hash is wide")]
    MerkleBranchTooLong(usize),

    #[error("Failed to compute the auxiliary block header hash")]
    AuxHeaderHashFailed,

    #[error("Auxiliary block hash not found in the merge mining merkle tree")]
    MerkleMismatch,

    #[error("Outputs ({outputs}) exceed inputs ({inputs}) by no more than the minimum fee")]
    FeeInconsistency { inputs: u64, outputs: u64 },

    #[error("Deposit term {0} is outside the allowed range")]
    InvalidDepositTerm(u32),

    #[error("Failed to derive one-time output keys")]
    KeyDerivationFailed,

    #[error("Maximum output count must be at least one")]
    InvalidOutputBudget,

    #[error("Extra nonce of {0} bytes does not fit in the extra field")]
    ExtraNonceTooLarge(usize),

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Wrong address prefix {found}, expected {expected}")]
    WrongAddressPrefix { found: u64, expected: u64 },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

/// Errors raised while assembling a currency parameter set.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value} for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Inconsistent parameters: {0}")]
    Inconsistent(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Failed to build the genesis block: {0}")]
    Genesis(#[from] ConsensusError),

    #[error("Failed to compute the genesis block hash")]
    GenesisHashFailed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        ConfigError::InvalidValue { field, value: value.to_string() }
    }
}

/// Why a decimal amount string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountFormatError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid character {0:?} in amount")]
    InvalidCharacter(char),

    #[error("Amount has more than {0} significant decimal places")]
    TooManyDecimalPlaces(usize),

    #[error("Amount does not fit in 64 bits")]
    Overflow,
}

/// Malformed transaction extra field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtraError {
    #[error("Unexpected end of extra")]
    UnexpectedEnd,

    #[error("Non-zero byte in extra padding")]
    NonZeroPadding,

    #[error("Extra padding longer than {0} bytes")]
    PaddingTooLong(usize),

    #[error("Varint does not fit in 64 bits")]
    VarintOverflow,

    #[error("Extra nonce of {0} bytes is too large")]
    NonceTooLarge(usize),

    #[error("Unknown extra field tag {0:#04x}")]
    UnknownTag(u8),
}

impl From<ExtraError> for ConsensusError {
    fn from(err: ExtraError) -> Self {
        match err {
            ExtraError::NonceTooLarge(size) => ConsensusError::ExtraNonceTooLarge(size),
            other => ConsensusError::SerializationError(other.to_string()),
        }
    }
}
