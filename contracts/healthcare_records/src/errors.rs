use soroban_sdk::{contracterror, contracttype, log, Env, Symbol};

/// Error categories for classifying rejected calls
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: invalid input parameters
    Validation = 1,
    /// Authorization errors: caller lacks the required privilege
    Authorization = 2,
    /// Not found errors: lookup key has no associated data
    NotFound = 3,
    /// System errors: contract-level invariant breaches
    System = 4,
}

/// Error severity levels indicating the impact of an error
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Caller mistake, no attention needed
    Low = 1,
    /// Rejected privileged attempt, worth monitoring
    Medium = 2,
    /// Contract state is inconsistent
    Critical = 3,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    Unauthorized = 2,
    InvalidIdentifier = 3,
    InvalidField = 4,
    NotFound = 5,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidIdentifier | ContractError::InvalidField => {
                ErrorCategory::Validation
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::NotFound => ErrorCategory::NotFound,
            ContractError::NotInitialized => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidIdentifier
            | ContractError::InvalidField
            | ContractError::NotFound => ErrorSeverity::Low,
            ContractError::Unauthorized => ErrorSeverity::Medium,
            ContractError::NotInitialized => ErrorSeverity::Critical,
        }
    }

    /// Every error rejects a single call; resubmitting the same call gives
    /// the same answer until the caller changes its inputs.
    pub fn retryable(&self) -> bool {
        false
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract owner has not been set",
            ContractError::Unauthorized => "Only the owner can authorize providers",
            ContractError::InvalidIdentifier => "Invalid patient ID",
            ContractError::InvalidField => "Invalid diagnosis or treatment",
            ContractError::NotFound => "No records found for this patient",
        }
    }
}

/// Logs a rejected call and hands the error back for propagation.
/// Writes nothing to storage; a failed invocation is rolled back by the host.
pub fn reject(env: &Env, operation: Symbol, error: ContractError) -> ContractError {
    let code = error as u32;
    let category = error.category() as u32;
    log!(env, "call rejected", operation, code, category);
    error
}
