//! Domain errors. Used by ports and use cases.
//!
//! Validation variants carry user-facing Hausa messages; the TUI prints them
//! verbatim and re-prompts. Adapters map infrastructure errors into `Store`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Input did not parse to a valid calendar date.
    #[error("Ranar da ka shigar ba ta da inganci")]
    InvalidDate,

    /// Last menstrual period date lies in the future.
    #[error("Ba zai yiwu ranar haila ta kasance a nan gaba ba")]
    FutureLmp,

    /// Last menstrual period is more than 365 days in the past.
    #[error("Ranar haila ta wuce shekara guda. Da fatan za a shigar da wadda ta kusa")]
    LmpTooOld,

    /// Estimated due date is more than 14 days in the past.
    #[error("Ranar haihuwa ta wuce makonni biyu. Da fatan za a shigar da wadda ta dace")]
    EddTooOld,

    /// Cycle length outside the supported 21..=45 day range.
    #[error("Tsawon lokacin haila bai kamata ya kasance ƙasa da kwanaki 21 ko fiye da 45 ba")]
    InvalidCycleLength,

    /// EDD implies a pregnancy that has not yet begun by LMP convention.
    #[error("Ba zai yiwu ciki ya kasance kafin ranar haila ba")]
    NegativeGestation,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}
