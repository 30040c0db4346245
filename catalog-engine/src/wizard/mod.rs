//! Wizard controller
//!
//! Four steps: Description -> Variants -> Combinations -> Price Info.
//! [`WizardSession`] drives the flow; [`assembler`] turns the accumulated
//! draft data into the final immutable product.

pub mod assembler;
mod session;

#[cfg(test)]
mod tests;

pub use assembler::{AssemblyError, assemble};
pub use session::{Notice, StepOutcome, WizardError, WizardSession};

/// Wizard step, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Description,
    Variants,
    Combinations,
    Pricing,
}

impl WizardStep {
    /// 1-based step number, the persisted representation
    pub fn number(self) -> u8 {
        match self {
            Self::Description => 1,
            Self::Variants => 2,
            Self::Combinations => 3,
            Self::Pricing => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Description),
            2 => Some(Self::Variants),
            3 => Some(Self::Combinations),
            4 => Some(Self::Pricing),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Variants => "Variants",
            Self::Combinations => "Combinations",
            Self::Pricing => "Price Info",
        }
    }
}
