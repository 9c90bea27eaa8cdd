use postie_application::ApplicationError;

/// Exit codes for the postie CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Usage or unspecified error
    GeneralError = 1,
    /// An input could not be read or is not an HTTPie export
    InputError = 3,
    /// The output could not be written
    OutputError = 4,
}

impl ExitCode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        match error.downcast_ref::<ApplicationError>() {
            Some(ApplicationError::Load { .. }) => Self::InputError,
            Some(ApplicationError::Write { .. }) => Self::OutputError,
            None => Self::GeneralError,
        }
    }
}
