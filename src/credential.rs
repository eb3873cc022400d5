use crate::errors::AttendanceError;

/// Source of the credential sent with every mutating call.
pub trait CredentialProvider: Send + Sync {
    fn secret(&self) -> Result<&str, AttendanceError>;
}

/// The shared plaintext secret word, sent as the `secret` body field.
#[derive(Debug, Clone, Default)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl CredentialProvider for SecretWord {
    fn secret(&self) -> Result<&str, AttendanceError> {
        if self.0.trim().is_empty() {
            return Err(AttendanceError::MissingCredential);
        }
        Ok(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_secret_is_missing() {
        assert_eq!(
            SecretWord::new("   ").secret(),
            Err(AttendanceError::MissingCredential)
        );
        assert_eq!(SecretWord::default().secret(), Err(AttendanceError::MissingCredential));
    }

    #[test]
    fn secret_is_passed_through_untrimmed() {
        assert_eq!(SecretWord::new(" word ").secret(), Ok(" word "));
    }
}
