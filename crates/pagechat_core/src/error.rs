use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unrecognized role: {0}")]
    UnknownRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_message() {
        let err = CoreError::UnknownRole("moderator".to_string());
        assert_eq!(err.to_string(), "unrecognized role: moderator");
    }
}
