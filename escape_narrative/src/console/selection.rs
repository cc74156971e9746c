//! Menu selection parsing.

use thiserror::Error;

/// Why a raw menu selection was rejected. Rejected input never reaches the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid input! Please enter a number.")]
    NotANumber,

    #[error("Invalid choice! Please pick a valid option number.")]
    OutOfRange { choice: usize, count: usize },
}

/// Parse a 1-based menu choice into a 0-based index into `count` options.
pub fn parse_selection(raw: &str, count: usize) -> Result<usize, SelectionError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectionError::NotANumber);
    }

    // All digits, so the only parse failure left is overflow.
    let choice: usize = raw
        .parse()
        .map_err(|_| SelectionError::OutOfRange { choice: usize::MAX, count })?;
    if choice == 0 || choice > count {
        return Err(SelectionError::OutOfRange { choice, count });
    }
    Ok(choice - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selection() {
        assert_eq!(parse_selection("1", 3), Ok(0));
        assert_eq!(parse_selection(" 3\n", 3), Ok(2));
    }

    #[test]
    fn test_non_numeric_selection() {
        assert_eq!(parse_selection("", 3), Err(SelectionError::NotANumber));
        assert_eq!(parse_selection("east", 3), Err(SelectionError::NotANumber));
        assert_eq!(parse_selection("-1", 3), Err(SelectionError::NotANumber));
        assert_eq!(parse_selection("1.5", 3), Err(SelectionError::NotANumber));
    }

    #[test]
    fn test_out_of_range_selection() {
        assert_eq!(
            parse_selection("0", 3),
            Err(SelectionError::OutOfRange { choice: 0, count: 3 })
        );
        assert_eq!(
            parse_selection("4", 3),
            Err(SelectionError::OutOfRange { choice: 4, count: 3 })
        );
        assert!(matches!(
            parse_selection("99999999999999999999999", 3),
            Err(SelectionError::OutOfRange { .. })
        ));
    }
}
