use crate::error::{Error, Result};

pub fn validate_length(what: &str, data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::InvalidInput(format!(
            "Invalid {} length: expected {}, got {}",
            what,
            expected,
            data.len()
        )));
    }
    Ok(())
}

pub fn to_array<const N: usize>(what: &str, data: &[u8]) -> Result<[u8; N]> {
    validate_length(what, data, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(data);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_length() {
        assert!(validate_length("seed", &[0u8; 32], 32).is_ok());

        let err = validate_length("seed", &[0u8; 31], 32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid seed length: expected 32, got 31"
        );
    }

    #[test]
    fn test_to_array() {
        let arr: [u8; 3] = to_array("bytes", &[1, 2, 3]).unwrap();
        assert_eq!(arr, [1, 2, 3]);

        assert!(to_array::<4>("bytes", &[1, 2, 3]).is_err());
    }
}
