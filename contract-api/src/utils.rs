use crate::errors::Error;

/// Decimals between ether and wei.
pub const DECIMALS: usize = 18;

const UNIT: u128 = 1_000_000_000_000_000_000;

type Result<T> = std::result::Result<T, Error>;

/// Decode `0x` prefixed hex bytes.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);

    Ok(hex::decode(hex_str)?)
}

/// Decode `0x` prefixed hex into text, without the trailing NUL padding of fixed size byte arrays.
pub fn hex_to_utf8(hex_str: &str) -> Result<String> {
    let bytes = hex_to_bytes(hex_str)?;

    let text = String::from_utf8(bytes)?;

    Ok(text.trim_end_matches('\0').to_owned())
}

pub fn utf8_to_hex(text: &str) -> String {
    format!("0x{}", hex::encode(text))
}

/// Convert a decimal amount of ether into wei.
pub fn to_base_units(amount: &str) -> Result<u128> {
    let amount = amount.trim();

    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    let valid = |digits: &str| digits.bytes().all(|b| b.is_ascii_digit());

    if (integer.is_empty() && fraction.is_empty())
        || !valid(integer)
        || !valid(fraction)
        || fraction.len() > DECIMALS
    {
        return Err(Error::Units(amount.to_owned()));
    }

    let overflow = || Error::Units(amount.to_owned());

    let integer: u128 = if integer.is_empty() {
        0
    } else {
        integer.parse().map_err(|_| overflow())?
    };

    let mut padded = fraction.to_owned();
    padded.extend(std::iter::repeat('0').take(DECIMALS - fraction.len()));
    let fraction: u128 = padded.parse().map_err(|_| overflow())?;

    integer
        .checked_mul(UNIT)
        .and_then(|wei| wei.checked_add(fraction))
        .ok_or_else(overflow)
}

/// Convert wei into a decimal amount of ether.
pub fn from_base_units(wei: u128) -> String {
    let integer = wei / UNIT;
    let fraction = wei % UNIT;

    if fraction == 0 {
        return integer.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = DECIMALS);

    format!("{}.{}", integer, fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ether_to_wei() {
        assert_eq!(to_base_units("1").unwrap(), UNIT);
        assert_eq!(to_base_units("1.5").unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(to_base_units("0.000000000000000001").unwrap(), 1);
        assert_eq!(to_base_units(".25").unwrap(), 250_000_000_000_000_000);
        assert_eq!(to_base_units("0").unwrap(), 0);
    }

    #[test]
    fn ether_to_wei_rejects_garbage() {
        assert!(to_base_units("").is_err());
        assert!(to_base_units(".").is_err());
        assert!(to_base_units("1.2.3").is_err());
        assert!(to_base_units("-1").is_err());
        assert!(to_base_units("0.0000000000000000001").is_err());
        assert!(to_base_units("1e18").is_err());
    }

    #[test]
    fn wei_to_ether() {
        assert_eq!(from_base_units(0), "0");
        assert_eq!(from_base_units(UNIT * 3), "3");
        assert_eq!(from_base_units(1_500_000_000_000_000_000), "1.5");
        assert_eq!(from_base_units(1), "0.000000000000000001");
    }

    #[test]
    fn padded_bytes32_to_text() {
        let hex = format!("0x{}{}", hex::encode("Music"), "00".repeat(27));

        assert_eq!(hex_to_utf8(&hex).unwrap(), "Music");
        assert_eq!(utf8_to_hex("Music"), "0x4d75736963");
    }

    #[test]
    fn only_trailing_padding_is_dropped() {
        let hex = format!("0x00{}0000", hex::encode("Art"));

        assert_eq!(hex_to_utf8(&hex).unwrap(), "\0Art");
    }

    #[test]
    fn invalid_hex() {
        assert!(matches!(hex_to_utf8("0xzz"), Err(Error::Hex(_))));
    }
}
