/// Result of reading a numeric-ish quantity field.
///
/// Quantities are free text in the datastore ("10", " 25 ", "ten", "5 kg").
/// Only whole integers, optionally signed and surrounded by whitespace, count;
/// anything else is `NotANumber` and contributes nothing to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Count(i64),
    NotANumber,
}

impl Quantity {
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(Quantity::Count)
            .unwrap_or(Quantity::NotANumber)
    }

    pub fn count(self) -> Option<i64> {
        match self {
            Quantity::Count(n) => Some(n),
            Quantity::NotANumber => None,
        }
    }
}

/// How much of a requested quantity a donation covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Donation quantity meets or exceeds the need
    Full,
    /// Donation covers at least the partial threshold
    Partial,
    /// Below the partial threshold
    Short,
    /// At least one side did not parse
    Unknown,
}

/// Compare an offered quantity against a needed one.
///
/// `partial_percent` is the share of the need (in percent) a donation must
/// reach to count as partial coverage. The comparison is done in integers
/// (`offered * 100 >= needed * percent`) so threshold cases are exact.
pub fn coverage(needed: Quantity, offered: Quantity, partial_percent: u32) -> Coverage {
    let (Some(needed), Some(offered)) = (needed.count(), offered.count()) else {
        return Coverage::Unknown;
    };

    if offered >= needed {
        Coverage::Full
    } else if i128::from(offered) * 100 >= i128::from(needed) * i128::from(partial_percent) {
        Coverage::Partial
    } else {
        Coverage::Short
    }
}
