//! Fixed-point salary arithmetic.
//!
//! Salaries are stored as integer cents (two fractional digits). All
//! rounding is half-up (ties away from zero), and the salary-to-average
//! percentage is computed by dividing at four fractional digits with
//! half-up rounding, scaling by 100, and truncating toward zero. Keeping
//! the arithmetic on integers makes those rounding rules exact.

/// A monetary amount in cents (two-digit fixed point).
pub type Cents = i64;

/// Parse a decimal literal (e.g. `60000`, `45000.5`, `-0.005`) into cents,
/// rounding half-up at the second fractional digit.
///
/// Returns `None` for blank or malformed input; the record decoder treats
/// that as an absent value rather than failing the row.
pub fn parse_cents(raw: &str) -> Option<Cents> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut cents: i128 = 0;
    for b in int_part.bytes() {
        cents = cents.checked_mul(10)?.checked_add(i128::from(b - b'0'))?;
    }
    cents = cents.checked_mul(100)?;
    let mut frac = frac_part.bytes();
    if let Some(b) = frac.next() {
        cents = cents.checked_add(i128::from(b - b'0') * 10)?;
    }
    if let Some(b) = frac.next() {
        cents = cents.checked_add(i128::from(b - b'0'))?;
    }
    // Half-up at the second fractional digit: the third digit decides.
    if let Some(b) = frac.next() {
        if b - b'0' >= 5 {
            cents = cents.checked_add(1)?;
        }
    }
    if negative {
        cents = -cents;
    }
    Cents::try_from(cents).ok()
}

/// Integer division rounded half-up (ties away from zero).
pub fn div_half_up(num: i128, den: i128) -> i128 {
    let q = num / den;
    let r = num % den;
    if r == 0 {
        return q;
    }
    if r.abs() * 2 >= den.abs() {
        if (num < 0) != (den < 0) {
            q - 1
        } else {
            q + 1
        }
    } else {
        q
    }
}

/// Arithmetic mean of a non-empty slice of cents, rounded half-up to cents.
pub fn average_cents(values: &[Cents]) -> Cents {
    let sum: i128 = values.iter().map(|v| i128::from(*v)).sum();
    div_half_up(sum, values.len() as i128) as Cents
}

/// Salary expressed as an integer percentage of the average.
///
/// Divides at four fractional digits (the sum of the two operands' scales)
/// with half-up rounding, multiplies by 100, and truncates toward zero.
pub fn percent_of(salary: Cents, average: Cents) -> i64 {
    let ratio4 = div_half_up(i128::from(salary) * 10_000, i128::from(average));
    (ratio4 * 100 / 10_000) as i64
}
