//! Omron → Inovance address mapping for a single address.
//!
//! | Omron          | Inovance           |
//! |----------------|--------------------|
//! | `CIO<w>.<b>`   | `%QX<w>.<b>`       |
//! | `CIO<w>`       | `%QW<w>`           |
//! | `D<w>`         | `%MD<w>`           |
//! | `W<w>.<b>`     | `%MX<w>.<b>`       |
//! | `W<w>`         | `%MW<w>`           |
//! | `H<w>.<b>`     | `%MX<w + 900>.<b>` |
//! | `TIM<n>`/`T<n>`| `%MT<n>`           |
//! | `CNT<n>`/`C<n>`| `%MC<n>`           |
//!
//! Holding bits are moved up by [`HOLDING_OFFSET`] words so they cannot
//! collide with work-area bits that map onto the same `%MX` range.

/// Word offset applied to holding-area (`H`) bits.
pub const HOLDING_OFFSET: u64 = 900;

/// `%MX` word for a holding-area word number, or `None` if it overflows.
pub fn holding_word(word: &str) -> Option<u64> {
    word.parse::<u64>().ok()?.checked_add(HOLDING_OFFSET)
}

/// Convert one declared address.
///
/// The address is trimmed, upper-cased and stripped of a leading `%` before
/// matching; the result always carries the `%` sigil. Addresses outside the
/// known regions come back with only the sigil normalised.
pub fn convert_address(address: &str) -> String {
    let upper = address.trim().to_uppercase();
    let addr = upper.strip_prefix('%').unwrap_or(&upper);

    if let Some(rest) = addr.strip_prefix("CIO") {
        match word_bit(rest) {
            Some((w, Some(b))) => return format!("%QX{w}.{b}"),
            Some((w, None)) => return format!("%QW{w}"),
            None => {}
        }
    }

    if addr.starts_with('D') {
        if let Some(digits) = first_digit_run(addr) {
            return format!("%MD{digits}");
        }
    }

    if let Some(rest) = addr.strip_prefix('W') {
        match word_bit(rest) {
            Some((w, Some(b))) => return format!("%MX{w}.{b}"),
            Some((w, None)) => return format!("%MW{w}"),
            None => {}
        }
    }

    if let Some(rest) = addr.strip_prefix('H') {
        if let Some((w, Some(b))) = word_bit(rest) {
            if let Some(word) = holding_word(w) {
                return format!("%MX{word}.{b}");
            }
        }
    }

    if let Some(n) = timer_counter(addr, &["TIM", "T"]) {
        return format!("%MT{n}");
    }
    if let Some(n) = timer_counter(addr, &["CNT", "C"]) {
        return format!("%MC{n}");
    }

    format!("%{addr}")
}

/// Split `<digits>[.<digits>]...` into word and optional bit.
///
/// Only the leading part has to match; trailing text is ignored.
fn word_bit(s: &str) -> Option<(&str, Option<&str>)> {
    let word = leading_digits(s)?;
    let bit = s[word.len()..]
        .strip_prefix('.')
        .and_then(leading_digits);
    Some((word, bit))
}

/// `<prefix><digits>` with nothing after the digits.
fn timer_counter<'a>(addr: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| {
        let rest = addr.strip_prefix(prefix)?;
        let digits = leading_digits(rest)?;
        (digits.len() == rest.len()).then_some(digits)
    })
}

fn leading_digits(s: &str) -> Option<&str> {
    let len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (len > 0).then(|| &s[..len])
}

fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    leading_digits(&s[start..])
}
