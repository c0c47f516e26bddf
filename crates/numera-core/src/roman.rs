//! Integer to Roman-numeral conversion.
//!
//! Greedy subtraction over a fixed table of value/symbol pairs. The
//! table lists every subtractive pair (CM, CD, XC, XL, IX, IV) as a
//! first-class entry, so the greedy choice never needs backtracking
//! and yields the unique minimal-length subtractive encoding for all
//! integers in `1..=3999`.

/// Smallest convertible value.
pub const MIN_ROMAN: u16 = 1;

/// Largest convertible value.
pub const MAX_ROMAN: u16 = 3999;

/// Value/symbol pairs, sorted by value descending.
const MAPPINGS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Converts an integer to its Roman-numeral representation.
///
/// The caller guarantees `1 <= n <= 3999`; out-of-range values are
/// rejected at the HTTP boundary before reaching this function. Zero
/// yields the empty string (the loop base case, never a valid external
/// input).
#[must_use]
pub fn to_roman(n: u16) -> String {
    debug_assert!(n <= MAX_ROMAN, "caller must bounds-check input");

    let mut remainder = n;
    let mut output = String::new();
    while remainder > 0 {
        // First pair whose value fits; the table order makes this greedy
        // choice canonical.
        for (value, symbol) in MAPPINGS {
            if value <= remainder {
                output.push_str(symbol);
                remainder -= value;
                break;
            }
        }
    }
    output
}
