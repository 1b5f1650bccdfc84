const NUMERALS: [(u32, &str); 13] = [
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

/// Convert a number to its Roman numeral form. Zero yields an empty
/// string.
pub fn int_to_roman(mut num: u32) -> String {
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while num >= value {
            num -= value;
            out.push_str(numeral);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::int_to_roman;

    #[test]
    fn single_symbols() {
        assert_eq!(int_to_roman(1), "I");
        assert_eq!(int_to_roman(5), "V");
        assert_eq!(int_to_roman(10), "X");
        assert_eq!(int_to_roman(50), "L");
        assert_eq!(int_to_roman(100), "C");
        assert_eq!(int_to_roman(500), "D");
        assert_eq!(int_to_roman(1000), "M");
    }

    #[test]
    fn subtractive_forms() {
        assert_eq!(int_to_roman(4), "IV");
        assert_eq!(int_to_roman(9), "IX");
        assert_eq!(int_to_roman(40), "XL");
        assert_eq!(int_to_roman(90), "XC");
        assert_eq!(int_to_roman(400), "CD");
        assert_eq!(int_to_roman(900), "CM");
    }

    #[test]
    fn reference_values() {
        assert_eq!(int_to_roman(14), "XIV");
        assert_eq!(int_to_roman(58), "LVIII");
        assert_eq!(int_to_roman(1994), "MCMXCIV");
        assert_eq!(int_to_roman(2024), "MMXXIV");
        assert_eq!(int_to_roman(3999), "MMMCMXCIX");
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(int_to_roman(0), "");
    }
}
