//! Malaysian given names and family names.

/// Given names, male then female.
pub const FIRST_NAMES: &[&str] = &[
    // Male
    "Ahmad", "Muhammad", "Ali", "Ismail", "Abdul", "Mohd", "Azman", "Razak", "Hamid", "Hassan",
    "Rosli", "Kamal", "Aziz", "Rahmat", "Zaki", "Farid", "Hafiz", "Malik", "Ridzuan", "Zainal",
    "Arif", "Firdaus", "Hakim", "Nazri", "Shaiful", "Helmi", "Nizam", "Fauzi", "Hanafi",
    "Khairul",
    // Female
    "Zainab", "Siti", "Fatimah", "Aminah", "Noraini", "Haslinda", "Nurhaliza", "Azura",
    "Sharifah", "Rosmah", "Noor", "Aisyah", "Mariam", "Zarina", "Halimah", "Nur", "Azizah",
    "Suriati", "Ramlah", "Kartini", "Hasanah", "Wardah", "Salmah", "Rohaya", "Norashikin",
    "Zahra", "Suraya", "Laila", "Maimunah",
];

/// Family names.
pub const LAST_NAMES: &[&str] = &[
    "Abdullah", "Ahmad", "Hassan", "Ismail", "Yusof", "Razak", "Hamid", "Ibrahim", "Ali",
    "Karim", "Saad", "Othman", "Hashim", "Malik", "Rahman", "Ariffin", "Bakar", "Jalil",
    "Kassim", "Latif", "Mansor", "Noor", "Ramli", "Salleh", "Taib", "Wahid", "Yaacob",
    "Zainuddin", "Shariff", "Mustafa", "Rahim", "Sulaiman", "Jusoh", "Nawawi", "Daud",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(FIRST_NAMES.len(), 59);
        assert_eq!(LAST_NAMES.len(), 35);
    }

    #[test]
    fn test_names_are_single_ascii_words() {
        for name in FIRST_NAMES.iter().chain(LAST_NAMES) {
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_alphabetic()), "{name}");
        }
    }
}
