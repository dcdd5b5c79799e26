//! Address fragments: street names, optional street suffixes and the
//! state → district table.

/// Street names (`Jalan`, `Lorong`, `Persiaran`, `Lengkok`, `Lebuhraya`).
pub const STREET_NAMES: &[&str] = &[
    "Jalan Merdeka", "Jalan Sultan", "Jalan Dato", "Jalan Pahlawan", "Jalan Harmoni",
    "Jalan Indah", "Jalan Cemerlang", "Jalan Bakti", "Jalan Rahmat", "Jalan Sejahtera",
    "Jalan Mawar", "Jalan Melati", "Jalan Kenanga", "Jalan Teratai", "Jalan Angsana",
    "Jalan Delima", "Jalan Zamrud", "Jalan Permata", "Jalan Mutiara", "Jalan Berlian",
    "Lorong Dato", "Lorong Indah", "Lorong Harmoni", "Lorong Cemerlang", "Lorong Bakti",
    "Lorong Mawar", "Lorong Melati", "Lorong Kenanga", "Lorong Teratai", "Lorong Angsana",
    "Lorong Delima", "Lorong Zamrud", "Lorong Permata", "Lorong Mutiara", "Lorong Berlian",
    "Persiaran Raja", "Persiaran Harmoni", "Persiaran Merdeka", "Persiaran Indah",
    "Persiaran Cemerlang", "Persiaran Bakti", "Persiaran Sejahtera", "Persiaran Mawar",
    "Persiaran Melati", "Persiaran Kenanga", "Persiaran Teratai", "Persiaran Angsana",
    "Persiaran Delima", "Persiaran Zamrud", "Persiaran Permata",
    "Lengkok Dato", "Lengkok Indah", "Lengkok Harmoni",
    "Lebuhraya Merdeka", "Lebuhraya Sultan", "Lebuhraya Dato",
];

/// Street suffixes. The empty entry means "no suffix".
pub const STREET_TYPES: &[&str] = &[
    "", "Utama", "Baru", "Lama", "Tengah", "Depan", "Belakang", "Samping", "Timur", "Barat",
    "Selatan", "Utara", "Atas", "Bawah", "Dalam", "Luar", "Kecil", "Besar", "Pertama", "Kedua",
    "Ketiga", "Utama", "Tambahan", "Simpang", "Cabang",
];

/// States and the districts/cities drawn for each.
pub const STATES_AND_DISTRICTS: &[(&str, &[&str])] = &[
    (
        "Selangor",
        &[
            "Shah Alam", "Petaling Jaya", "Klang", "Subang Jaya", "Kajang", "Cyberjaya",
            "Puchong", "Sepang", "Rawang", "Dengkil",
        ],
    ),
    (
        "Kuala Lumpur",
        &[
            "Kuala Lumpur City", "Sentul", "Cheras", "Kepong", "Ampang", "Setapak", "Titiwangsa",
            "Bukit Bintang", "Wangsa Maju",
        ],
    ),
    (
        "Johor",
        &[
            "Johor Bahru", "Iskandar Puteri", "Muar", "Batu Pahat", "Kluang", "Segamat",
            "Pontian", "Mersing", "Kulai",
        ],
    ),
    (
        "Penang",
        &[
            "George Town", "Bayan Lepas", "Butterworth", "Seberang Perai", "Balik Pulau",
            "Jelutong", "Air Itam",
        ],
    ),
    (
        "Perak",
        &[
            "Ipoh", "Taiping", "Kuala Kangsar", "Seri Manjung", "Teluk Intan", "Kampar", "Lumut",
            "Sitiawan",
        ],
    ),
    (
        "Melaka",
        &["Melaka City", "Alor Gajah", "Jasin", "Batu Berendam", "Ayer Keroh", "Bukit Beruang"],
    ),
    (
        "Pahang",
        &["Kuantan", "Cameron Highlands", "Bentong", "Temerloh", "Pekan", "Raub", "Jerantut"],
    ),
    (
        "Negeri Sembilan",
        &["Seremban", "Port Dickson", "Nilai", "Tampin", "Kuala Pilah"],
    ),
    (
        "Terengganu",
        &["Kuala Terengganu", "Kemaman", "Dungun", "Marang", "Besut"],
    ),
    (
        "Kelantan",
        &["Kota Bharu", "Pasir Mas", "Tanah Merah", "Kuala Krai", "Machang"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_districts() {
        assert_eq!(STATES_AND_DISTRICTS.len(), 10);
        for (state, districts) in STATES_AND_DISTRICTS {
            assert!(!districts.is_empty(), "{state} has no districts");
        }
    }

    #[test]
    fn test_street_types_include_blank_suffix() {
        assert!(STREET_TYPES.contains(&""));
        assert!(STREET_NAMES.iter().all(|name| !name.is_empty()));
    }
}
