//! Feste Grenzwerte der Anwendung

/// Maximale Laenge einer Chat-Nachricht in Unicode-Codepoints
pub const MAX_NACHRICHT_ZEICHEN: usize = 4000;

/// Zaehlt die Unicode-Codepoints eines Textes (nicht die UTF-8-Bytes)
pub fn zeichen_anzahl(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zaehlt_codepoints_statt_bytes() {
        assert_eq!(zeichen_anzahl("abc"), 3);
        assert_eq!(zeichen_anzahl("Привет"), 6);
        assert_eq!("Привет".len(), 12);
        assert_eq!(zeichen_anzahl("🚀"), 1);
    }
}
