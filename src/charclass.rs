//! Character classes used by the diversity rules.

/// The four character categories a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Classifies a single character.
    ///
    /// Special means printable ASCII (32..=126) that is not alphanumeric, so
    /// space counts while control characters and non-ASCII do not.
    /// Returns `None` for characters outside every class.
    pub fn of(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if (' '..='~').contains(&c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Upper => 1,
            CharClass::Lower => 1 << 1,
            CharClass::Digit => 1 << 2,
            CharClass::Special => 1 << 3,
        }
    }
}

/// Set of classes present in a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn of_chars(chars: &[char]) -> Self {
        chars
            .iter()
            .filter_map(|&c| CharClass::of(c))
            .fold(ClassSet::default(), |set, class| set.with(class))
    }

    pub fn with(self, class: CharClass) -> Self {
        ClassSet(self.0 | class.bit())
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Number of distinct classes present (0..=4).
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == CharClass::ALL.len()
    }

    pub fn missing(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| !self.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_classify_ascii() {
        assert_eq!(CharClass::of('Q'), Some(CharClass::Upper));
        assert_eq!(CharClass::of('q'), Some(CharClass::Lower));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('@'), Some(CharClass::Special));
        assert_eq!(CharClass::of('~'), Some(CharClass::Special));
    }

    #[test]
    fn test_space_is_special() {
        assert_eq!(CharClass::of(' '), Some(CharClass::Special));
    }

    #[test]
    fn test_unclassified_characters() {
        assert_eq!(CharClass::of('\t'), None);
        assert_eq!(CharClass::of('\r'), None);
        assert_eq!(CharClass::of('\u{7f}'), None);
        assert_eq!(CharClass::of('é'), None);
        assert_eq!(CharClass::of('Ж'), None);
    }

    #[test]
    fn test_class_set_counts() {
        assert_eq!(ClassSet::of_chars(&chars("")).len(), 0);
        assert!(ClassSet::of_chars(&chars("")).is_empty());
        assert_eq!(ClassSet::of_chars(&chars("password")).len(), 1);
        assert_eq!(ClassSet::of_chars(&chars("Heslo123")).len(), 3);
        assert!(ClassSet::of_chars(&chars("Ab1!")).is_complete());
    }

    #[test]
    fn test_class_set_missing() {
        let set = ClassSet::of_chars(&chars("abc1"));
        let missing: Vec<_> = set.missing().collect();
        assert_eq!(missing, vec![CharClass::Upper, CharClass::Special]);
    }
}
