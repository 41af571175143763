//! Word dictionary with a precomputed category index.
//!
//! The engine treats the dictionary as an injected, read-only resource: a
//! mapping from three-letter word to category label, plus the inverse index
//! from category to its words. [`Dictionary::builtin`] provides the shipped
//! table; custom tables can be supplied through [`Dictionary::from_entries`].

use std::{collections::HashMap, fmt, str::FromStr, sync::OnceLock};

use crate::words;

/// A lowercase three-letter dictionary word.
///
/// Validated on construction, so letters can be used directly as answer
/// bytes.
///
/// # Examples
///
/// ```
/// use tangleword_core::Word;
///
/// let word: Word = "cat".parse()?;
/// assert_eq!(word.letters(), *b"cat");
/// assert_eq!(word.to_string(), "cat");
/// assert!("Cat".parse::<Word>().is_err());
/// assert!("cats".parse::<Word>().is_err());
/// # Ok::<(), tangleword_core::DictionaryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; 3]);

impl Word {
    /// The letters of the word as ASCII bytes.
    #[must_use]
    pub const fn letters(self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let valid = bytes.len() == 3 && bytes.iter().all(u8::is_ascii_lowercase);
        if !valid {
            return Err(DictionaryError::InvalidWord {
                word: s.to_owned(),
            });
        }
        Ok(Self([bytes[0], bytes[1], bytes[2]]))
    }
}

/// Identifier of a category within one [`Dictionary`].
///
/// Ids are dense indices `0..category_count()`, assigned in first-seen
/// order, so per-category bookkeeping can use plain arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(usize);

impl CategoryId {
    /// The dense index of this category.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Errors raised while building a [`Dictionary`] or parsing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DictionaryError {
    /// The word is not exactly three lowercase ASCII letters.
    #[display("invalid word {word:?}: expected three lowercase letters")]
    InvalidWord {
        /// The offending input.
        word: String,
    },
    /// The same word appeared twice in the input table.
    #[display("duplicate word {word}")]
    DuplicateWord {
        /// The repeated word.
        word: Word,
    },
}

/// A read-only word table: word→category plus the category→words inverse.
///
/// Entry order is preserved from construction and is observable through
/// [`entries`](Self::entries); puzzle generation iterates entries in this
/// order, so the order is part of seed reproducibility.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<(Word, CategoryId)>,
    categories: Vec<String>,
    by_category: Vec<Vec<Word>>,
    word_index: HashMap<Word, CategoryId>,
    category_index: HashMap<String, CategoryId>,
}

impl Dictionary {
    /// Builds a dictionary from `(word, category)` pairs.
    ///
    /// Categories are interned in first-seen order; the inverse index is
    /// precomputed here so lookups during search are allocation-free.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidWord`] if a word is not three
    /// lowercase ASCII letters, and [`DictionaryError::DuplicateWord`] if a
    /// word appears twice.
    pub fn from_entries<'a, I>(pairs: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut this = Self {
            entries: Vec::new(),
            categories: Vec::new(),
            by_category: Vec::new(),
            word_index: HashMap::new(),
            category_index: HashMap::new(),
        };
        for (word, category) in pairs {
            let word = Word::from_str(word)?;
            let id = match this.category_index.get(category) {
                Some(&id) => id,
                None => {
                    let id = CategoryId(this.categories.len());
                    this.categories.push(category.to_owned());
                    this.by_category.push(Vec::new());
                    this.category_index.insert(category.to_owned(), id);
                    id
                }
            };
            if this.word_index.insert(word, id).is_some() {
                return Err(DictionaryError::DuplicateWord { word });
            }
            this.entries.push((word, id));
            this.by_category[id.0].push(word);
        }
        Ok(this)
    }

    /// The built-in word table shipped with the engine.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Dictionary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_entries(words::WORDS.iter().copied())
                .expect("built-in word table is valid")
        })
    }

    /// Number of words in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(word, category)` entries in construction order.
    pub fn entries(&self) -> impl Iterator<Item = (Word, CategoryId)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// The label of a category.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this dictionary.
    #[must_use]
    pub fn category_label(&self, id: CategoryId) -> &str {
        &self.categories[id.0]
    }

    /// Looks up a category by its label.
    #[must_use]
    pub fn category_id(&self, label: &str) -> Option<CategoryId> {
        self.category_index.get(label).copied()
    }

    /// The category of `word`, if the word is in the dictionary.
    #[must_use]
    pub fn category_of(&self, word: Word) -> Option<CategoryId> {
        self.word_index.get(&word).copied()
    }

    /// All words in a category, in construction order.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this dictionary.
    #[must_use]
    pub fn words_in(&self, id: CategoryId) -> &[Word] {
        &self.by_category[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_rejects_bad_input() {
        for bad in ["", "ab", "abcd", "Cat", "c4t", "cät"] {
            assert!(bad.parse::<Word>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_builtin_table_loads() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.len(), 101);
        assert_eq!(dict.category_count(), 15);
    }

    #[test]
    fn test_builtin_word_lookup() {
        let dict = Dictionary::builtin();
        let cat = "cat".parse::<Word>().unwrap();
        let animal = dict.category_of(cat).unwrap();
        assert_eq!(dict.category_label(animal), "animal");
        assert!(dict.words_in(animal).contains(&cat));
        assert_eq!(dict.category_id("animal"), Some(animal));
        assert_eq!(dict.category_id("no such category"), None);
    }

    #[test]
    fn test_inverse_index_is_consistent() {
        let dict = Dictionary::builtin();
        let mut total = 0;
        for index in 0..dict.category_count() {
            let id = dict
                .category_id(dict.category_label(CategoryId(index)))
                .unwrap();
            assert_eq!(id.index(), index);
            for &word in dict.words_in(id) {
                assert_eq!(dict.category_of(word), Some(id));
            }
            total += dict.words_in(id).len();
        }
        assert_eq!(total, dict.len());
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let result = Dictionary::from_entries([("cat", "animal"), ("cat", "pet")]);
        assert_eq!(
            result.unwrap_err(),
            DictionaryError::DuplicateWord {
                word: "cat".parse().unwrap()
            }
        );
    }

    #[test]
    fn test_categories_interned_in_first_seen_order() {
        let dict =
            Dictionary::from_entries([("cat", "animal"), ("axe", "tool"), ("dog", "animal")])
                .unwrap();
        assert_eq!(dict.category_count(), 2);
        assert_eq!(dict.category_label(CategoryId(0)), "animal");
        assert_eq!(dict.category_label(CategoryId(1)), "tool");
        let ids: Vec<usize> = dict.entries().map(|(_, id)| id.index()).collect();
        assert_eq!(ids, [0, 1, 0]);
    }
}
