//! Readability formulas over plain prose

use serde::{Deserialize, Serialize};

/// Standard readability scores for a block of prose
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    pub flesch_kincaid_grade: f64,
    pub flesch_reading_ease: f64,
    pub ari: f64,
    pub coleman_liau: f64,
    pub gunning_fog: f64,
    pub smog: f64,
}

/// Raw counts the formulas are built from
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextCounts {
    pub words: usize,
    pub sentences: usize,
    pub letters: usize,
    pub syllables: usize,
    /// Words with three or more syllables
    pub polysyllables: usize,
}

impl TextCounts {
    pub fn from_prose(prose: &str) -> Self {
        let mut counts = Self {
            sentences: count_sentences(prose),
            ..Self::default()
        };
        for word in prose.split_whitespace() {
            counts.words += 1;
            counts.letters += word.chars().filter(|c| c.is_alphanumeric()).count();
            let syllables = count_syllables(word);
            counts.syllables += syllables;
            if syllables >= 3 {
                counts.polysyllables += 1;
            }
        }
        counts
    }
}

impl Readability {
    pub fn from_counts(counts: &TextCounts) -> Self {
        if counts.words == 0 {
            return Self::default();
        }

        let words = counts.words as f64;
        let sentences = counts.sentences.max(1) as f64;
        let words_per_sentence = words / sentences;
        let syllables_per_word = counts.syllables as f64 / words;
        let letters_per_word = counts.letters as f64 / words;

        Self {
            flesch_kincaid_grade: 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
            flesch_reading_ease: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
            ari: 4.71 * letters_per_word + 0.5 * words_per_sentence - 21.43,
            coleman_liau: 0.0588 * (letters_per_word * 100.0) - 0.296 * (sentences / words * 100.0)
                - 15.8,
            gunning_fog: 0.4 * (words_per_sentence + 100.0 * counts.polysyllables as f64 / words),
            smog: 1.0430 * (counts.polysyllables as f64 * 30.0 / sentences).sqrt() + 3.1291,
        }
    }
}

/// Count `.`, `!` and `?`; non-empty text has at least one sentence.
pub fn count_sentences(text: &str) -> usize {
    let count = text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
    if count == 0 && !text.trim().is_empty() {
        1
    } else {
        count
    }
}

/// Estimate syllables from vowel groups.
///
/// A trailing silent `e` is dropped unless the word ends in `le`. Any word
/// with a letter has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    let silent_e = n > 2
        && letters[n - 1] == 'e'
        && letters[n - 2] != 'l'
        && !is_vowel(letters[n - 2]);
    if silent_e && count > 1 {
        count -= 1;
    }

    count.max(1)
}
