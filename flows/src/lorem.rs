//! Lorem ipsum placeholder text.
//!
//! [`LoremIpsum`] builds sentences from a small Latin vocabulary: one to
//! four comma-separated clauses of three to six distinct words, capitalized,
//! ending in `.` or `?`. A paragraph is five to ten such sentences.
//!
//! [`generate_placeholder`] turns any [`ParagraphSource`] into text of an
//! exact length.

use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng, SeedableRng as _};

const WORDS: [&str; 29] = [
    "adipisci",
    "aliquam",
    "amet",
    "consectetur",
    "dolor",
    "dolore",
    "dolorem",
    "eius",
    "est",
    "et",
    "incidunt",
    "ipsum",
    "labore",
    "magnam",
    "modi",
    "neque",
    "non",
    "numquam",
    "porro",
    "quaerat",
    "qui",
    "quia",
    "quisquam",
    "sed",
    "sit",
    "tempora",
    "ut",
    "velit",
    "voluptatem",
];

/// Produces blocks of filler text.
pub trait ParagraphSource {
    /// Returns one generated paragraph.
    fn paragraph(&mut self) -> String;
}

/// Random lorem ipsum generator.
#[derive(Debug, Clone)]
pub struct LoremIpsum<R = StdRng> {
    rng: R,
}

impl LoremIpsum<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for LoremIpsum<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LoremIpsum<R> {
    /// Creates a generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// A single lower-case word.
    pub fn word(&mut self) -> &'static str {
        WORDS[self.rng.gen_range(0..WORDS.len())]
    }

    /// A capitalized sentence ending in `.` or `?`.
    pub fn sentence(&mut self) -> String {
        let clauses = self.rng.gen_range(1..=4);
        let mut sentence = String::new();

        for i in 0..clauses {
            if i > 0 {
                sentence.push_str(", ");
            }
            let count = self.rng.gen_range(3..=6);
            let words: Vec<&str> = WORDS
                .choose_multiple(&mut self.rng, count)
                .copied()
                .collect();
            sentence.push_str(&words.join(" "));
        }

        let terminator = if self.rng.gen_bool(0.5) { '.' } else { '?' };
        sentence.push(terminator);
        capitalize(&sentence)
    }
}

impl<R: Rng> ParagraphSource for LoremIpsum<R> {
    fn paragraph(&mut self) -> String {
        let count = self.rng.gen_range(5..=10);
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates exactly `characters` characters of placeholder text.
///
/// Paragraphs are appended, each followed by a single space, until the text
/// is long enough, then the result is cut to length. The cut ignores word
/// boundaries. `characters <= 0` yields an empty string.
///
/// Length is counted in `char`s, so a cut never splits a UTF-8 sequence.
pub fn generate_placeholder(characters: i64, source: &mut dyn ParagraphSource) -> String {
    if characters <= 0 {
        return String::new();
    }
    let target = usize::try_from(characters).unwrap_or(usize::MAX);

    let mut text = String::new();
    let mut len = 0_usize;
    while len < target {
        let paragraph = source.paragraph();
        len += paragraph.chars().count() + 1;
        text.push_str(&paragraph);
        text.push(' ');
    }

    if let Some((end, _)) = text.char_indices().nth(target) {
        text.truncate(end);
    }
    text
}
