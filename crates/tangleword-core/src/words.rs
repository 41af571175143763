//! Built-in word table.
//!
//! Pure data: the shipped three-letter words and their category labels, in
//! the canonical (alphabetical) order. Generation iterates the table in this
//! order, so reordering entries changes which puzzle a seed produces.

pub(crate) const WORDS: &[(&str, &str)] = &[
    ("aah", "exclamation"),
    ("abs", "body part"),
    ("ace", "excellent"),
    ("ach", "exclamation"),
    ("act", "verb"),
    ("add", "verb"),
    ("ads", "annoyance"),
    ("adz", "tool"),
    ("aha", "exclamation"),
    ("ana", "name"),
    ("ann", "name"),
    ("arm", "body part"),
    ("axe", "tool"),
    ("baa", "exclamation"),
    ("bad", "adjective"),
    ("bar", "place"),
    ("bat", "animal"),
    ("bay", "place"),
    ("bed", "furniture"),
    ("bee", "animal"),
    ("ben", "name"),
    ("bet", "verb"),
    ("bid", "verb"),
    ("big", "adjective"),
    ("bin", "furniture"),
    ("bob", "name"),
    ("bog", "place"),
    ("boo", "exclamation"),
    ("bow", "clothing"),
    ("bra", "clothing"),
    ("brr", "exclamation"),
    ("bug", "animal"),
    ("bum", "body part"),
    ("bus", "transportation"),
    ("buy", "verb"),
    ("cab", "transportation"),
    ("cap", "clothing"),
    ("car", "transportation"),
    ("cat", "animal"),
    ("cis", "adjective"),
    ("cob", "food"),
    ("cod", "food"),
    ("cot", "furniture"),
    ("cry", "verb"),
    ("cue", "verb"),
    ("dog", "animal"),
    ("ear", "body part"),
    ("ewe", "animal"),
    ("eye", "body part"),
    ("fat", "adjective"),
    ("fit", "adjective"),
    ("fix", "verb"),
    ("fly", "animal"),
    ("fox", "animal"),
    ("fry", "verb"),
    ("fur", "clothing"),
    ("gag", "verb"),
    ("gum", "food"),
    ("gym", "place"),
    ("ham", "food"),
    ("hat", "clothing"),
    ("her", "pronoun"),
    ("him", "pronoun"),
    ("hip", "body part"),
    ("his", "pronoun"),
    ("hit", "verb"),
    ("hmm", "exclamation"),
    ("hoe", "tool"),
    ("hub", "place"),
    ("hum", "verb"),
    ("icy", "adjective"),
    ("jam", "food"),
    ("jog", "verb"),
    ("lip", "body part"),
    ("mix", "verb"),
    ("oar", "tool"),
    ("oat", "food"),
    ("och", "exclamation"),
    ("odd", "adjective"),
    ("our", "pronoun"),
    ("oxo", "food"),
    ("pay", "verb"),
    ("pea", "food"),
    ("say", "verb"),
    ("soy", "food"),
    ("ted", "name"),
    ("tod", "name"),
    ("toe", "body part"),
    ("tsk", "exclamation"),
    ("tut", "exclamation"),
    ("tux", "clothing"),
    ("ugh", "exclamation"),
    ("uni", "place"),
    ("use", "verb"),
    ("vac", "tool"),
    ("van", "transportation"),
    ("vet", "place"),
    ("wet", "adjective"),
    ("yah", "exclamation"),
    ("you", "pronoun"),
    ("zip", "clothing"),
];
