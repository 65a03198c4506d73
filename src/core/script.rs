// src/core/script.rs
//! Script normalization: Devanagari and IAST text to a Latin form.
//!
//! Two single-character tables drive the conversion. The search table is
//! deliberately lossy (long vowels shortened, all sibilants folded to `s`)
//! so downstream fuzzy matching works over a narrow alphabet. The display
//! table is lossless IAST. Both apply the same inherent-vowel rule: a
//! Devanagari consonant not followed by a vowel sign or virama carries an
//! implicit "a" the script does not write.

/// Devanagari consonants: basic block plus the nukta extensions.
fn is_devanagari_consonant(c: char) -> bool {
    matches!(c, '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095F}')
}

/// Dependent vowel signs and the virama suppress the inherent vowel.
fn is_vowel_sign_or_virama(c: char) -> bool {
    matches!(c, '\u{093E}'..='\u{094D}' | '\u{0962}'..='\u{0963}')
}

/// Lossy search-tuned fragments. Sibilants collapse to `s`, vowel length is
/// discarded; the phonetic collapser narrows the output further.
fn search_fragment(c: char) -> Option<&'static str> {
    match c {
        // independent vowels
        'अ' => Some("a"), 'आ' => Some("a"), 'इ' => Some("i"), 'ई' => Some("i"),
        'उ' => Some("u"), 'ऊ' => Some("u"), 'ऋ' => Some("ri"), 'ॠ' => Some("ri"),
        'ऌ' => Some("li"), 'ए' => Some("e"), 'ऐ' => Some("ai"), 'ओ' => Some("o"),
        'औ' => Some("au"), 'ऍ' => Some("e"), 'ऑ' => Some("o"),
        // dependent vowel signs and virama
        'ा' => Some("a"), 'ि' => Some("i"), 'ी' => Some("i"), 'ु' => Some("u"),
        'ू' => Some("u"), 'ृ' => Some("ri"), 'ॄ' => Some("ri"), 'ॢ' => Some("li"),
        'े' => Some("e"), 'ै' => Some("ai"), 'ो' => Some("o"), 'ौ' => Some("au"),
        'ॅ' => Some("e"), 'ॉ' => Some("o"), '्' => Some(""),
        // nasalization and other modifiers
        'ं' => Some("n"), 'ँ' => Some("n"), 'ः' => Some("h"), '़' => Some(""),
        'ऽ' => Some(""),
        // consonants
        'क' => Some("k"), 'ख' => Some("kh"), 'ग' => Some("g"), 'घ' => Some("gh"),
        'ङ' => Some("n"), 'च' => Some("ch"), 'छ' => Some("chh"), 'ज' => Some("j"),
        'झ' => Some("jh"), 'ञ' => Some("n"), 'ट' => Some("t"), 'ठ' => Some("th"),
        'ड' => Some("d"), 'ढ' => Some("dh"), 'ण' => Some("n"), 'त' => Some("t"),
        'थ' => Some("th"), 'द' => Some("d"), 'ध' => Some("dh"), 'न' => Some("n"),
        'ऩ' => Some("n"), 'प' => Some("p"), 'फ' => Some("ph"), 'ब' => Some("b"),
        'भ' => Some("bh"), 'म' => Some("m"), 'य' => Some("y"), 'र' => Some("r"),
        'ऱ' => Some("r"), 'ल' => Some("l"), 'ळ' => Some("l"), 'ऴ' => Some("l"),
        'व' => Some("v"), 'श' => Some("s"), 'ष' => Some("s"), 'स' => Some("s"),
        'ह' => Some("h"),
        // nukta consonants
        '\u{0958}' => Some("k"), '\u{0959}' => Some("kh"), '\u{095A}' => Some("g"), '\u{095B}' => Some("j"),
        '\u{095C}' => Some("r"), '\u{095D}' => Some("rh"), '\u{095E}' => Some("f"), '\u{095F}' => Some("y"),
        // digits
        '०' => Some("0"), '१' => Some("1"), '२' => Some("2"), '३' => Some("3"),
        '४' => Some("4"), '५' => Some("5"), '६' => Some("6"), '७' => Some("7"),
        '८' => Some("8"), '९' => Some("9"),
        _ => None,
    }
}

/// Lossless IAST fragments for display.
fn display_fragment(c: char) -> Option<&'static str> {
    match c {
        // independent vowels
        'अ' => Some("a"), 'आ' => Some("ā"), 'इ' => Some("i"), 'ई' => Some("ī"),
        'उ' => Some("u"), 'ऊ' => Some("ū"), 'ऋ' => Some("ṛ"), 'ॠ' => Some("ṝ"),
        'ऌ' => Some("ḷ"), 'ए' => Some("e"), 'ऐ' => Some("ai"), 'ओ' => Some("o"),
        'औ' => Some("au"),
        // dependent vowel signs and virama
        'ा' => Some("ā"), 'ि' => Some("i"), 'ी' => Some("ī"), 'ु' => Some("u"),
        'ू' => Some("ū"), 'ृ' => Some("ṛ"), 'ॄ' => Some("ṝ"), 'ॢ' => Some("ḷ"),
        'े' => Some("e"), 'ै' => Some("ai"), 'ो' => Some("o"), 'ौ' => Some("au"),
        '्' => Some(""),
        // modifiers
        'ं' => Some("ṃ"), 'ँ' => Some("m̐"), 'ः' => Some("ḥ"), '़' => Some(""),
        'ऽ' => Some("'"),
        // consonants
        'क' => Some("k"), 'ख' => Some("kh"), 'ग' => Some("g"), 'घ' => Some("gh"),
        'ङ' => Some("ṅ"), 'च' => Some("c"), 'छ' => Some("ch"), 'ज' => Some("j"),
        'झ' => Some("jh"), 'ञ' => Some("ñ"), 'ट' => Some("ṭ"), 'ठ' => Some("ṭh"),
        'ड' => Some("ḍ"), 'ढ' => Some("ḍh"), 'ण' => Some("ṇ"), 'त' => Some("t"),
        'थ' => Some("th"), 'द' => Some("d"), 'ध' => Some("dh"), 'न' => Some("n"),
        'ऩ' => Some("ṉ"), 'प' => Some("p"), 'फ' => Some("ph"), 'ब' => Some("b"),
        'भ' => Some("bh"), 'म' => Some("m"), 'य' => Some("y"), 'र' => Some("r"),
        'ऱ' => Some("ṟ"), 'ल' => Some("l"), 'ळ' => Some("ḷ"), 'ऴ' => Some("ḻ"),
        'व' => Some("v"), 'श' => Some("ś"), 'ष' => Some("ṣ"), 'स' => Some("s"),
        'ह' => Some("h"),
        // nukta consonants
        '\u{0958}' => Some("q"), '\u{0959}' => Some("kh"), '\u{095A}' => Some("g"), '\u{095B}' => Some("z"),
        '\u{095C}' => Some("ṛ"), '\u{095D}' => Some("ṛh"), '\u{095E}' => Some("f"), '\u{095F}' => Some("y"),
        // digits
        '०' => Some("0"), '१' => Some("1"), '२' => Some("2"), '३' => Some("3"),
        '४' => Some("4"), '५' => Some("5"), '६' => Some("6"), '७' => Some("7"),
        '८' => Some("8"), '९' => Some("9"),
        _ => None,
    }
}

/// IAST diacritics folded to plain Latin, used only by the search pass.
fn iast_plain(c: char) -> Option<&'static str> {
    match c {
        'ā' => Some("a"), 'ī' => Some("i"), 'ū' => Some("u"), 'ṛ' => Some("ri"),
        'ṝ' => Some("ri"), 'ḷ' => Some("li"), 'ḹ' => Some("li"), 'ē' => Some("e"),
        'ō' => Some("o"), 'ṃ' => Some("m"), 'ṁ' => Some("m"), 'ḥ' => Some("h"),
        'ṅ' => Some("n"), 'ñ' => Some("n"), 'ṇ' => Some("n"), 'ṉ' => Some("n"),
        'ṭ' => Some("t"), 'ḍ' => Some("d"), 'ś' => Some("s"), 'ṣ' => Some("s"),
        'ṟ' => Some("r"), 'ḻ' => Some("l"),
        'Ā' => Some("a"), 'Ī' => Some("i"), 'Ū' => Some("u"), 'Ṛ' => Some("ri"),
        'Ś' => Some("s"), 'Ṣ' => Some("s"), 'Ṭ' => Some("t"), 'Ḍ' => Some("d"),
        'Ṇ' => Some("n"), 'Ṃ' => Some("m"), 'Ḥ' => Some("h"),
        _ => None,
    }
}

fn transliterate_with(
    text: &str,
    table: fn(char) -> Option<&'static str>,
    fold_iast: bool,
) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(fragment) = table(c) {
            result.push_str(fragment);
            // Reconstruct the inherent vowel the script leaves unwritten.
            let suppressed = chars.peek().is_some_and(|&next| is_vowel_sign_or_virama(next));
            if is_devanagari_consonant(c) && !suppressed {
                result.push('a');
            }
        } else if fold_iast {
            match iast_plain(c) {
                Some(plain) => result.push_str(plain),
                None => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Lossy transliteration to the plain-Latin phonetic skeleton used for
/// matching. ASCII and unmapped characters pass through verbatim; the
/// output contains no Devanagari or IAST diacritics.
pub fn transliterate_for_search(text: &str) -> String {
    transliterate_with(text, search_fragment, true)
}

/// Lossless Devanagari to IAST for display. Non-Devanagari input passes
/// through unchanged.
pub fn to_display_script(text: &str) -> String {
    transliterate_with(text, display_fragment, false)
}
