//! City name normalization

/// Trim surrounding whitespace and title-case the remainder.
///
/// Applying it twice yields the same string as applying it once.
pub fn normalize_city(city: &str) -> String {
    title_case(city.trim())
}

/// Title-case `text`.
///
/// A character that follows a cased letter is lower-cased; any other is
/// mapped to its titlecase form. Digits and punctuation are uncased, so
/// "3rd" becomes "3Rd". Multi-character upper-case expansions without a
/// dedicated titlecase form keep only their first character upper-case.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if previous_cased {
            // Word-final capital sigma
            if c == 'Σ' && !chars.peek().copied().is_some_and(is_cased) {
                out.push('ς');
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            push_titlecase(c, &mut out);
        }
        previous_cased = is_cased(c);
    }

    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || titlecase_letter(c) == Some(c)
}

fn push_titlecase(c: char, out: &mut String) {
    if let Some(expansion) = titlecase_expansion(c) {
        out.push_str(expansion);
        return;
    }
    if let Some(title) = titlecase_letter(c) {
        out.push(title);
        return;
    }

    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Single-character titlecase forms that differ from the upper-case mapping
fn titlecase_letter(c: char) -> Option<char> {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        // Greek with ypogegrammeni
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => Some(c),
        '\u{1FB3}' | '\u{1FBC}' => Some('\u{1FBC}'),
        '\u{1FC3}' | '\u{1FCC}' => Some('\u{1FCC}'),
        '\u{1FF3}' | '\u{1FFC}' => Some('\u{1FFC}'),
        _ => None,
    }
}

/// Multi-character titlecase forms
fn titlecase_expansion(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("Ss"),
        'ŉ' => Some("ʼN"),
        'ﬀ' => Some("Ff"),
        'ﬁ' => Some("Fi"),
        'ﬂ' => Some("Fl"),
        'ﬃ' => Some("Ffi"),
        'ﬄ' => Some("Ffl"),
        'ﬅ' | 'ﬆ' => Some("St"),
        'և' => Some("Եւ"),
        'ﬓ' => Some("Մն"),
        'ﬔ' => Some("Մե"),
        'ﬕ' => Some("Մի"),
        'ﬖ' => Some("Վն"),
        'ﬗ' => Some("Մխ"),
        _ => None,
    }
}

/// Human-readable label for a snake_case identifier ("middle_aged" -> "Middle Aged")
pub fn humanize(identifier: &str) -> String {
    title_case(&identifier.replace('_', " "))
}
