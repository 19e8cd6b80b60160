//! Human-readable display strings for identifier-style names.
//!
//! `DrawScale3D` becomes `Draw Scale 3D`, `bIsEnabledForEdit` (as a bool)
//! becomes `Is Enabled for Edit`, `my_var` becomes `My Var`.

/// Short words kept lowercase when they start a word mid-string.
const ARTICLES: &[&str] = &[
    "In", "As", "To", "Or", "At", "On", "If", "Be", "By", "The", "For", "And", "With", "When",
    "From",
];

/// Split `name` into space-separated words.
///
/// Words break before an uppercase letter or digit that follows a
/// lowercase letter; runs of capitals and digits stay together. Underscores
/// become spaces. With `is_bool`, a leading `b` is dropped when the next
/// character is uppercase. Every word starts uppercase except the articles
/// above, which are lowered unless they end the string.
pub fn to_display_string(name: &str, is_bool: bool) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + name.len() / 4);

    // Inside a run of capitals and/or digits.
    let mut in_run = false;
    let mut was_space = false;
    let mut was_open_paren = false;

    for (i, &original) in chars.iter().enumerate() {
        if i == 0 && is_bool && original == 'b' && chars.get(1).is_some_and(|c| c.is_uppercase()) {
            continue;
        }

        let is_lower = original.is_lowercase();
        let is_upper = original.is_uppercase();
        let is_digit = original.is_ascii_digit();

        if (is_upper || is_digit) && !in_run && !was_open_paren {
            if !was_space && !out.is_empty() {
                out.push(' ');
                was_space = true;
            }
            in_run = true;
        }
        if is_lower {
            in_run = false;
        }

        let mut ch = original;
        if ch == '_' {
            ch = ' ';
            in_run = true;
        }

        if out.is_empty() {
            out.extend(ch.to_uppercase());
        } else if was_space || was_open_paren {
            if is_article_at(&chars, i) {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }

        was_space = ch == ' ';
        was_open_paren = ch == '(';
    }
    out
}

/// Whether an article starts at `chars[at]` and is followed by a
/// character that is not lowercase (`In` matches in `InValue`, not in
/// `Instance` or at the end of the string).
fn is_article_at(chars: &[char], at: usize) -> bool {
    ARTICLES.iter().any(|article| {
        let len = article.chars().count();
        chars.get(at + len).is_some_and(|next| !next.is_lowercase())
            && chars[at..at + len].iter().copied().eq(article.chars())
    })
}
