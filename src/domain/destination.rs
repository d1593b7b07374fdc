//! Destination channel extraction from free-form command text.

/// Extract destination channel identifiers from the `channels` option.
///
/// Channel mentions (`<#123>`) win: when any are present, every mention is
/// returned in order of appearance and other text is ignored. Otherwise the
/// text is split on commas and whitespace and each non-empty token is taken
/// as a literal identifier. Duplicates are kept.
#[must_use]
pub fn extract_destinations(raw: &str) -> Vec<String> {
    let mentions = channel_mentions(raw);
    if !mentions.is_empty() {
        return mentions;
    }

    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn channel_mentions(raw: &str) -> Vec<String> {
    let mut ids = Vec::new();
    let mut rest = raw;

    while let Some(start) = rest.find("<#") {
        let after = &rest[start + 2..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits > 0 && after[digits..].starts_with('>') {
            ids.push(after[..digits].to_string());
            rest = &after[digits + 1..];
        } else {
            rest = &rest[start + 1..];
        }
    }

    ids
}
