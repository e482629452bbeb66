/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Identifier naming conversions.

use xmppenum_dictionary::EnumMember;

/// Converts a kebab-case token to PascalCase.
///
/// Each hyphen-separated word is title-cased and the words are joined with
/// no separator. Empty words (from leading, trailing or doubled hyphens)
/// contribute nothing.
///
/// # Arguments
/// * `token` - The kebab-case token, e.g. `"bad-format"`
#[must_use]
pub fn kebab_to_pascal(token: &str) -> String {
    let mut result = String::with_capacity(token.len());

    for word in token.split('-') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }

    result
}

/// Returns the identifier a member is declared with.
///
/// An explicit member name wins over the converted wire token.
#[must_use]
pub fn member_identifier(member: &EnumMember) -> String {
    match member.member_name() {
        Some(name) => name.to_string(),
        None => kebab_to_pascal(member.wire_name().unwrap_or_default()),
    }
}
