//! Pattern based extraction of data embedded in a profile page.
//!
//! The profile page does not expose the tbid or the profile data in its
//! markup. Instead both are part of escaped JSON strings inside inline
//! scripts so they are located through fixed textual patterns.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::{Map, Value};

use crate::{
    error::{Error, Result},
    model::ProfileData,
};

/// `User/` followed by the tbid, up to the next (escaping) backslash.
static TBID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"User/(.*?)\\").expect("invalid tbid regex"));

/// Argument of `JSON.parse` as a complete, possibly escaped, string literal.
static PROFILE_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"profileData = JSON\.parse\("((?:[^"\\]|\\(?s:.))*)"\)"#)
        .expect("invalid profile data regex")
});

const PICKLISTS: &str = "pickLists";

pub fn tbid(username: &str, page: &str) -> Result<Box<str>> {
    TBID.captures(page)
        .and_then(|captures| captures.get(1))
        .map(|tbid| tbid.as_str())
        .filter(|tbid| !tbid.is_empty())
        .map(Box::from)
        .ok_or_else(|| Error::Extraction {
            username: username.into(),
            what: "tbid",
        })
}

pub fn profile_data(username: &str, page: &str, keep_picklists: bool) -> Result<ProfileData> {
    let literal = find_profile_literal(page).ok_or_else(|| Error::Extraction {
        username: username.into(),
        what: "profile data",
    })?;

    let parse_err = |source| {
        let what = format!("profile data for `{username}`; the username may be incorrect");

        Error::parse(what, source)
    };

    // The literal is a JS string so it has to be unescaped before the
    // contained JSON can be parsed.
    let literal = json_escapes(&literal);
    let unescaped: String = serde_json::from_str(&format!("\"{literal}\"")).map_err(parse_err)?;
    let mut data: Map<String, Value> = serde_json::from_str(&unescaped).map_err(parse_err)?;

    if !keep_picklists {
        data.remove(PICKLISTS);
    }

    Ok(ProfileData::from(data))
}

/// Rewrites the escapes of a JS string literal that JSON does not know.
///
/// `\xHH`, `\v`, and `\0` become `\u` escapes, line continuations are
/// dropped, and any other unknown escape such as `\'` is replaced by the
/// escaped character itself.
fn json_escapes(literal: &str) -> Cow<'_, str> {
    if !literal.contains('\\') {
        return Cow::Borrowed(literal);
    }

    let mut escaped = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            escaped.push(c);

            continue;
        }

        match chars.next() {
            Some(c @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')) => {
                escaped.push('\\');
                escaped.push(c);
            }
            // the two hex digits follow as regular characters
            Some('x') => escaped.push_str("\\u00"),
            Some('v') => escaped.push_str("\\u000b"),
            Some('0') => escaped.push_str("\\u0000"),
            Some('\n') => {}
            Some(c) => escaped.push(c),
            None => escaped.push('\\'),
        }
    }

    Cow::Owned(escaped)
}

fn find_profile_literal(page: &str) -> Option<String> {
    let html = Html::parse_document(page);
    let scripts = Selector::parse("script").expect("invalid selector");

    let capture = |text: &str| {
        PROFILE_DATA
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|literal| literal.as_str().to_owned())
    };

    html.select(&scripts)
        .find_map(|script| capture(&script.text().collect::<String>()))
        .or_else(|| capture(page))
}
