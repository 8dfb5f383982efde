//! The embedded project table.
//!
//! Entries are listed in display order. Editing this table is the only way
//! the built-in catalog changes; there is no runtime mutation.

use super::Project;
use std::borrow::Cow;

// Foster Academy has no image of its own yet; the entry stays imageless
// rather than pointing at an asset the site does not ship.
static PROJECTS: &[Project] = &[
    Project {
        title: Cow::Borrowed("BFSIO"),
        description: Cow::Borrowed("IaaS Research Collection"),
        href: Some(Cow::Borrowed("https://bfsio.net/")),
        img_src: Some(Cow::Borrowed("/static/images/bfsio.png")),
    },
    Project {
        title: Cow::Borrowed("Foster Academy"),
        description: Cow::Borrowed(
            "Computer science curriculum for young adults in foster care to learn \
             the basics of computer science and programming.",
        ),
        href: Some(Cow::Borrowed("https://foster-academy.github.io/")),
        img_src: None,
    },
];

/// The projects shown on the site, in display order. Returns the same slice
/// on every call.
pub fn projects() -> &'static [Project] {
    PROJECTS
}
