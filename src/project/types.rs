//! The `Project` record.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One showcased project.
///
/// `title` and `description` are always present; `href` and `img_src` are
/// independently optional. Text fields are `Cow<'static, str>` so the
/// embedded table can be a `static` slice while catalogs read from TOML own
/// their strings.
///
/// Serializes with camelCase keys (`imgSrc`) and omits absent optionals,
/// matching the shape the site templates consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<Cow<'static, str>>,
}

impl Project {
    /// Build a project with only the required fields.
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Project {
            title: title.into(),
            description: description.into(),
            href: None,
            img_src: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<Cow<'static, str>>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_img_src(mut self, img_src: impl Into<Cow<'static, str>>) -> Self {
        self.img_src = Some(img_src.into());
        self
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in self.description.lines() {
            writeln!(f, "  {}", line.trim())?;
        }
        if let Some(href) = &self.href {
            writeln!(f, "  link:  {}", href)?;
        }
        if let Some(img_src) = &self.img_src {
            writeln!(f, "  image: {}", img_src)?;
        }
        Ok(())
    }
}
