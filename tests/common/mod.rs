//! Shared test helpers for integration tests.

#![allow(dead_code)]

use showcase::project::Catalog;
use showcase::server::{build_router, AppState};

/// Build an Axum test app router over the given catalog, without a static dir.
pub fn build_test_app(catalog: Catalog) -> axum::Router {
    build_router(AppState::new(catalog), None)
}

/// A catalog TOML with three entries covering every optional-field combination.
pub const THREE_PROJECT_TOML: &str = r#"
[[projects]]
title = "BFSIO"
description = "IaaS Research Collection"
href = "https://bfsio.net/"
imgSrc = "/static/images/bfsio.png"

[[projects]]
title = "Foster Academy"
description = "Curriculum for young adults in foster care."
href = "https://foster-academy.github.io/"

[[projects]]
title = "Sketchbook"
description = "Unlinked drawings."
imgSrc = "/static/images/sketchbook.png"
"#;

/// Write `contents` to a fresh temp file and return its handle.
pub fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp catalog");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write temp catalog");
    file
}
