#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use votter::scan::IMAGE_EXTENSIONS;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(32);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Label names that are valid directory names on every platform.
pub fn arb_label() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

/// A qualifying image extension with random letter case.
pub fn arb_image_extension() -> impl Strategy<Value = String> {
    (
        prop::sample::select(IMAGE_EXTENSIONS.to_vec()),
        prop::collection::vec(any::<bool>(), 4),
    )
        .prop_map(|(ext, upper)| {
            ext.chars()
                .zip(upper.into_iter().cycle())
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
}

/// Extensions that never qualify as images.
pub fn arb_other_extension() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,5}".prop_filter("must not be an image extension", |ext| {
        !IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}
