#![no_main]

use libfuzzer_sys::fuzz_target;
use refnorm::{Normalizer, Record};

const KEYS: [&str; 10] = [
    "author",
    "editor",
    "translator",
    "title",
    "booktitle",
    "container",
    "date",
    "volume",
    "pages",
    "publisher",
];

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let normalizer = Normalizer::default();

    let mid = (0..=text.len() / 2)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let (first, second) = text.split_at(mid);
    let record: Record = KEYS
        .iter()
        .map(|key| (*key, refnorm::Value::fragments([first, second])))
        .collect();

    // A recovered panic is still a bug; surface it to the fuzzer.
    let report = normalizer.normalize_report(record);
    if let Some(diagnostic) = report
        .diagnostics
        .iter()
        .find(|d| d.message.contains("panicked"))
    {
        panic!("{diagnostic}");
    }
});
