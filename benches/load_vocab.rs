//! This bench loads a large generated vocabulary file, with and without a
//! predicate, to measure line parsing and the final sort.

#![allow(missing_docs)]

use std::{fs, path::Path};

use criterion::{Criterion, criterion_group, criterion_main};
use ste100vocab::{Vocab, WordStatus};
use tempfile::TempDir;

const WORDS: usize = 20_000;

/// Writes `WORDS` entries in reverse name order so the sort has work to do.
fn preseed_file(path: &Path) {
    let mut contents = String::new();
    for i in (0..WORDS).rev() {
        let status = if i % 3 == 0 { "rejected" } else { "approved" };
        contents.push_str(&format!(
            r#"{{"name":"WORD{i:05}","status":"{status}","type_":"n","meanings":[{{"value":"MEANING {i}","ste_example":"USE WORD{i:05}."}}],"alternatives":[{{"name":"ALT{i:05}","type_":"v"}}],"source":"STE100:9"}}"#
        ));
        contents.push('\n');
    }
    fs::write(path, contents).unwrap();
}

fn load_vocab(c: &mut Criterion) {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("vocab.jsonl");
    preseed_file(&path);

    c.bench_function("load vocab", |b| {
        b.iter(|| {
            Vocab::builder()
                .use_builtin_base(false)
                .file(&path)
                .load()
                .unwrap()
        });
    });

    c.bench_function("load vocab with predicate", |b| {
        b.iter(|| {
            Vocab::builder()
                .use_builtin_base(false)
                .file(&path)
                .predicate(|word| word.status() == WordStatus::Approved)
                .load()
                .unwrap()
        });
    });
}

criterion_group!(benches, load_vocab);
criterion_main!(benches);
