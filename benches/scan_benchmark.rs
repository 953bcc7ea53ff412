use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use codegather::{Pattern, PatternStore, ScanOptions, scan};

fn create_file(dir: &Path, relative: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "export const x = 1;\n").unwrap();
}

/// `modules` feature folders, each with sources, a generated folder and a
/// dependency directory that the defaults prune.
fn setup_project(modules: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "*.generated.ts\ncoverage/\n").unwrap();

    for i in 0..modules {
        let base = format!("packages/mod_{i}");
        for j in 0..10 {
            create_file(temp_dir.path(), &format!("{base}/src/file_{j}.ts"));
            create_file(temp_dir.path(), &format!("{base}/src/file_{j}.generated.ts"));
        }
        create_file(temp_dir.path(), &format!("{base}/coverage/report.ts"));
        create_file(temp_dir.path(), &format!("{base}/node_modules/dep/index.js"));
        fs::write(
            temp_dir.path().join(&base).join(".gitignore"),
            "fixtures/\n",
        )
        .unwrap();
    }

    temp_dir
}

fn benchmark_pattern_compile(c: &mut Criterion) {
    let patterns = [
        "*.log",
        "components/ui/",
        "src/**/file.txt",
        "[!abc]?.rs",
        "**/generated/**",
    ];

    c.bench_function("pattern_compile", |b| {
        b.iter(|| {
            for text in patterns {
                black_box(Pattern::new(black_box(text)));
            }
        });
    });
}

fn benchmark_should_ignore(c: &mut Criterion) {
    let mut store = PatternStore::new("/project");
    store.load_defaults(&["components/ui".to_string(), "*.snap".to_string()]);
    store.register_ignore_file_patterns(
        Path::new("/project/web"),
        &["generated/".to_string(), "*.min.js".to_string()],
    );
    let paths = [
        "src/app/page.tsx",
        "web/generated/api.ts",
        "web/src/vendor/lib.min.js",
        "a/b/c/d/e/f/g.rs",
        "node_modules/pkg/index.js",
    ];

    c.bench_function("should_ignore", |b| {
        b.iter(|| {
            for path in paths {
                black_box(store.should_ignore(black_box(path)));
            }
        });
    });
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let options = ScanOptions::new().with_extensions(["ts", "js"]);

    for modules in [1, 10, 50].iter() {
        let temp_dir = setup_project(*modules);

        group.bench_with_input(BenchmarkId::new("modules", modules), modules, |b, _| {
            b.iter(|| {
                let result = scan(black_box(temp_dir.path()), &options);
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pattern_compile,
    benchmark_should_ignore,
    benchmark_scan
);
criterion_main!(benches);
