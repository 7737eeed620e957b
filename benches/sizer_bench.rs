use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::path::Path;
use summenbaum::fs::FsNode;
use summenbaum::sizer::Sizer;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

fn create_test_tree(depth: usize, files_per_dir: usize, dirs_per_level: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    fn create_level(
        path: &Path,
        current_depth: usize,
        max_depth: usize,
        files_per_dir: usize,
        dirs_per_level: usize,
    ) {
        if current_depth >= max_depth {
            return;
        }

        for i in 0..files_per_dir {
            let file_path = path.join(format!("file_{}.txt", i));
            fs::write(&file_path, format!("Test content {}", i)).unwrap();
        }

        for i in 0..dirs_per_level {
            let dir_path = path.join(format!("dir_{}", i));
            fs::create_dir(&dir_path).unwrap();
            create_level(dir_path.as_path(), current_depth + 1, max_depth, files_per_dir, dirs_per_level);
        }
    }

    create_level(temp_dir.path(), 0, depth, files_per_dir, dirs_per_level);
    temp_dir
}

fn benchmark_small_tree(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = create_test_tree(3, 10, 3);

    c.bench_function("size_small_tree", |b| {
        b.iter(|| {
            rt.block_on(async {
                let sizer = Sizer::with_max_workers(4);
                let root = FsNode::root(temp_dir.path());
                black_box(sizer.size(CancellationToken::new(), root).await)
            })
        })
    });
}

fn benchmark_worker_budgets(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = create_test_tree(4, 8, 3);

    let mut group = c.benchmark_group("worker_budgets");
    for workers in [1usize, 2, 5, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                rt.block_on(async {
                    let sizer = Sizer::with_max_workers(workers);
                    let root = FsNode::root(temp_dir.path());
                    black_box(sizer.size(CancellationToken::new(), root).await)
                })
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_small_tree, benchmark_worker_budgets);
criterion_main!(benches);
