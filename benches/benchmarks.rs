//! Benchmarks tests for measuring the performance of the code

use std::borrow::Cow;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use mmpgen::{
    domain::{
        library::{LinkKind, LinkLibrary},
        resource::{BitmapResource, BitmapSource, GenericResource, SymbianResource},
        target::TargetKind,
    },
    generator::{render_target, GenerationContext},
    project_model::{project::ProjectModel, sourceset::SourceSet, target::TargetModel},
    utils::constants::DEFAULT_HEADER_EXTENSIONS,
};

fn mocked_project() -> ProjectModel<'static> {
    ProjectModel {
        name: Cow::Borrowed("bench"),
        header_extensions: DEFAULT_HEADER_EXTENSIONS
            .iter()
            .map(|ext| Cow::Borrowed(*ext))
            .collect(),
        compile_definitions: Some(Cow::Borrowed("A=1;B=2;C")),
        include_dirs: (0..20)
            .map(|i| PathBuf::from(format!("/project/inc/module_{i}")))
            .collect(),
    }
}

fn mocked_target() -> TargetModel<'static> {
    let mut target = TargetModel::new(
        "bench",
        TargetKind::Executable,
        PathBuf::from("/project/group"),
    );
    target.sources = (0..500)
        .map(|i| PathBuf::from(format!("/project/src/unit_{i}.cpp")))
        .chain((0..100).map(|i| PathBuf::from(format!("/project/inc/unit_{i}.h"))))
        .collect::<SourceSet>();
    target.libraries = (0..50)
        .map(|i| LinkLibrary::new(format!("lib_{i}"), LinkKind::Import))
        .collect();
    target.resources = vec![
        SymbianResource::Generic(GenericResource {
            source: PathBuf::from("/project/data/bench.rss"),
            header: true,
            ..Default::default()
        }),
        SymbianResource::Bitmap(BitmapResource {
            target: Cow::Borrowed("bench.mbm"),
            target_path: None,
            header: false,
            sources: (0..10)
                .map(|i| BitmapSource {
                    depth: Cow::Borrowed("c24"),
                    file: PathBuf::from(format!("/project/gfx/icon_{i}.bmp")),
                })
                .collect(),
        }),
    ];
    target
}

pub fn render_descriptor_benchmark(c: &mut Criterion) {
    let project = mocked_project();
    let definitions = IndexMap::from([(
        Cow::Borrowed("bench_SYMBIAN_UID"),
        Cow::Borrowed("0x100039CE 0xE0000001"),
    )]);
    let ctx = GenerationContext::new(&project, &definitions);
    let target = mocked_target();

    c.bench_function("Render a .mmp descriptor", |b| {
        b.iter(|| render_target(black_box(&target), black_box(&ctx)))
    });
}

criterion_group!(benches, render_descriptor_benchmark);
criterion_main!(benches);
