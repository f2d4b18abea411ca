extern crate criterion;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_static::lazy_static;
use pprof::criterion::{Output, PProfProfiler};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use skymap_core::constants::DEFAULT_HEALPIX_STEP;
use skymap_core::healpix;
use skymap_core::prelude::*;
use skymap_core::vis::{pixel_patches, PatchStyle, Pointing};

lazy_static! {
    static ref MAP: SkyMap =
        SkyMap::from_kind(ProjectionKind::Mollweide, 0.0, true, Ellipsoid::celestial());
    static ref POINTINGS: Vec<Pointing> = (0..100)
        .map(|idx| Pointing {
            ra: idx as f64 * 3.6,
            dec: -60.0 + idx as f64 * 0.9,
            mjd: 59580.0 + idx as f64 * 0.001,
            band: "r".into(),
        })
        .collect();
}

fn tissot(lon: f64, lat: f64) {
    let _ = MAP.tissot(lon, lat, 4.0, 100).unwrap();
}

fn tissot_par(lon: f64, lat: f64) {
    let _tmp: Vec<Vec<PlanarPolygon>> = (0..100)
        .into_par_iter()
        .map(|idx| MAP.tissot(lon + idx as f64 * 0.01, lat, 4.0, 100).unwrap())
        .collect();
}

fn healpix_tiles(nside: u64) {
    let pixels: Vec<u64> = (0..healpix::nside2npix(nside)).collect();
    let _ = pixel_patches(
        &MAP,
        &pixels,
        nside,
        DEFAULT_HEALPIX_STEP,
        PatchStyle::default(),
    )
    .unwrap();
}

pub fn footprints(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tissot");

    for (name, lon) in [("Far", 60.0), ("Seam", 180.0)] {
        group.bench_with_input(BenchmarkId::new("Single", name), &lon, |b, lon| {
            b.iter(|| tissot(black_box(*lon), black_box(-20.0)))
        });
        group.bench_with_input(BenchmarkId::new("Parallel", name), &lon, |b, lon| {
            b.iter(|| tissot_par(black_box(*lon), black_box(-20.0)))
        });
    }
}

pub fn tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("HEALPix");

    for nside in [4, 16] {
        group.bench_with_input(BenchmarkId::new("AllTiles", nside), &nside, |b, nside| {
            b.iter(|| healpix_tiles(black_box(*nside)))
        });
    }
}

pub fn images(c: &mut Criterion) {
    let mut group = c.benchmark_group("Images");
    let vis = AllSkyVisualization::default();

    group.bench_function("Parallel", |b| {
        b.iter(|| vis.generate_images(black_box(&POINTINGS)).unwrap())
    });
}

criterion_group!(name=benches;
                 config = Criterion::default().sample_size(30).measurement_time(Duration::from_secs(15)).with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                 targets=footprints, tiles, images);
criterion_main!(benches);
