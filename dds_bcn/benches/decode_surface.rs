use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dds_bcn::{decode_surface, DecodeOptions, FormatCode, SurfaceGeometry};

fn criterion_benchmark(c: &mut Criterion) {
    // Random looking blocks exercise more BC6H and BC7 modes than zeros.
    let data: Vec<u8> = (0..512 * 512 * 2u32)
        .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
        .collect();

    for (name, format) in [
        ("decode_surface_bc1", FormatCode::four_cc(b"DXT1")),
        ("decode_surface_bc3", FormatCode::four_cc(b"DXT5")),
        ("decode_surface_bc5", FormatCode::four_cc(b"ATI2")),
        ("decode_surface_bc6h", FormatCode::Dxgi(95)),
        ("decode_surface_bc7", FormatCode::Dxgi(98)),
    ] {
        let geometry = SurfaceGeometry {
            width: 512,
            height: 512,
            mip_count: 10,
            format,
        };
        c.bench_function(name, |b| {
            b.iter(|| {
                decode_surface(
                    black_box(&data[..]),
                    black_box(&geometry),
                    &DecodeOptions::default(),
                )
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
