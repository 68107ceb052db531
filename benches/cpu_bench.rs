// CPU benchmarks
//
// Measures the per-tick cost of the interpreter across common instruction
// mixes, with a real NROM cartridge behind the bus.

use criterion::{criterion_group, criterion_main, Criterion};
use famicore::{Cartridge, Cpu, CpuBus};
use std::hint::black_box;

/// Build a CPU and bus running `program` as an endless loop at $C000
fn harness(program: &[u8]) -> (Cpu, CpuBus) {
    let mut prg = vec![0u8; 16 * 1024];
    prg[..program.len()].copy_from_slice(program);

    // Jump back to the start after the program body
    let end = program.len();
    prg[end] = 0x4C; // JMP $C000
    prg[end + 1] = 0x00;
    prg[end + 2] = 0xC0;

    prg[0x3FFC] = 0x00; // reset vector -> $C000
    prg[0x3FFD] = 0xC0;

    let mut image = vec![0u8; 16];
    image[0..4].copy_from_slice(b"NES\x1A");
    image[4] = 1;
    image[5] = 0;
    image.extend(prg);

    let mut bus = CpuBus::new();
    bus.insert_cartridge(Cartridge::from_bytes("bench.nes", &image).expect("bench image"));
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus).expect("reset");
    (cpu, bus)
}

fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    group.bench_function("nop_loop", |b| {
        let (mut cpu, mut bus) = harness(&[0xEA, 0xEA, 0xEA, 0xEA]);
        b.iter(|| {
            cpu.tick(black_box(&mut bus)).expect("tick");
        });
    });

    group.bench_function("lda_sta_loop", |b| {
        let (mut cpu, mut bus) = harness(&[0xA9, 0x42, 0x8D, 0x00, 0x02]);
        b.iter(|| {
            cpu.tick(black_box(&mut bus)).expect("tick");
        });
    });

    group.bench_function("adc_loop", |b| {
        let (mut cpu, mut bus) = harness(&[0x69, 0x01, 0x69, 0x01]);
        b.iter(|| {
            cpu.tick(black_box(&mut bus)).expect("tick");
        });
    });

    group.bench_function("indexed_indirect_loop", |b| {
        let (mut cpu, mut bus) = harness(&[0xA1, 0x40, 0xB1, 0x40]);
        b.iter(|| {
            cpu.tick(black_box(&mut bus)).expect("tick");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cpu_instructions);
criterion_main!(benches);
