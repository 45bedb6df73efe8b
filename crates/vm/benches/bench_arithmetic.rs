//! Benchmark for testing VM dispatch throughput on straight-line arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minievm_vm::core::vm::VM;

/// Builds a program that pushes two operands and folds them with `opcode`, `rounds` times.
fn program(opcode: u8, rounds: usize) -> Vec<u8> {
    let mut bytecode = vec![0x60, 0x01];
    for _ in 0..rounds {
        bytecode.extend_from_slice(&[0x60, 0x03, opcode]);
    }
    bytecode
}

fn test_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("minievm_vm");

    group.sample_size(500);
    for (name, opcode) in [("add", 0x01), ("mul", 0x02), ("shl", 0x1b), ("xor", 0x18)] {
        let bytecode = program(opcode, 10_000);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let mut vm = VM::new(black_box(&bytecode));
                let result = vm.run().expect("vm panic");
                assert_eq!(result.stack.len(), 1);
                result
            });
        });
    }

    group.finish();
}

fn test_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("minievm_vm");

    // MSTORE a word at every 32-byte slot of the first 64KiB
    let mut bytecode = Vec::new();
    for offset in (0..0x10000u32).step_by(32) {
        bytecode.extend_from_slice(&[0x60, 0xff, 0x62]);
        bytecode.extend_from_slice(&offset.to_be_bytes()[1..]);
        bytecode.push(0x52);
    }

    group.sample_size(100);
    group.bench_function(BenchmarkId::from_parameter("mstore"), |b| {
        b.iter(|| {
            let mut vm = VM::new(black_box(&bytecode));
            vm.run().expect("vm panic")
        });
    });

    group.finish();
}

criterion_group!(benches, test_arithmetic, test_memory);
criterion_main!(benches);
