use criterion::{black_box, criterion_group, criterion_main, Criterion};
use em_decoder::{analyse_sequence_pairs, Decoder, Lexicon, SequencePair};
use std::io;

fn cat_dog_sequence_pairs() -> Vec<SequencePair> {
    let lines = [
        ("cat", "q w e"),
        ("dog", "z x c"),
        ("ca", "q w"),
        ("at", "w e"),
        ("do", "z x"),
        ("og", "x c"),
    ];

    (0..50)
        .flat_map(|_| lines.iter())
        .map(|(plaintext_line, cipher_line)| SequencePair::from_lines(plaintext_line, cipher_line))
        .collect()
}

fn benchmark_analyse(c: &mut Criterion) {
    let sequence_pairs = cat_dog_sequence_pairs();

    c.bench_function("analyse_sequence_pairs", |b| {
        b.iter(|| analyse_sequence_pairs(black_box(&sequence_pairs), &mut io::sink()))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let lexicon: Lexicon = analyse_sequence_pairs(&cat_dog_sequence_pairs(), &mut io::sink())
        .expect("Failed to analyse");
    let decoder = Decoder::new(&lexicon);

    c.bench_function("decode_line", |b| {
        b.iter(|| decoder.decode_line(black_box("q w e z x c x c z e w q k")))
    });
}

criterion_group!(benches, benchmark_analyse, benchmark_decode);
criterion_main!(benches);
