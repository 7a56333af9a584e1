use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsvclip::{detect, Delimiter, DsvParser, SessionCodec, SessionSnapshot};
use dsvclip::{Dataset, ParsedTable};

fn sample_text(rows: usize) -> String {
    let mut text = String::from("id,name,email,note\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{i},\"Name, {i}\",user{i}@example.com,\"says \"\"hi\"\"\"\n"
        ));
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1000, 10000].iter() {
        let text = sample_text(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let table = DsvParser::new(Delimiter::Comma).parse(text);
                black_box(table);
            });
        });
    }

    group.finish();
}

fn benchmark_detect(c: &mut Criterion) {
    let text = sample_text(1000);
    c.bench_function("detect", |b| {
        b.iter(|| black_box(detect(&text)));
    });
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in [100, 1000].iter() {
        let table = DsvParser::new(Delimiter::Comma).parse(&sample_text(*size));
        let snapshot = snapshot_for(table);
        let encoded = SessionCodec::encode(&snapshot);

        group.bench_with_input(
            BenchmarkId::new("encode", size),
            &snapshot,
            |b, snapshot| {
                b.iter(|| black_box(SessionCodec::encode(snapshot)));
            },
        );
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| black_box(SessionCodec::decode(encoded)));
        });
    }

    group.finish();
}

fn snapshot_for(table: ParsedTable) -> SessionSnapshot {
    let selection = table.header.clone();
    SessionSnapshot {
        dataset: Dataset::new(Delimiter::Comma, table),
        selection,
        return_url: String::new(),
        hotkeys_in_inputs: true,
    }
}

criterion_group!(benches, benchmark_parse, benchmark_detect, benchmark_codec);
criterion_main!(benches);
