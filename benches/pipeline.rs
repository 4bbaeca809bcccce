use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use collision_data::aggregate::{EventAggregator, RawEvent};
use collision_data::binary::{decode_records, Endianness, RecordLayout, RecordWriter};
use collision_data::collector::{EventCollector, ExtractionConfig};
use collision_data::particles::ParticleCategory;
use collision_data::query::EventIndex;
use collision_data::reader::InMemorySource;
use collision_data::record::EventRecord;
use collision_data::schema::CollectionBatchBuilder;

fn sample_event(n: usize) -> RawEvent {
    RawEvent::new(n as i32)
        .with_collection(ParticleCategory::Electron, vec![30_000.0; n % 3])
        .with_collection(ParticleCategory::Photon, vec![50_000.0; n % 2])
        .with_collection(ParticleCategory::Jet, vec![12_500.0; 2 + n % 7])
        .with_collection(ParticleCategory::Tau, vec![1_777.0; n % 2])
}

/// Benchmark aggregation of single events
fn bench_aggregate(c: &mut Criterion) {
    let aggregator = EventAggregator::default();
    let events: Vec<_> = (0..1_000).map(sample_event).collect();

    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("1000_events", |b| {
        b.iter(|| {
            for event in &events {
                black_box(aggregator.aggregate(black_box(event)));
            }
        })
    });
    group.finish();
}

/// Benchmark record encoding and decoding
fn bench_encode(c: &mut Criterion) {
    let aggregator = EventAggregator::default();
    let records: Vec<EventRecord> = (0..10_000)
        .map(|n| aggregator.aggregate(&sample_event(n)).record)
        .collect();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(records.len() as u64));
    for order in [Endianness::Native, Endianness::Big] {
        let layout = RecordLayout::new(order);
        group.bench_with_input(BenchmarkId::new("write", order), &layout, |b, &layout| {
            b.iter(|| {
                let mut writer = RecordWriter::new(Vec::with_capacity(records.len() * 304), layout);
                writer.write_records(&records).unwrap();
                black_box(writer.finish_into_inner().unwrap())
            })
        });

        let mut writer = RecordWriter::new(Vec::new(), layout);
        writer.write_records(&records).unwrap();
        let bytes = writer.finish_into_inner().unwrap();
        group.bench_with_input(BenchmarkId::new("decode", order), &bytes, |b, bytes| {
            b.iter(|| black_box(decode_records(bytes, layout).unwrap()))
        });
    }
    group.finish();
}

/// Benchmark the collector over in-memory batches
fn bench_collect(c: &mut Criterion) {
    let mut builder = CollectionBatchBuilder::with_capacity(10_000);
    for n in 0..10_000u64 {
        builder.push_event(n, [&[30_000.0], &[], &[40_000.0], &[10_000.0, 20_000.0], &[]]);
    }
    let batch = builder.finish().unwrap();

    let mut group = c.benchmark_group("collect");
    for cap in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(cap as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cap), &cap, |b, &cap| {
            b.iter(|| {
                let source = InMemorySource::new().with_file("bench", vec![batch.clone()]);
                let mut collector =
                    EventCollector::with_source(source, &ExtractionConfig::with_event_cap(cap))
                        .unwrap();
                black_box(collector.collect(&["bench"]).unwrap())
            })
        });
    }
    group.finish();
}

/// Records with rest energies spread over 0-260 GeV
fn query_records(count: usize) -> Vec<EventRecord> {
    (0..count)
        .map(|n| {
            let rest = ((n * 7919) % 26_000) as f32 / 100.0;
            EventRecord::new(n as i32, "jet,jet", 13000.0, rest, rest / 13000.0)
        })
        .collect()
}

/// Benchmark index build, range and max-efficiency queries
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for count in [10_000usize, 100_000] {
        let records = query_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &records, |b, records| {
            b.iter(|| black_box(EventIndex::new(records.clone())))
        });

        let index = EventIndex::new(records);
        group.bench_with_input(BenchmarkId::new("range", count), &index, |b, index| {
            b.iter(|| {
                for j in 0..10 {
                    let min = 100.0 + 10.0 * j as f32;
                    black_box(index.range(black_box(min), black_box(min + 50.0)).len());
                }
            })
        });
        group.bench_with_input(
            BenchmarkId::new("max_efficiency", count),
            &index,
            |b, index| b.iter(|| black_box(index.max_efficiency())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_encode,
    bench_collect,
    bench_query
);
criterion_main!(benches);
