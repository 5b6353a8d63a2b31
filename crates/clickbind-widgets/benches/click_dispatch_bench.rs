//! Benchmarks for click dispatch through the bridge.
//!
//! Run with: `cargo bench --package clickbind-widgets --bench click_dispatch_bench`
//!
//! | Benchmark                  | What it measures                                 |
//! |----------------------------|--------------------------------------------------|
//! | dispatch/plain_listener    | baseline: widget slot to closure                 |
//! | dispatch/bridged           | widget slot to listener to emitter to observer   |
//! | dispatch/bridged_mapped    | as above, plus one `map` stage                   |
//! | lifecycle/subscribe_cycle  | subscribe then unsubscribe, bridge-owned         |
//! | lifecycle/caller_owned     | subscribe then unsubscribe, caller-owned         |

use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

use clickbind_core::{ClickTarget, UiThread};
use clickbind_widgets::{BindableListener, Button, ClickStreams};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const BURSTS: [u64; 3] = [1, 64, 1024];

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for &burst in &BURSTS {
        group.throughput(Throughput::Elements(burst));

        let plain = Button::new("plain");
        let hits = Rc::new(Cell::new(0u64));
        let counter = Rc::clone(&hits);
        plain.set_click_listener(Some(Rc::new(move || counter.set(counter.get() + 1))));
        group.bench_with_input(BenchmarkId::new("plain_listener", burst), &burst, |b, &n| {
            b.iter(|| {
                for _ in 0..n {
                    black_box(plain.perform_click());
                }
            })
        });

        let bridged = Rc::new(Button::new("bridged"));
        let hits = Rc::new(Cell::new(0u64));
        let counter = Rc::clone(&hits);
        let _sub = bridged
            .clicks(UiThread::current())
            .subscribe(move |_| counter.set(counter.get() + 1))
            .expect("subscribe");
        group.bench_with_input(BenchmarkId::new("bridged", burst), &burst, |b, &n| {
            b.iter(|| {
                for _ in 0..n {
                    black_box(bridged.perform_click());
                }
            })
        });

        let mapped = Rc::new(Button::new("mapped"));
        let total = Rc::new(Cell::new(0u64));
        let sink = Rc::clone(&total);
        let _mapped_sub = mapped
            .clicks(UiThread::current())
            .map(|_| 1u64)
            .subscribe(move |v| sink.set(sink.get() + v))
            .expect("subscribe");
        group.bench_with_input(BenchmarkId::new("bridged_mapped", burst), &burst, |b, &n| {
            b.iter(|| {
                for _ in 0..n {
                    black_box(mapped.perform_click());
                }
            })
        });
    }

    group.finish();
}

fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    let button = Rc::new(Button::new("cycle"));
    let stream = button.clicks(UiThread::current());
    group.bench_function("subscribe_cycle", |b| {
        b.iter(|| {
            let mut sub = stream.subscribe(|_| {}).expect("subscribe");
            sub.unsubscribe().expect("unsubscribe");
            black_box(sub.is_unsubscribed())
        })
    });

    let owned = Rc::new(Button::new("owned"));
    let listener = Rc::new(BindableListener::new());
    owned.set_click_listener(Some(listener.clone()));
    let borrowed = owned.clicks_with(listener, UiThread::current());
    group.bench_function("caller_owned", |b| {
        b.iter(|| {
            let mut sub = borrowed.subscribe(|_| {}).expect("subscribe");
            sub.unsubscribe().expect("unsubscribe");
            black_box(sub.is_unsubscribed())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_lifecycle);
criterion_main!(benches);
