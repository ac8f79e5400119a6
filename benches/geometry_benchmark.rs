use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use egui::{pos2, vec2};
use std::time::Duration;
use tab_slider::slider::SliderGeometry;
use tab_slider::{Orientation, PointerChange, PointerId, TabSlider, TabSliderConfig};

fn benchmark_pointer_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_mapping");
    group.throughput(Throughput::Elements(1000));

    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let mut geometry = SliderGeometry::new(orientation);
        geometry.on_resize(orientation.vec(800.0, 40.0));

        group.bench_function(format!("{:?}", orientation), |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..1000 {
                    let position = geometry.pointer_to_position(black_box(i as f32));
                    sum += geometry.position_to_offset(position);
                }
                sum
            });
        });
    }

    group.finish();
}

fn benchmark_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_session");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("press_move_release", |b| {
        let mut slider = TabSlider::horizontal(0.0, 0.0..=100.0, TabSliderConfig::default())
            .unwrap()
            .on_value_change(|value| {
                black_box(value);
            });
        slider.on_resize(vec2(800.0, 40.0));
        let pointer = PointerId(0);

        b.iter(|| {
            slider.handle_pointer(PointerChange::down(pointer, pos2(20.0, 20.0)));
            for i in 0..998 {
                slider.handle_pointer(PointerChange::moved(pointer, pos2(black_box(i as f32 * 0.8), 20.0)));
                slider.tick(Duration::from_millis(1));
            }
            slider.handle_pointer(PointerChange::up(pointer, pos2(780.0, 20.0)));
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_pointer_mapping, benchmark_drag_session);
criterion_main!(benches);
