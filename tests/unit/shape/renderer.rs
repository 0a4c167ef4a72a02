use super::*;
use crate::{
    foundation::core::Argb,
    shape::spec::Border,
    texture::generator::{WaveColors, WaveTextureGenerator},
};

fn paint(canvas: Canvas) -> WavePaint {
    let texture = WaveTextureGenerator::default()
        .generate(canvas, WaveColors::default())
        .unwrap();
    WavePaint {
        texture: Arc::new(texture),
        transform: Affine::translate((5.0, 0.0)),
    }
}

fn bordered(kind: ShapeKind, width: u32) -> ShapeSpec {
    ShapeSpec {
        kind,
        border: Some(Border {
            width,
            color: Argb(0xFF00_00FF),
        }),
    }
}

#[test]
fn circle_with_border_emits_ring_then_fill() {
    let canvas = Canvas::new(200, 100);
    let ops = compile_shape(canvas, &bordered(ShapeKind::Circle, 10), Some(paint(canvas)));
    assert_eq!(ops.len(), 2);

    match &ops[0] {
        DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        } => {
            assert_eq!(*center, Point::new(100.0, 50.0));
            assert_eq!(*radius, (100.0 - 10.0) / 2.0 - 1.0);
            assert_eq!(*width, 10.0);
            assert_eq!(*color, Argb(0xFF00_00FF));
        }
        other => panic!("expected StrokeCircle, got {other:?}"),
    }
    match &ops[1] {
        DrawOp::FillCircle {
            center,
            radius,
            paint,
        } => {
            assert_eq!(*center, Point::new(100.0, 50.0));
            assert_eq!(*radius, 40.0);
            assert_eq!(paint.transform, Affine::translate((5.0, 0.0)));
        }
        other => panic!("expected FillCircle, got {other:?}"),
    }
}

#[test]
fn rectangle_with_border_insets_stroke_and_fill() {
    let canvas = Canvas::new(100, 60);
    let ops = compile_shape(canvas, &bordered(ShapeKind::Rectangle, 4), Some(paint(canvas)));
    assert_eq!(ops.len(), 2);

    match &ops[0] {
        DrawOp::StrokeRect { rect, width, .. } => {
            assert_eq!(*rect, Rect::new(2.0, 2.0, 97.5, 57.5));
            assert_eq!(*width, 4.0);
        }
        other => panic!("expected StrokeRect, got {other:?}"),
    }
    match &ops[1] {
        DrawOp::FillRect { rect, .. } => assert_eq!(*rect, Rect::new(4.0, 4.0, 96.0, 56.0)),
        other => panic!("expected FillRect, got {other:?}"),
    }
}

#[test]
fn borderless_shapes_emit_fill_only() {
    let canvas = Canvas::new(80, 80);
    for kind in [ShapeKind::Circle, ShapeKind::Rectangle] {
        let ops = compile_shape(canvas, &ShapeSpec::new(kind), Some(paint(canvas)));
        assert_eq!(ops.len(), 1);
        assert!(ops[0].is_fill());
    }

    let zero_width = bordered(ShapeKind::Rectangle, 0);
    let ops = compile_shape(canvas, &zero_width, Some(paint(canvas)));
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        DrawOp::FillRect { rect, .. } => assert_eq!(*rect, Rect::new(0.0, 0.0, 80.0, 80.0)),
        other => panic!("expected FillRect, got {other:?}"),
    }
}

#[test]
fn hidden_wave_attaches_no_texture() {
    let canvas = Canvas::new(120, 90);
    for kind in [ShapeKind::Circle, ShapeKind::Rectangle] {
        let ops = compile_shape(canvas, &bordered(kind, 6), None);
        assert_eq!(ops.len(), 1);
        assert!(ops.iter().all(|op| op.paint().is_none()));
    }
    assert!(compile_shape(canvas, &ShapeSpec::default(), None).is_empty());
}

#[test]
fn zero_size_canvas_draws_nothing() {
    let spec = bordered(ShapeKind::Circle, 2);
    assert!(compile_shape(Canvas::new(0, 50), &spec, None).is_empty());
}

#[test]
fn border_wider_than_shape_drops_empty_fill() {
    let canvas = Canvas::new(10, 10);
    let ops = compile_shape(canvas, &bordered(ShapeKind::Rectangle, 6), Some(paint(canvas)));
    assert!(ops.iter().all(|op| !op.is_fill()));

    let ops = compile_shape(canvas, &bordered(ShapeKind::Circle, 5), Some(paint(canvas)));
    assert!(ops.iter().all(|op| !op.is_fill()));
}

#[test]
fn faint_border_color_is_kept_straight() {
    let spec = ShapeSpec {
        kind: ShapeKind::Rectangle,
        border: Some(Border {
            width: 2,
            color: Argb(0x0364_0000),
        }),
    };
    let ops = compile_shape(Canvas::new(20, 20), &spec, None);
    match &ops[0] {
        DrawOp::StrokeRect { color, .. } => assert_eq!(*color, Argb(0x0364_0000)),
        other => panic!("expected StrokeRect, got {other:?}"),
    }
}
