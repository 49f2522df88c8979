//! End-to-end behavior of `shapecraft::process`

use image::RgbaImage;
use shapecraft::{CRITERIA_TEMPLATE, RenderResult, Status, catalog, process};

fn decode(result: &RenderResult) -> RgbaImage {
    let png = result.image.as_ref().expect("successful render carries an image");
    assert_eq!(png.mime_type, "image/png");
    image::load_from_memory(&png.bytes).unwrap().to_rgba8()
}

fn is_black(img: &RgbaImage, x: u32, y: u32) -> bool {
    img.get_pixel(x, y).0 == [0, 0, 0, 255]
}

fn is_white(img: &RgbaImage, x: u32, y: u32) -> bool {
    img.get_pixel(x, y).0 == [255, 255, 255, 255]
}

#[test]
fn every_template_renders() {
    for shape in catalog() {
        let result = process(shape.template());
        assert_eq!(result.status, Status::Success, "{}: {}", shape.name(), result.message);
        assert_eq!(result.status.code(), 0);
        assert!(result.message.is_empty());
        assert!(!result.image.as_ref().unwrap().bytes.is_empty());
    }
}

#[test]
fn garbled_measurement_returns_template() {
    let cases = [
        ("Draw a circle with a diameter of 100", "Draw a circle with a radius of 100"),
        ("Draw a square with a side size of 200", "Draw a square with a side length of 200"),
        (
            "Draw a rectangle with a width of 250 and a depth of 400",
            "Draw a rectangle with a width of 250 and a height of 400",
        ),
        ("Draw an octagon with a side size of 200", "Draw an octagon with a side length of 200"),
        (
            "Draw an isosceles triangle with a height of 200 and a base of 100",
            "Draw an isosceles triangle with a height of 200 and a width of 100",
        ),
        (
            "Draw an equilateral triangle with a side size of 200",
            "Draw a equilateral triangle with a side length of 200",
        ),
        (
            "Draw a parallelogram with a depth of 200 and a height of 100",
            "Draw a parallelogram with a width of 200 and a height of 100",
        ),
        ("Draw a pentagon with a side size of 200", "Draw a pentagon with a side length of 200"),
        ("Draw a hexagon with a side size of 200", "Draw a hexagon with a side length of 200"),
        ("Draw a heptagon with a side size of 200", "Draw a heptagon with a side length of 200"),
    ];

    for (input, template) in cases {
        let result = process(input);
        assert_eq!(result.status, Status::Failure, "{input}");
        assert_eq!(result.status.code(), -1);
        assert_eq!(result.message, format!("Acceptance Criteria is: {template}"), "{input}");
        assert!(result.image.is_none());
    }
}

#[test]
fn non_numeric_amount_returns_template() {
    let result = process("Draw a circle with a radius of ten");
    assert!(!result.is_success());
    assert_eq!(
        result.message,
        "Acceptance Criteria is: Draw a circle with a radius of 100"
    );

    let result = process("Draw a circle with a radius of 12.5");
    assert_eq!(
        result.message,
        "Acceptance Criteria is: Draw a circle with a radius of 100"
    );
}

#[test]
fn negative_amount_is_reported() {
    let result = process("Draw a rectangle with a width of -3 and a height of 4");
    assert!(!result.is_success());
    insta::assert_snapshot!(
        result.message,
        @"The width must be greater than zero. Acceptance Criteria is: Draw a rectangle with a width of 250 and a height of 400"
    );
}

#[test]
fn unknown_shape_returns_generic_template() {
    for input in ["Draw a blob", "", "   ", "draw a", "triangle", "Draw an isosceles"] {
        let result = process(input);
        assert!(!result.is_success(), "{input:?}");
        assert_eq!(result.message, CRITERIA_TEMPLATE, "{input:?}");
    }
    assert_eq!(
        CRITERIA_TEMPLATE,
        "Draw a(n) <shape> with a <measurement> of <amount> [and a(n) <measurement> of <amount>] "
    );
}

#[test]
fn missing_length_is_malformed() {
    let result = process("Draw a hexagon");
    assert!(!result.is_success());
    assert_eq!(
        result.message,
        "Acceptance Criteria is: Draw a hexagon with a side length of 200"
    );
}

#[test]
fn case_insensitive() {
    let upper = process("DRAW A CIRCLE WITH A RADIUS OF 100");
    let lower = process("draw a circle with a radius of 100");
    assert!(upper.is_success());
    assert_eq!(upper, lower);

    assert_eq!(process("DRAW A HEXAGON"), process("draw a hexagon"));
}

#[test]
fn idempotent() {
    for input in [
        "Draw an octagon with a side length of 50",
        "Draw a parallelogram with a width of 90 and a height of 30",
        "Draw a blob",
    ] {
        assert_eq!(process(input), process(input), "{input}");
    }
}

#[test]
fn square_outline() {
    let result = process("Draw a square with a side length of 200");
    let img = decode(&result);
    assert_eq!(img.dimensions(), (201, 201));

    assert!(is_black(&img, 0, 0));
    assert!(is_black(&img, 200, 200));
    assert!(is_black(&img, 0, 100));
    assert!(is_black(&img, 200, 100));
    assert!(is_black(&img, 100, 0));
    assert!(is_black(&img, 100, 200));
    assert!(is_white(&img, 100, 100));
    assert!(is_white(&img, 1, 1));
}

#[test]
fn rectangle_canvas() {
    let img = decode(&process(
        "Draw a rectangle with a width of 250 and a height of 400",
    ));
    assert_eq!(img.dimensions(), (251, 401));
    assert!(is_black(&img, 250, 200));
    assert!(is_white(&img, 125, 200));
}

#[test]
fn circle_canvas() {
    let img = decode(&process("Draw a circle with a radius of 100"));
    assert_eq!(img.dimensions(), (201, 201));
    assert!(is_black(&img, 100, 0));
    assert!(is_black(&img, 0, 100));
    assert!(is_white(&img, 100, 100));
    assert!(is_white(&img, 0, 0));
}

#[test]
fn equilateral_triangle_canvas() {
    let img = decode(&process(
        "Draw an equilateral triangle with a side length of 200",
    ));
    assert_eq!(img.dimensions(), (401, 401));
    // the edge between the two lower vertices runs along y = 300
    assert!(is_black(&img, 199, 300));
    assert!(is_white(&img, 200, 200));
}

#[test]
fn polygon_canvas_sizes() {
    let cases = [
        ("Draw an octagon with a side length of 200", (401, 401)),
        ("Draw a pentagon with a side length of 200", (401, 401)),
        ("Draw a hexagon with a side length of 200", (401, 401)),
        ("Draw a heptagon with a side length of 200", (601, 601)),
        (
            "Draw an isosceles triangle with a height of 200 and a width of 100",
            (101, 201),
        ),
        (
            "Draw a parallelogram with a width of 200 and a height of 100",
            (201, 101),
        ),
    ];
    for (input, dims) in cases {
        assert_eq!(decode(&process(input)).dimensions(), dims, "{input}");
    }
}

#[test]
fn oversize_request_is_refused() {
    let result = process("Draw a heptagon with a side length of 2000000000");
    assert!(!result.is_success());
    insta::assert_snapshot!(
        result.message,
        @"The heptagon would need a 6000000001x6000000001 canvas, larger than the 8192 pixel limit. Acceptance Criteria is: Draw a heptagon with a side length of 200"
    );
}

#[test]
fn data_uri_for_embedding() {
    let result = process("Draw a square with a side length of 10");
    let uri = result.image.unwrap().data_uri();
    // PNG signature, base64-encoded
    assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn engine_is_shared_across_threads() {
    use std::sync::Arc;

    let engine = Arc::new(shapecraft::Engine::new());
    let handles: Vec<_> = (1..=4)
        .map(|radius| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .process(&format!("Draw a circle with a radius of {radius}"))
                    .is_success()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
