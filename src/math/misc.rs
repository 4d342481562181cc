pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}
